use std::fmt;

use crate::domain::Fence;

const ASCII_SYSTEM_PROMPT: &str = r#"You are an expert ASCII art animator.
Your goal is to generate a short ASCII art animation based on the user's prompt.
The animation should consist of 10 to 15 frames.
Each frame should be a string containing the ASCII art.
Use newlines (\n) within the string to format the ASCII art vertically.
Keep the ASCII art relatively simple and clear (approx 40x20 chars).
Return ONLY valid JSON in the following format, with no markdown code blocks:
{
  "frames": [
    "frame 1 string...",
    "frame 2 string...",
    ...
  ]
}"#;

const UI_SYSTEM_PROMPT: &str = r#"You are an expert Frontend Developer and UI Designer known for "Vibe Coding".
Your goal is to generate a single, self-contained HTML file containing a stunning, modern UI component based on the user's prompt.

RULES:
1.  **Single File**: Output ONLY valid HTML.
2.  **Embedded CSS**: Use <style> tags for all styling. Use modern CSS (Flexbox, Grid, Animations, Glassmorphism, Gradients).
3.  **Embedded JS**: Use <script> tags for interactivity.
4.  **No External Deps**: Prefer standard CSS variables and simple inline styles or a style block so it works instantly in an iframe.
    *   You MAY use FontAwesome CDN for icons if needed: <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css" />
5.  **Aesthetics**: The design should be "Cyberpunk", "Vaporwave", or "Modern Clean" depending on the prompt, but always high quality.
6.  **Responsiveness**: The component should look good centered on the screen.

Output format:
Just the raw HTML code. Do not wrap in markdown code blocks like ```html.
"#;

/// The two generator apps served by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// ASCII cinema: prompt in, JSON list of frames out.
    Ascii,
    /// Vibe designer: prompt in, self-contained HTML document out.
    Ui,
}

impl Generator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Generator::Ascii => "ascii",
            Generator::Ui => "ui",
        }
    }

    /// Path of the HTTP endpoint that serves this generator.
    pub fn route(&self) -> &'static str {
        match self {
            Generator::Ascii => "/api/ascii",
            Generator::Ui => "/api/generate-ui",
        }
    }

    /// Fence tag the model tends to wrap this generator's output in.
    pub fn fence(&self) -> Fence {
        match self {
            Generator::Ascii => Fence::Json,
            Generator::Ui => Fence::Html,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Generator::Ascii => ASCII_SYSTEM_PROMPT,
            Generator::Ui => UI_SYSTEM_PROMPT,
        }
    }

    pub fn user_prompt(&self, prompt: &str) -> String {
        match self {
            Generator::Ascii => format!("Create an ASCII animation for: {prompt}"),
            Generator::Ui => format!("Create a UI component for: {prompt}"),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
