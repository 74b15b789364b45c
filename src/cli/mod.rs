use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve both generators and their web frontends over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Generate an ASCII animation and play it in the terminal
    Ascii {
        prompt: String,

        /// Print every frame instead of playing the animation
        #[arg(long)]
        print: bool,
    },

    /// Generate a self-contained HTML component
    Ui {
        prompt: String,

        /// Write the HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
