//! Terminal renderer for generated animations.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use futures_util::StreamExt;
use tokio::sync::watch;

use crate::application::AnimationPlayer;
use crate::domain::PlaybackSnapshot;

/// Play `frames` full-screen until the user quits.
///
/// `space` toggles play/pause; `q`, `Esc` or `Ctrl-C` quit. The terminal is
/// restored even when drawing fails.
pub async fn play(frames: Vec<String>) -> Result<()> {
    let mut player = AnimationPlayer::new();
    let mut updates = player.subscribe();
    player.load(frames);

    let mut stdout = io::stdout();
    let screen = ScreenGuard::enter(&mut stdout)?;
    let result = run(&mut player, &mut updates, &mut stdout).await;
    player.shutdown();
    result.and(screen.restore())
}

/// Raw mode plus the alternate screen, undone exactly once: by
/// [`ScreenGuard::restore`] or, on early exit, by drop.
struct ScreenGuard {
    leave: Option<fn() -> io::Result<()>>,
}

impl ScreenGuard {
    fn enter(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self {
            leave: Some(leave_screen),
        };
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }

    fn restore(mut self) -> Result<()> {
        match self.leave.take() {
            Some(leave) => Ok(leave()?),
            None => Ok(()),
        }
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if let Some(leave) = self.leave.take() {
            let _ = leave();
        }
    }
}

/// Every step runs; the first failure is reported.
fn leave_screen() -> io::Result<()> {
    let screen = execute!(io::stdout(), Show, LeaveAlternateScreen);
    let raw = terminal::disable_raw_mode();
    screen.and(raw)
}

async fn run(
    player: &mut AnimationPlayer,
    updates: &mut watch::Receiver<PlaybackSnapshot>,
    out: &mut impl Write,
) -> Result<()> {
    let mut events = EventStream::new();
    let snapshot = updates.borrow_and_update().clone();
    draw(out, &snapshot)?;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                draw(out, &snapshot)?;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') => player.toggle(),
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => {}
                },
                Some(Ok(Event::Resize(..))) => {
                    let snapshot = updates.borrow().clone();
                    draw(out, &snapshot)?;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

fn draw(out: &mut impl Write, snapshot: &PlaybackSnapshot) -> io::Result<()> {
    let (_, height) = terminal::size()?;
    let frame_rows = height.saturating_sub(1);

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    match &snapshot.frame {
        Some(frame) => {
            // Raw mode: no implicit carriage return, so position every line.
            for (row, line) in (0..frame_rows).zip(frame.lines()) {
                queue!(out, MoveTo(0, row), Print(line))?;
            }
        }
        None => queue!(out, Print("No frames to play."))?,
    }
    queue!(out, MoveTo(0, frame_rows), Print(status_line(snapshot)))?;
    out.flush()
}

fn status_line(snapshot: &PlaybackSnapshot) -> String {
    let state = if snapshot.is_playing { "PLAYING" } else { "PAUSED" };
    match snapshot.counter() {
        Some(counter) => format!("{counter}  {state}  [space] play/pause  [q] quit"),
        None => "[q] quit".to_string(),
    }
}
