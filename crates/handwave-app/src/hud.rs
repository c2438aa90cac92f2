//! Terminal mini display
//!
//! Shows the current gesture label and session status.
//!
//! Controls:
//! - S or Space: Start/Stop (pause gesture recognition)
//! - R: Restart the session (clears cooldowns, swipe history and cursor)
//! - Q or Esc: Quit

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::handoff::{FeedSnapshot, FeedSubscriber};
use crate::worker::SessionControls;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudCommand {
    Quit,
    ToggleRunning,
    Restart,
}

/// Map a key to a command
pub fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<HudCommand> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(HudCommand::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(HudCommand::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => {
            Some(HudCommand::ToggleRunning)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HudCommand::Restart),
        _ => None,
    }
}

/// Text lines for one redraw
pub fn render_lines(snapshot: &FeedSnapshot, paused: bool, connected: bool) -> Vec<String> {
    let status = if !connected {
        "Ended"
    } else if paused {
        "Stopped"
    } else {
        "Running"
    };
    let hand = if snapshot.hand_present { "yes" } else { "no" };

    vec![
        "handwave".to_string(),
        String::new(),
        format!("  Gesture: {}", snapshot.event),
        String::new(),
        format!("  Status:  {}", status),
        format!("  Hand:    {}", hand),
        format!("  Frames:  {}", snapshot.frame),
        String::new(),
        "  [S] Start/Stop   [R] Restart   [Q] Quit".to_string(),
    ]
}

/// Restores the terminal even if drawing fails
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct Hud {
    feed: FeedSubscriber,
    controls: Arc<SessionControls>,
    refresh: Duration,
}

impl Hud {
    pub fn new(feed: FeedSubscriber, controls: Arc<SessionControls>) -> Self {
        Self {
            feed,
            controls,
            refresh: Duration::from_millis(50),
        }
    }

    pub fn with_refresh(mut self, refresh: Duration) -> Self {
        self.refresh = refresh;
        self
    }

    /// Run until the user quits; the worker ending leaves the last frame up
    pub fn run(&mut self) -> io::Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut stdout = io::stdout();
        let mut last_draw = Instant::now();
        let mut dirty = true;
        let mut connected = true;

        loop {
            let timeout = self
                .refresh
                .checked_sub(last_draw.elapsed())
                .unwrap_or_default();

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    match command_for(key.code, key.modifiers) {
                        Some(HudCommand::Quit) => break,
                        Some(HudCommand::ToggleRunning) => {
                            let paused = self.controls.toggle_pause();
                            tracing::info!(paused, "recognition toggled");
                            dirty = true;
                        }
                        Some(HudCommand::Restart) => {
                            self.controls.request_restart();
                            dirty = true;
                        }
                        None => {}
                    }
                }
            }

            if last_draw.elapsed() >= self.refresh {
                let now_connected = self.feed.is_connected();
                if dirty || self.feed.has_changed() || now_connected != connected {
                    connected = now_connected;
                    self.draw(&mut stdout, connected)?;
                    dirty = false;
                }
                last_draw = Instant::now();
            }
        }

        Ok(())
    }

    fn draw(&mut self, out: &mut impl Write, connected: bool) -> io::Result<()> {
        let snapshot = self.feed.latest();
        let lines = render_lines(&snapshot, self.controls.is_paused(), connected);

        queue!(out, terminal::Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handwave_engine::GestureEvent;

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            command_for(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(HudCommand::Quit)
        );
        assert_eq!(command_for(KeyCode::Esc, KeyModifiers::NONE), Some(HudCommand::Quit));
        assert_eq!(
            command_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(HudCommand::Quit)
        );
        assert_eq!(command_for(KeyCode::Char('c'), KeyModifiers::NONE), None);
        assert_eq!(
            command_for(KeyCode::Char(' '), KeyModifiers::NONE),
            Some(HudCommand::ToggleRunning)
        );
        assert_eq!(
            command_for(KeyCode::Char('r'), KeyModifiers::NONE),
            Some(HudCommand::Restart)
        );
    }

    #[test]
    fn test_render_shows_label_and_status() {
        let snapshot = FeedSnapshot::new(GestureEvent::NextTrack, 42, true);
        let lines = render_lines(&snapshot, false, true);
        assert!(lines.iter().any(|l| l.contains("Next track")));
        assert!(lines.iter().any(|l| l.contains("Running")));
        assert!(lines.iter().any(|l| l.contains("42")));

        let lines = render_lines(&snapshot, true, true);
        assert!(lines.iter().any(|l| l.contains("Stopped")));
        let lines = render_lines(&snapshot, false, false);
        assert!(lines.iter().any(|l| l.contains("Ended")));
    }

    #[test]
    fn test_render_cursor_coordinates() {
        let snapshot = FeedSnapshot::new(GestureEvent::Cursor { x: 640.4, y: 360.0 }, 1, true);
        let lines = render_lines(&snapshot, false, true);
        assert!(lines.iter().any(|l| l.contains("Cursor (640, 360)")));
    }
}
