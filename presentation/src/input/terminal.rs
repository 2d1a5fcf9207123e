//! Raw-mode terminal input
//!
//! Raw mode is only enabled while a line is being read, so everything the
//! presenter prints in between behaves like normal cooked output. The
//! [`RawModeGuard`] restores the terminal on every exit path, including
//! cancellation.

use super::line_buffer::{KeyOutcome, LineBuffer};
use async_trait::async_trait;
use crossterm::event::{self, Event, EventStream};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::stream::StreamExt;
use std::io::{self, Write};
use std::time::Duration;
use warband_application::{AnswerInput, AnswerInputError, InputEvent};

/// Enables raw mode for its lifetime
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads answers key by key so a lone Esc can cancel
pub struct TerminalInput {
    events: EventStream,
    line: LineBuffer,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            line: LineBuffer::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerInput for TerminalInput {
    async fn read_line(&mut self) -> Result<InputEvent, AnswerInputError> {
        let _raw = RawModeGuard::enable()?;
        let mut stdout = io::stdout();

        while let Some(event) = self.events.next().await {
            let Event::Key(key) = event? else {
                continue;
            };

            match self.line.handle_key(key) {
                KeyOutcome::Ignored => {}
                KeyOutcome::Echo(c) => {
                    write!(stdout, "{}", c)?;
                    stdout.flush()?;
                }
                KeyOutcome::Erase => {
                    write!(stdout, "\x08 \x08")?;
                    stdout.flush()?;
                }
                KeyOutcome::Submit(line) => {
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(InputEvent::Line(line));
                }
                KeyOutcome::Cancel => {
                    self.line.clear();
                    write!(stdout, "\r\n")?;
                    stdout.flush()?;
                    return Ok(InputEvent::Cancelled);
                }
            }
        }

        Ok(InputEvent::Cancelled)
    }

    fn discard_pending(&mut self) {
        let Ok(_raw) = RawModeGuard::enable() else {
            return;
        };
        while matches!(event::poll(Duration::ZERO), Ok(true)) {
            if event::read().is_err() {
                break;
            }
        }
        self.line.clear();
    }
}
