//! Line editing over raw key events

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the reader should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing to show
    Ignored,
    /// Echo the typed character
    Echo(char),
    /// Erase the last echoed character
    Erase,
    /// Enter pressed; the finished line
    Submit(String),
    /// Esc, Ctrl+C, or Ctrl+D on an empty line
    Cancel,
}

/// Accumulates typed characters until Enter
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind == KeyEventKind::Release {
            return KeyOutcome::Ignored;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => KeyOutcome::Cancel,
            KeyCode::Char('c') if ctrl => KeyOutcome::Cancel,
            KeyCode::Char('d') if ctrl && self.buffer.is_empty() => KeyOutcome::Cancel,
            KeyCode::Char(_) if ctrl => KeyOutcome::Ignored,
            KeyCode::Enter => KeyOutcome::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Backspace => match self.buffer.pop() {
                Some(_) => KeyOutcome::Erase,
                None => KeyOutcome::Ignored,
            },
            KeyCode::Char(c) => {
                self.buffer.push(c);
                KeyOutcome::Echo(c)
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_and_submit() {
        let mut line = LineBuffer::new();
        assert_eq!(line.handle_key(key(KeyCode::Char('1'))), KeyOutcome::Echo('1'));
        assert_eq!(line.handle_key(key(KeyCode::Char('2'))), KeyOutcome::Echo('2'));
        assert_eq!(line.as_str(), "12");
        assert_eq!(
            line.handle_key(key(KeyCode::Enter)),
            KeyOutcome::Submit("12".to_string())
        );
        assert_eq!(line.as_str(), "");
    }

    #[test]
    fn test_backspace() {
        let mut line = LineBuffer::new();
        assert_eq!(line.handle_key(key(KeyCode::Backspace)), KeyOutcome::Ignored);
        line.handle_key(key(KeyCode::Char('9')));
        line.handle_key(key(KeyCode::Char('3')));
        assert_eq!(line.handle_key(key(KeyCode::Backspace)), KeyOutcome::Erase);
        assert_eq!(
            line.handle_key(key(KeyCode::Enter)),
            KeyOutcome::Submit("9".to_string())
        );
    }

    #[test]
    fn test_escape_cancels_mid_line() {
        let mut line = LineBuffer::new();
        line.handle_key(key(KeyCode::Char('4')));
        assert_eq!(line.handle_key(key(KeyCode::Esc)), KeyOutcome::Cancel);
    }

    #[test]
    fn test_control_keys() {
        let mut line = LineBuffer::new();
        assert_eq!(line.handle_key(ctrl('c')), KeyOutcome::Cancel);
        assert_eq!(line.handle_key(ctrl('d')), KeyOutcome::Cancel);

        line.handle_key(key(KeyCode::Char('1')));
        assert_eq!(line.handle_key(ctrl('d')), KeyOutcome::Ignored);
        assert_eq!(line.handle_key(ctrl('a')), KeyOutcome::Ignored);
        assert_eq!(line.as_str(), "1");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut line = LineBuffer::new();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(line.handle_key(release), KeyOutcome::Ignored);
        assert_eq!(line.as_str(), "");
    }
}
