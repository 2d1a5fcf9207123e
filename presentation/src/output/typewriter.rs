//! Character-by-character text animation

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Print `text` one character at a time in bold yellow, then a newline
///
/// With no delay the text is printed in one go.
pub async fn type_out(text: &str, delay: Option<Duration>) -> io::Result<()> {
    let mut stdout = io::stdout();

    let Some(delay) = delay else {
        writeln!(stdout, "{}", text.yellow().bold())?;
        return stdout.flush();
    };

    for ch in text.chars() {
        if ch.is_whitespace() {
            write!(stdout, "{}", ch)?;
        } else {
            write!(stdout, "{}", ch.to_string().yellow().bold())?;
        }
        stdout.flush()?;
        tokio::time::sleep(delay).await;
    }
    writeln!(stdout)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_type_out_without_delay() {
        colored::control::set_override(false);
        assert!(type_out("This is the Dawn of War", None).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_out_waits_per_character() {
        let start = tokio::time::Instant::now();
        type_out("ab c", Some(Duration::from_millis(10)))
            .await
            .unwrap();
        // Whitespace is delayed like any other character
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
