//! Presentation-level configuration
//!
//! Configuration for console output. Built by the binary from the loaded
//! file configuration.

use std::time::Duration;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Per-character delay for the intro animation; `None` prints it at once
    pub typewriter_delay: Option<Duration>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            typewriter_delay: Some(Duration::from_millis(20)),
        }
    }
}

impl OutputConfig {
    pub fn new(color: bool, typewriter: bool, typewriter_delay_ms: u64) -> Self {
        Self {
            color,
            typewriter_delay: (typewriter && typewriter_delay_ms > 0)
                .then(|| Duration::from_millis(typewriter_delay_ms)),
        }
    }

    /// Plain output with no animation
    pub fn plain() -> Self {
        Self {
            color: false,
            typewriter_delay: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typewriter_disabled() {
        assert!(OutputConfig::new(true, false, 20).typewriter_delay.is_none());
        assert!(OutputConfig::new(true, true, 0).typewriter_delay.is_none());
    }

    #[test]
    fn test_typewriter_enabled() {
        let config = OutputConfig::new(false, true, 35);
        assert_eq!(config.typewriter_delay, Some(Duration::from_millis(35)));
        assert!(!config.color);
    }
}
