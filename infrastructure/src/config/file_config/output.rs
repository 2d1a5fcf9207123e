//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Type the intro out one character at a time
    pub typewriter: bool,
    /// Delay between typed characters, in milliseconds
    pub typewriter_delay_ms: u64,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            typewriter: true,
            typewriter_delay_ms: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::FileConfig;

    #[test]
    fn test_output_deserialize() {
        let toml_str = r#"
[output]
color = false
typewriter_delay_ms = 5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.output.color);
        assert!(config.output.typewriter);
        assert_eq!(config.output.typewriter_delay_ms, 5);
    }
}
