//! Configuration for interactive play.

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings for the terminal front end.
///
/// # Examples
///
/// ```
/// use noughts::app::PlayConfig;
///
/// let config = PlayConfig::default()
///     .with_reply_delay_ms(0)
///     .with_hints(true);
/// assert_eq!(config.reply_delay_ms, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Pause between the human's move and the engine's reply, so the human's
    /// mark is visible before the answer appears
    pub reply_delay_ms: u64,
    /// Show the minimax score of every empty cell before each human move
    pub show_hints: bool,
    /// Character drawn for empty cells
    pub empty_glyph: char,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            show_hints: false,
            empty_glyph: '.',
        }
    }
}

impl PlayConfig {
    pub fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    pub fn with_empty_glyph(mut self, glyph: char) -> Self {
        self.empty_glyph = glyph;
        self
    }

    /// Reject settings that would make the board unreadable
    pub fn validate(&self) -> Result<()> {
        let glyph = self.empty_glyph;
        if glyph.is_whitespace() && glyph != ' ' {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("empty_glyph {glyph:?} is whitespace other than a plain space"),
            });
        }
        if matches!(glyph, 'X' | 'x' | 'O' | 'o') {
            return Err(crate::Error::InvalidConfiguration {
                message: format!("empty_glyph '{glyph}' would be confused with a mark"),
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: PlayConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.reply_delay_ms, 500);
        assert!(!config.show_hints);
        assert_eq!(config.empty_glyph, '.');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn glyph_validation() {
        assert!(PlayConfig::default().with_empty_glyph(' ').validate().is_ok());
        assert!(PlayConfig::default().with_empty_glyph('-').validate().is_ok());
        assert!(PlayConfig::default().with_empty_glyph('x').validate().is_err());
        assert!(PlayConfig::default().with_empty_glyph('\t').validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: PlayConfig = serde_json::from_str(r#"{"show_hints": true}"#).unwrap();
        assert!(config.show_hints);
        assert_eq!(config.reply_delay_ms, 500);
    }
}
