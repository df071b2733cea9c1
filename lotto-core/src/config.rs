use crate::countdown::DrawSchedule;
use crate::error::{LottoError, Result};
use crate::format::DEFAULT_CLIPBOARD_LABEL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LottoConfig {
    /// Delay between two reveals
    pub reveal_interval_ms: u64,
    /// "Generating" delay before the draw is computed
    pub preroll_ms: u64,
    pub draw_utc_offset_hours: i32,
    pub clipboard_label: String,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 500,
            preroll_ms: 0,
            draw_utc_offset_hours: DrawSchedule::DEFAULT_UTC_OFFSET_HOURS,
            clipboard_label: DEFAULT_CLIPBOARD_LABEL.to_string(),
        }
    }
}

impl LottoConfig {
    /// `<config dir>/lotto/config.json`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lotto")
            .join("config.json")
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reveal_interval_ms == 0 {
            return Err(LottoError::config(
                "Reveal interval must be greater than 0",
            ));
        }

        DrawSchedule::new(self.draw_utc_offset_hours)?;

        Ok(())
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn preroll(&self) -> Duration {
        Duration::from_millis(self.preroll_ms)
    }

    pub fn schedule(&self) -> Result<DrawSchedule> {
        DrawSchedule::new(self.draw_utc_offset_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = LottoConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.reveal_interval_ms, 500);
        assert_eq!(config.preroll_ms, 0);
        assert_eq!(config.draw_utc_offset_hours, 9);
        assert_eq!(config.clipboard_label, "Lotto numbers");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "preroll_ms": 3000 }"#).unwrap();

        let config = LottoConfig::load(&path).unwrap();
        assert_eq!(config.preroll(), Duration::from_secs(3));
        assert_eq!(config.reveal_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{ "reveal_interval_ms": 0 }"#).unwrap();
        assert!(matches!(
            LottoConfig::load(&path),
            Err(LottoError::Config(_))
        ));

        std::fs::write(&path, r#"{ "draw_utc_offset_hours": 99 }"#).unwrap();
        assert!(matches!(
            LottoConfig::load(&path),
            Err(LottoError::Config(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            LottoConfig::load(&path),
            Err(LottoError::Serialization(_))
        ));
    }
}
