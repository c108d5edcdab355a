use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file the logger writes to instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Deep-link base used to re-enter the host application, e.g.
    /// `igpl://app`. If absent, resume requests are dropped.
    #[serde(default)]
    pub resume_target: Option<String>,
    /// Overlay window size, used when the platform refuses fullscreen.
    #[serde(default = "default_overlay_size")]
    pub overlay_size: (f32, f32),
}

fn default_overlay_size() -> (f32, f32) {
    (480.0, 800.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            resume_target: None,
            overlay_size: default_overlay_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
