use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "SCREENCAST_CONFIG";

/// Encoding configuration loaded from a YAML file.
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EncodeConfig {
    /// Sampling factor passed to the quantizer (1..=30)
    pub quality: u8,

    /// Compositing background as `#RRGGBB`
    pub background: String,

    /// Delay for frames that do not set their own
    pub delay_ms: u32,

    /// Delay for the final frame, overriding everything else
    pub last_delay_ms: Option<u32>,

    /// Number of repetitions, 0 loops forever
    pub loop_count: u16,

    /// Disposal for frames that do not set their own
    pub disposal: Disposal,

    /// Palette index marked transparent, if any
    pub transparent_index: Option<u8>,

    /// Frame sources in playback order
    pub frames: Vec<FrameSource>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            quality: neuquant::DEFAULT_QUALITY,
            background: "#FFFFFF".to_string(),
            delay_ms: 100,
            last_delay_ms: None,
            loop_count: 0,
            disposal: Disposal::default(),
            transparent_index: None,
            frames: Vec::new(),
        }
    }
}

/// What the viewer does with a frame before drawing the next one.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Disposal {
    /// No disposal specified
    #[default]
    Any,
    /// Leave the frame in place
    Keep,
    /// Clear to the background color
    Background,
    /// Restore what was there before the frame
    Previous,
}

/// One entry of the `frames` list: a bare path or a path with overrides.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum FrameSource {
    Path(PathBuf),
    Detailed(FrameSpec),
}

/// Frame entry with per-frame overrides.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrameSpec {
    pub path: PathBuf,
    #[serde(default)]
    pub delay_ms: Option<u32>,
    #[serde(default)]
    pub disposal: Option<Disposal>,
    #[serde(default)]
    pub transparent_index: Option<u8>,
}

impl FrameSource {
    fn parts(&self) -> (&Path, Option<u32>, Option<Disposal>, Option<u8>) {
        match self {
            FrameSource::Path(path) => (path, None, None, None),
            FrameSource::Detailed(spec) => (
                &spec.path,
                spec.delay_ms,
                spec.disposal,
                spec.transparent_index,
            ),
        }
    }
}

/// A frame file with all defaults merged in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrame {
    pub path: PathBuf,
    pub delay_ms: u32,
    pub disposal: Disposal,
    pub transparent_index: Option<u8>,
}

/// Values given on the command line. `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub quality: Option<u8>,
    pub background: Option<String>,
    pub delay_ms: Option<u32>,
    pub last_delay_ms: Option<u32>,
    pub loop_count: Option<u16>,
    /// Replaces the configured frame list when non-empty
    pub frames: Vec<PathBuf>,
}

impl EncodeConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            frames = config.frames.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load the explicitly named config, or the one named by
    /// [`CONFIG_ENV`], or defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, from_env.as_deref())
    }

    /// An explicit path must be readable. A path from the environment falls
    /// back to defaults with a warning.
    pub fn load_from(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match from_env {
            Some(path) => match Self::from_file(path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config, using defaults");
                    Ok(Self::default())
                }
            },
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(quality) = overrides.quality {
            self.quality = quality;
        }
        if let Some(background) = overrides.background {
            self.background = background;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.delay_ms = delay_ms;
        }
        if let Some(last_delay_ms) = overrides.last_delay_ms {
            self.last_delay_ms = Some(last_delay_ms);
        }
        if let Some(loop_count) = overrides.loop_count {
            self.loop_count = loop_count;
        }
        if !overrides.frames.is_empty() {
            self.frames = overrides.frames.into_iter().map(FrameSource::Path).collect();
        }
    }

    /// Expand frame sources into concrete files with defaults merged in.
    ///
    /// Directories expand to their `*.png` files sorted by name. Missing
    /// paths are skipped with a warning. May return an empty list.
    pub fn resolve_frames(&self) -> Vec<ResolvedFrame> {
        let mut resolved = Vec::new();

        for source in &self.frames {
            let (path, delay_ms, disposal, transparent_index) = source.parts();
            let make = |path: PathBuf| ResolvedFrame {
                path,
                delay_ms: delay_ms.unwrap_or(self.delay_ms),
                disposal: disposal.unwrap_or(self.disposal),
                transparent_index: transparent_index.or(self.transparent_index),
            };

            if path.is_dir() {
                let files = png_files_in(path);
                if files.is_empty() {
                    tracing::warn!(path = %path.display(), "No PNG files in directory");
                }
                resolved.extend(files.into_iter().map(make));
            } else if path.is_file() {
                resolved.push(make(path.to_path_buf()));
            } else {
                tracing::warn!(path = %path.display(), "Frame not found, skipping");
            }
        }

        if let (Some(last), Some(delay_ms)) = (resolved.last_mut(), self.last_delay_ms) {
            last.delay_ms = delay_ms;
        }

        resolved
    }
}

fn png_files_in(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), %e, "Failed to read frame directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
        })
        .collect();
    files.sort();
    files
}
