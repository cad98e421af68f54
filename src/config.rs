use bedtime_core::PickerConfig;
use directories::ProjectDirs;
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// `#rrggbb` colour as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DeserializeFromStr, SerializeDisplay)]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn to_srgba(self) -> Srgba<f64> {
        let c = self.0.into_format::<f64>();
        Srgba::new(c.red, c.green, c.blue, 1.0)
    }
}

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<Srgb<u8>>().map(Self)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.red, self.0.green, self.0.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Handle label colour; falls back to `progress_color`.
    pub label_color: Option<HexColor>,
    pub progress_color: HexColor,
    pub short_progress_color: HexColor,
    pub background_color: HexColor,
    pub division_color: HexColor,
    pub division_text_color: HexColor,
}

impl ThemeConfig {
    pub fn label_color(&self) -> HexColor {
        self.label_color.unwrap_or(self.progress_color)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            label_color: None,
            progress_color: HexColor::rgb(0x00, 0xca, 0xe2),
            short_progress_color: HexColor::rgb(0xfa, 0x91, 0x8e),
            background_color: HexColor::rgb(0x26, 0x2b, 0x42),
            division_color: HexColor::rgb(0xff, 0xff, 0xff),
            division_text_color: HexColor::rgb(0xae, 0xb3, 0xb9),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Drawn above the ring center.
    pub night: Option<PathBuf>,
    /// Drawn below the ring center.
    pub morning: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub theme: ThemeConfig,
    pub images: ImagesConfig,
}

/// Command line values that win over whatever the config file says.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub bed_angle: Option<f64>,
    pub wake_angle: Option<f64>,
    pub fixed_bed_time: bool,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(angle) = self.bed_angle {
            config.picker.bed_angle = angle;
        }
        if let Some(angle) = self.wake_angle {
            config.picker.wake_angle = angle;
        }
        config.picker.fixed_bed_time |= self.fixed_bed_time;
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "bedtime", "bedtime").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("BEDTIME")
        .separator("__")
        .try_parsing(true)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
