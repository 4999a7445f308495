use dirs_next::config_dir;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::gjk::{DEFAULT_MAX_ITERATIONS, DEFAULT_SEED_DIRECTION, GjkParams};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GjkSettings {
    pub max_iterations: usize,
    pub seed_direction: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationSettings {
    /// Seconds per fixed physics update.
    pub physics_step: f32,
    /// Upper bound on the elapsed time fed in by a single frame.
    pub max_frame_time: f32,
    /// Simulated frames per second when driving the clock headless.
    pub frame_rate: f32,
    /// Demo run length in seconds.
    pub duration: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneSettings {
    pub speed: f32,
    pub bounds: Vec3,
    /// Per-step XYZ spin in degrees.
    pub spin_degrees: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub gjk: GjkSettings,
    pub simulation: SimulationSettings,
    pub scene: SceneSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gjk: GjkSettings {
                max_iterations: DEFAULT_MAX_ITERATIONS,
                seed_direction: DEFAULT_SEED_DIRECTION,
            },
            simulation: SimulationSettings {
                physics_step: 0.012,
                max_frame_time: 0.25,
                frame_rate: 60.0,
                duration: 10.0,
            },
            scene: SceneSettings {
                speed: 0.9,
                bounds: Vec3::new(1.35, 0.8, 1.0),
                spin_degrees: Vec3::new(1.0, 1.0, 0.0),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deserialization Error: {0}")]
    Serde(#[from] toml::de::Error),

    #[error("Serialization Error: {0}")]
    SerdeSer(#[from] toml::ser::Error),

    #[error("Configuration Directory Not Found")]
    ConfigDirNotFound,

    #[error("Invalid setting {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<&GjkSettings> for GjkParams {
    fn from(settings: &GjkSettings) -> Self {
        GjkParams {
            max_iterations: settings.max_iterations,
            seed_direction: settings.seed_direction,
        }
    }
}

impl Settings {
    /// Path of the per-user settings file.
    pub fn user_settings_path() -> Result<PathBuf, SettingsError> {
        let config_dir = config_dir().ok_or(SettingsError::ConfigDirNotFound)?;
        Ok(config_dir.join("gjk3d").join("settings.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads and validates settings from a specified file path.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves settings to a specified file path, ensuring the directory exists.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.gjk.max_iterations == 0 {
            return Err(SettingsError::Invalid {
                field: "gjk.max_iterations",
                reason: "must be at least 1",
            });
        }
        if self.gjk.seed_direction == Vec3::ZERO || !self.gjk.seed_direction.is_finite() {
            return Err(SettingsError::Invalid {
                field: "gjk.seed_direction",
                reason: "must be a finite non-zero vector",
            });
        }
        if !(self.simulation.physics_step > 0.0) {
            return Err(SettingsError::Invalid {
                field: "simulation.physics_step",
                reason: "must be positive",
            });
        }
        if !(self.simulation.max_frame_time >= self.simulation.physics_step) {
            return Err(SettingsError::Invalid {
                field: "simulation.max_frame_time",
                reason: "must be at least one physics step",
            });
        }
        if !(self.simulation.frame_rate > 0.0) {
            return Err(SettingsError::Invalid {
                field: "simulation.frame_rate",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Loads `path` if given, else the user settings file, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::user_settings_path() {
                Ok(path) if path.exists() => path,
                Ok(_) => {
                    log::info!("User settings not found. Using default settings.");
                    return Self::default();
                }
                Err(e) => {
                    log::warn!("{}. Using default settings.", e);
                    return Self::default();
                }
            },
        };

        match Self::load_from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Failed to load settings from {}: {}. Using default settings.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
