// config.rs - Settings loaded from life_grid.toml

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use egui::Color32;
use life_grid::seed::find_pattern;
use life_grid::{Grid, GridError, Seeding};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "life_grid.toml";
pub const CONFIG_ENV: &str = "LIFE_GRID_CONFIG";

/// Largest accepted grid width or height.
pub const MAX_DIMENSION: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedingKind {
    Dead,
    Alive,
    #[default]
    Random,
    Checkerboard,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub seeding: SeedingKind,
    pub pattern: String,       // used when seeding = "pattern"
    pub seed: Option<u64>,     // fixed rng seed; entropy when absent
    pub density: f64,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            seeding: SeedingKind::Random,
            pattern: "Glider".to_string(),
            seed: None,
            density: 0.5,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
            window_width: 400.0,
            window_height: 300.0,
        }
    }
}

impl Settings {
    /// Reads `$LIFE_GRID_CONFIG`, or `life_grid.toml` in the working directory.
    /// A missing default file yields the defaults; a missing file named by the
    /// environment variable is an error.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    log::debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading settings from {}", path.display());
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "grid must be at most {}x{}, got {}x{}",
                MAX_DIMENSION, MAX_DIMENSION, self.width, self.height
            )));
        }
        for (name, value) in [("window_width", self.window_width), ("window_height", self.window_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Invalid(format!(
                "density must be between 0 and 1, got {}",
                self.density
            )));
        }
        if self.seeding == SeedingKind::Pattern && find_pattern(&self.pattern).is_none() {
            return Err(ConfigError::Invalid(format!("unknown pattern {:?}", self.pattern)));
        }
        Ok(())
    }

    pub fn seeding(&self) -> Result<Seeding, ConfigError> {
        Ok(match self.seeding {
            SeedingKind::Dead         => Seeding::Dead,
            SeedingKind::Alive        => Seeding::Alive,
            SeedingKind::Random       => Seeding::Random { density: self.density },
            SeedingKind::Checkerboard => Seeding::Checkerboard,
            SeedingKind::Pattern => {
                let pattern = find_pattern(&self.pattern)
                    .ok_or_else(|| ConfigError::Invalid(format!("unknown pattern {:?}", self.pattern)))?;
                Seeding::Pattern(pattern)
            }
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Builds the startup grid with the configured factory.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        let seeding = self.seeding()?;
        let grid = seeding.build(self.width, self.height, &mut self.rng())?;
        Ok(grid)
    }

    pub fn live_color(&self) -> Color32 {
        let [r, g, b] = self.live_color;
        Color32::from_rgb(r, g, b)
    }

    pub fn dead_color(&self) -> Color32 {
        let [r, g, b] = self.dead_color;
        Color32::from_rgb(r, g, b)
    }
}
