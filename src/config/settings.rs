//! Configuration settings for the bounded Game of Life

use crate::game_of_life::Preset;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub playback: PlaybackConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub side_length: usize,
    pub seed_probability: f64,
    /// Fixed RNG seed for reproducible random starts
    pub rng_seed: Option<u64>,
    /// Pattern file to seed from instead of random cells
    pub pattern_file: Option<PathBuf>,
    /// Built-in pattern to seed from instead of random cells
    pub preset: Option<Preset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub fps: u32,
    pub max_generations: Option<u64>,
    pub start_paused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: DisplayStyle,
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Compact,
    Coords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                side_length: 100,
                seed_probability: 0.08,
                rng_seed: None,
                pattern_file: None,
                preset: None,
            },
            playback: PlaybackConfig {
                fps: 5,
                max_generations: None,
                start_paused: false,
            },
            output: OutputConfig {
                style: DisplayStyle::Compact,
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.side_length == 0 {
            anyhow::bail!("Grid side length must be positive");
        }

        if !(0.0..=1.0).contains(&self.grid.seed_probability) {
            anyhow::bail!(
                "Seed probability must be within [0, 1], got {}",
                self.grid.seed_probability
            );
        }

        if self.playback.fps == 0 {
            anyhow::bail!("Frames per second must be positive");
        }

        if let Some(ref pattern_file) = self.grid.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        }

        Ok(())
    }

    /// Time budget for one rendered frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.playback.fps.max(1)))
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(side_length) = cli_overrides.side_length {
            self.grid.side_length = side_length;
        }
        if let Some(seed_probability) = cli_overrides.seed_probability {
            self.grid.seed_probability = seed_probability;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.grid.rng_seed = Some(rng_seed);
        }
        // A seed source given on the command line replaces the configured one
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.grid.pattern_file = Some(pattern_file.clone());
            self.grid.preset = None;
        }
        if let Some(preset) = cli_overrides.preset {
            self.grid.preset = Some(preset);
            self.grid.pattern_file = None;
        }
        if let Some(fps) = cli_overrides.fps {
            self.playback.fps = fps;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.playback.max_generations = Some(max_generations);
        }
        if cli_overrides.start_paused {
            self.playback.start_paused = true;
        }
        if let Some(style) = cli_overrides.style {
            self.output.style = style;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub side_length: Option<usize>,
    pub seed_probability: Option<f64>,
    pub rng_seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub preset: Option<Preset>,
    pub fps: Option<u32>,
    pub max_generations: Option<u64>,
    pub start_paused: bool,
    pub style: Option<DisplayStyle>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid.side_length, 100);
        assert_eq!(settings.frame_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.grid.side_length = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.seed_probability = 1.2;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.playback.fps = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.pattern_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/settings.yaml");

        let mut settings = Settings::default();
        settings.grid.side_length = 32;
        settings.grid.preset = Some(Preset::Glider);
        settings.playback.start_paused = true;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.grid.side_length, 32);
        assert_eq!(loaded.grid.preset, Some(Preset::Glider));
        assert!(loaded.playback.start_paused);
    }

    #[test]
    fn test_missing_optional_fields_default_to_none() {
        let yaml = "
grid:
  side_length: 10
  seed_probability: 0.1
playback:
  fps: 10
  start_paused: false
output:
  style: coords
  format: json
  output_directory: out
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.grid.rng_seed.is_none());
        assert!(settings.grid.preset.is_none());
        assert!(settings.playback.max_generations.is_none());
        assert_eq!(settings.output.style, DisplayStyle::Coords);
        assert_eq!(settings.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            side_length: Some(20),
            seed_probability: Some(0.5),
            fps: Some(30),
            start_paused: true,
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);

        assert_eq!(settings.grid.side_length, 20);
        assert_eq!(settings.grid.seed_probability, 0.5);
        assert_eq!(settings.playback.fps, 30);
        assert!(settings.playback.start_paused);
        assert!(settings.grid.rng_seed.is_none());
    }

    #[test]
    fn test_cli_preset_replaces_configured_pattern_file() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("dot.txt");
        std::fs::write(&pattern_path, "1\n").unwrap();

        let mut settings = Settings::default();
        settings.grid.side_length = 5;
        settings.grid.pattern_file = Some(pattern_path);

        settings.merge_with_cli(&CliOverrides {
            preset: Some(Preset::Blinker),
            ..Default::default()
        });

        assert!(settings.grid.pattern_file.is_none());
        let grid = crate::initial_grid(&settings).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_cli_pattern_file_replaces_configured_preset() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("dot.txt");
        std::fs::write(&pattern_path, "1\n").unwrap();

        let mut settings = Settings::default();
        settings.grid.side_length = 5;
        settings.grid.preset = Some(Preset::Glider);

        settings.merge_with_cli(&CliOverrides {
            pattern_file: Some(pattern_path.clone()),
            ..Default::default()
        });

        assert!(settings.grid.preset.is_none());
        assert_eq!(settings.grid.pattern_file, Some(pattern_path));
        let grid = crate::initial_grid(&settings).unwrap();
        assert_eq!(grid.living_cells(), vec![(2, 2)]);
    }
}
