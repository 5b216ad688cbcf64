use cropyield::error::{CropYieldError, Result};
use cropyield::models::SoilColor;
use cropyield::DEFAULT_TOP_N;
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Prefill values for the interactive wizard.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    pub district: Option<String>,
    pub soil_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// Score unknown soil/fertilizer/crop labels with no bonus instead of
    /// rejecting them.
    #[serde(default)]
    pub lenient: bool,
}

impl Config {
    /// Load config from the override path or the standard locations.
    ///
    /// An explicit path must exist. Without one, a missing file yields the
    /// defaults.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropYieldError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {:?}", config_path);

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropYieldError::Config(format!("Failed to read config: {}", e)))?;

        let config_str = Self::substitute_env_vars(&config_str)?;

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| CropYieldError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.recommend.top_n == 0 {
            return Err(CropYieldError::Config(
                "recommend.top_n must be at least 1".into(),
            ));
        }
        if let Some(color) = &self.defaults.soil_color {
            if SoilColor::from_str(color).is_none() {
                return Err(CropYieldError::Config(format!(
                    "defaults.soil_color '{}' is not a known soil color",
                    color
                )));
            }
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropyield").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/cropyield/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropYieldError::Config("Cannot determine config directory".into()))?
            .join("cropyield");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up cropyield.");
        println!();

        let district: String = Input::new()
            .with_prompt("  Default district (blank for none)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CropYieldError::Config(format!("Input error: {}", e)))?;

        let mut colors: Vec<&str> = vec!["(none)"];
        colors.extend(SoilColor::all().iter().map(|c| c.as_str()));
        let color_idx = Select::new()
            .with_prompt("  Default soil color")
            .items(&colors)
            .default(0)
            .interact()
            .map_err(|e| CropYieldError::Config(format!("Input error: {}", e)))?;

        let top_n: usize = Input::new()
            .with_prompt("  Number of alternative crops to show")
            .default(DEFAULT_TOP_N)
            .validate_with(|n: &usize| -> std::result::Result<(), &str> {
                if (1..=8).contains(n) {
                    Ok(())
                } else {
                    Err("choose between 1 and 8")
                }
            })
            .interact_text()
            .map_err(|e| CropYieldError::Config(format!("Input error: {}", e)))?;

        let json = Confirm::new()
            .with_prompt("  Print JSON instead of text?")
            .default(false)
            .interact()
            .map_err(|e| CropYieldError::Config(format!("Input error: {}", e)))?;

        let lenient = Confirm::new()
            .with_prompt("  Accept unknown soil/crop/fertilizer labels (scored with no bonus)?")
            .default(false)
            .interact()
            .map_err(|e| CropYieldError::Config(format!("Input error: {}", e)))?;

        let config = Config {
            recommend: RecommendConfig { top_n },
            output: OutputConfig {
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            },
            defaults: DefaultsConfig {
                district: Some(district).filter(|d| !d.trim().is_empty()),
                soil_color: (color_idx > 0).then(|| colors[color_idx].to_string()),
            },
            input: InputConfig { lenient },
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CropYieldError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# cropyield configuration\n# Generated by `cropyield init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!();
        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropYieldError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
