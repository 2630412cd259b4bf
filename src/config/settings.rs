use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    /// Directory scanned for template files
    #[serde(default = "default_templates_dir")]
    pub dir: PathBuf,
    /// Template file extension, matched case-insensitively
    #[serde(default = "default_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Require `type:"filepath"` values to exist on disk
    #[serde(default = "default_strict_filepath")]
    pub strict_filepath: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Fallback filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_strict_filepath() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        Self::load(Path::new("config"))
    }

    /// Layered load: defaults, `<dir>/default`, `<dir>/<RUN_MODE>`, then
    /// `MAILMATE_` environment variables (`MAILMATE_TEMPLATES__DIR`,
    /// `MAILMATE_VALIDATION__STRICT_FILEPATH`, ...)
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("templates.dir", "templates")?
            .set_default("templates.extension", "html")?
            .set_default("validation.strict_filepath", true)?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?
            .add_source(File::from(config_dir.join("default")).required(false))
            .add_source(File::from(config_dir.join(&run_mode)).required(false))
            .add_source(
                Environment::with_prefix("MAILMATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_filepath: default_strict_filepath(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
