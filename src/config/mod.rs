mod settings;

pub use settings::{LogConfig, Settings, TemplatesConfig, ValidationConfig};
