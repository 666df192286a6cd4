use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;

/// Run configuration, threaded explicitly through each phase.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Files or directories to compare.
    #[serde(default)]
    pub paths: Vec<String>,
    /// Walk directory arguments recursively (one level deep when false).
    #[serde(default = "default_true")]
    pub recursive: bool,
    /// Strip spaces and newlines before computing distances.
    #[serde(default = "default_true")]
    pub strip_whitespace: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            recursive: true,
            strip_whitespace: true,
        }
    }
}

/// Load optional file-based defaults (`Textdupe.toml` in the working
/// directory). The file may set any subset of the fields; CLI flags
/// override whatever is loaded here.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    load_from("Textdupe")
}

fn load_from(name: &str) -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let config = AppConfig::default();
        assert!(config.recursive);
        assert!(config.strip_whitespace);
        assert!(config.paths.is_empty());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_configuration().unwrap();
        assert!(config.paths.is_empty());
    }

    #[test]
    fn test_flag_only_config_file_is_honored() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("Textdupe.toml");
        std::fs::write(&file, "recursive = false\nstrip_whitespace = false\n").unwrap();

        let name = tmp.path().join("Textdupe");
        let config = load_from(name.to_str().unwrap()).unwrap();
        assert!(!config.recursive);
        assert!(!config.strip_whitespace);
        assert!(config.paths.is_empty());
    }

    #[test]
    fn test_config_file_paths_are_loaded() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("Textdupe.toml");
        std::fs::write(&file, "paths = [\"a.txt\", \"b.txt\"]\n").unwrap();

        let name = tmp.path().join("Textdupe");
        let config = load_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.paths, vec!["a.txt".to_string(), "b.txt".to_string()]);
        assert!(config.recursive);
        assert!(config.strip_whitespace);
    }
}
