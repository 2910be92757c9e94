//! Configuration loading from files.
//!
//! The YAML file is the base layer; `SPYGLASS__`-prefixed environment
//! variables override individual keys (`SPYGLASS__SITE__OUTPUT=public`).

use std::path::Path;

use super::{ConfigError, SpyglassConfig, explain_load_error};

/// Default config file name, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "spyglass.yaml";

impl SpyglassConfig {
    /// Load the config from the command line argument, defaulting to `spyglass.yaml`
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new(CONFIG_FILE_NAME));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file)
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let path_str = path
            .as_os_str()
            .to_str()
            .ok_or_else(|| ConfigError::EncodePath(path.to_path_buf()))?;

        let config = config::Config::builder()
            .add_source(config::File::new(path_str, config::FileFormat::Yaml))
            .add_source(
                config::Environment::with_prefix("SPYGLASS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<SpyglassConfig>()
            .map_err(explain_load_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'site.name' must not be empty".to_string(),
            ));
        }
        if self.sidenav.container.trim().is_empty() {
            return Err(ConfigError::Validation(
                "invalid config: 'sidenav.container' must be a CSS selector".to_string(),
            ));
        }
        if self.sidenav.min_headings == 0 {
            return Err(ConfigError::Validation(
                "invalid config: 'sidenav.min_headings' must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_load_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "site:\n  name: Field Notes\n");

        let config = SpyglassConfig::load_from_file(&path).unwrap();
        assert_eq!(config.site.name, "Field Notes");
        assert_eq!(config.site.output, std::path::PathBuf::from("_site"));
        assert_eq!(config.content.path, std::path::PathBuf::from("posts"));
        assert_eq!(config.sidenav.container, ".post > .row");
        assert_eq!(config.sidenav.min_headings, 3);
        assert_eq!(config.sidenav.scripts.len(), 2);
    }

    #[test]
    fn test_load_sidenav_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
site:
  name: Field Notes
sidenav:
  container: "main > .layout"
  min_headings: 5
  scripts:
    - /js/spy.js
"#,
        );

        let config = SpyglassConfig::load_from_file(&path).unwrap();
        assert_eq!(config.sidenav.container, "main > .layout");
        assert_eq!(config.sidenav.min_headings, 5);
        assert_eq!(config.sidenav.scripts, vec!["/js/spy.js".to_string()]);
    }

    #[test]
    fn test_missing_site_is_explained() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "content:\n  path: notes\n");

        let err = SpyglassConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("'site' is required"));
    }

    #[test]
    fn test_missing_site_name_is_explained() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "site:\n  output: public\n");

        let err = SpyglassConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("'site.name'"), "{err}");
    }

    #[test]
    fn test_zero_min_headings_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "site:\n  name: Notes\nsidenav:\n  min_headings: 0\n",
        );

        let err = SpyglassConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
