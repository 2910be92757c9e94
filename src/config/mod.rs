//! Configuration loading and types for spyglass.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

pub use load::CONFIG_FILE_NAME;
pub(crate) use types::resolve_against;
pub use types::{
    ContentConfig, MarkdownConfig, SidenavConfig, SiteConfig, SiteTheme, SpyglassConfig,
};

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to encode config file path as a unicode string: {0}")]
    EncodePath(std::path::PathBuf),

    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("{0}")]
    Validation(String),
}

/// Turn a deserialization failure into a message that points at the fix.
pub(crate) fn explain_load_error(e: config::ConfigError) -> ConfigError {
    match missing_field(&e).as_deref() {
        Some("site") => ConfigError::Validation(
            "invalid config: 'site' is required\n\nExample:\n  site:\n    name: My Site"
                .to_string(),
        ),
        Some("name" | "site.name") => ConfigError::Validation(
            "invalid config: missing required 'site.name' field".to_string(),
        ),
        _ => ConfigError::Load(e),
    }
}

/// The field a load error says is missing, if that is what it is about.
///
/// The config crate reports these as `NotFound`, which displays as
/// `missing configuration field "site"`; a serde `Message` keeps serde's own
/// wording.
fn missing_field(e: &config::ConfigError) -> Option<String> {
    match e {
        config::ConfigError::NotFound(field) => Some(field.clone()),
        config::ConfigError::Message(msg) => msg
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
            .map(str::to_string),
        other => {
            let msg = other.to_string();
            let rest = msg.split("missing configuration field \"").nth(1)?;
            rest.split('"').next().map(str::to_string)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_site_is_explained() {
        let err = explain_load_error(config::ConfigError::NotFound("site".to_string()));

        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("'site' is required")));
    }

    #[test]
    fn test_serde_missing_name_is_explained() {
        let err = explain_load_error(config::ConfigError::Message(
            "missing field `name`".to_string(),
        ));

        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("'site.name'")));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = explain_load_error(config::ConfigError::Message("boom".to_string()));

        assert!(matches!(err, ConfigError::Load(_)));
    }
}
