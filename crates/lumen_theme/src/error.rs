use thiserror::Error;

/// A stored or configured theme mode that is not `light`, `dark` or `system`
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid theme mode {0:?}")]
pub struct ParseThemeModeError(pub String);

/// Failure loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}
