use thiserror::Error;

/// Failure reported by a [`PreferenceStore`](crate::PreferenceStore)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("preference store backend error: {0}")]
    Backend(String),
}
