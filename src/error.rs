use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the binding layer.
///
/// The bindings add no retry or recovery; a failure inside the data
/// source itself travels through [`Error::Source`] unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// No enrollment data source is installed in this process.
    #[error("no enrollment data source is installed; call `install_source` first")]
    Unavailable,

    /// A source is already installed; the first installation wins.
    #[error("an enrollment data source is already installed: {0}")]
    AlreadyInstalled(String),

    /// The installed source failed while serving a request.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}
