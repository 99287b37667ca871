//! Rust bindings to the Hawaii public school enrollment data source.
//!
//! This crate computes no enrollment figures itself. The data logic lives
//! in an external layer that implements [`EnrollmentSource`]; the crate
//! exposes the stable entry points callers program against
//! ([`fetch_enr`], [`get_available_years`], [`VERSION`]) and passes
//! records through without interpreting them.

pub mod error;
pub mod models;
pub mod source;

pub use error::{Error, Result};
pub use models::{Dataset, SchoolYear};
pub use source::{install_source, EnrollmentSource};

/// Crate version, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fetch enrollment records for one school year.
///
/// Delegates to the installed [`EnrollmentSource`]. Fails with
/// [`Error::Unavailable`] when no source has been installed; failures
/// reported by the source itself are passed through unchanged.
pub fn fetch_enr(year: SchoolYear) -> Result<Dataset> {
    let source = source::active()?;
    log::debug!("fetch_enr: year={} source={}", year, source.name());
    Ok(source.fetch_enr(year)?)
}

/// List the school years the installed source can serve.
pub fn get_available_years() -> Result<Vec<SchoolYear>> {
    let source = source::active()?;
    log::debug!("get_available_years: source={}", source.name());
    Ok(source.available_years()?)
}
