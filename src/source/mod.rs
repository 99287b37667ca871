mod registry;

pub use registry::install_source;
pub(crate) use registry::active;

use anyhow::Result;

use crate::models::{Dataset, SchoolYear};

/// Contract for the external layer that owns the actual data logic.
///
/// Implementations bridge to wherever the enrollment figures live. The
/// bindings never interpret the records a source returns, so a source is
/// free to use whatever columns its upstream publishes.
pub trait EnrollmentSource: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &str;

    /// Every school year the source can serve, oldest first.
    fn available_years(&self) -> Result<Vec<SchoolYear>>;

    /// Enrollment records for one school year.
    fn fetch_enr(&self, year: SchoolYear) -> Result<Dataset>;
}
