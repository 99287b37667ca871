use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::source::EnrollmentSource;

/// Write-once slot holding an installed source.
///
/// Mirrors module-import semantics: the first installation wins, later
/// ones are rejected, and every caller sees the same instance.
struct Registry {
    slot: OnceCell<Box<dyn EnrollmentSource>>,
}

impl Registry {
    const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    fn install(&self, source: Box<dyn EnrollmentSource>) -> Result<()> {
        let name = source.name().to_string();
        if self.slot.set(source).is_err() {
            let current = self.slot.get().map(|s| s.name()).unwrap_or("unknown");
            return Err(Error::AlreadyInstalled(current.to_string()));
        }
        log::debug!("enrollment data source installed: {}", name);
        Ok(())
    }

    fn get(&self) -> Result<&dyn EnrollmentSource> {
        self.slot.get().map(|s| s.as_ref()).ok_or(Error::Unavailable)
    }
}

static REGISTRY: Registry = Registry::new();

/// Install the process-wide enrollment data source.
///
/// The first call wins for the lifetime of the process; later calls fail
/// with [`Error::AlreadyInstalled`].
pub fn install_source(source: Box<dyn EnrollmentSource>) -> Result<()> {
    REGISTRY.install(source)
}

/// The installed source, or [`Error::Unavailable`] when none exists.
pub(crate) fn active() -> Result<&'static dyn EnrollmentSource> {
    REGISTRY.get()
}
