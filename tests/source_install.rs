//! End-to-end delegation through an installed source.

use std::sync::Once;

use serde_json::json;

use hischooldata::{install_source, Dataset, EnrollmentSource, Error, SchoolYear};

/// Serves two fixed years with one record each.
struct StubSource;

impl EnrollmentSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    fn available_years(&self) -> anyhow::Result<Vec<SchoolYear>> {
        Ok(vec![SchoolYear::new(2023), SchoolYear::new(2024)])
    }

    fn fetch_enr(&self, year: SchoolYear) -> anyhow::Result<Dataset> {
        if (2023..=2024).contains(&year.end_year()) {
            Ok(Dataset::new(vec![json!({
                "school": "Example Elementary",
                "year": year.label(),
                "enrollment": 412,
            })]))
        } else {
            anyhow::bail!("no enrollment data for {}", year)
        }
    }
}

fn install_stub() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| install_source(Box::new(StubSource)).unwrap());
}

#[test]
fn years_come_from_installed_source() {
    install_stub();

    let years = hischooldata::get_available_years().unwrap();
    assert_eq!(years, vec![SchoolYear::new(2023), SchoolYear::new(2024)]);

    // Repeated calls observe the same installed instance.
    assert_eq!(hischooldata::get_available_years().unwrap(), years);
}

#[test]
fn records_pass_through_untouched() {
    install_stub();

    let data = hischooldata::fetch_enr(SchoolYear::new(2024)).unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data.records()[0]["school"], "Example Elementary");
    assert_eq!(data.records()[0]["year"], "2023-24");
    assert_eq!(data.records()[0]["enrollment"], 412);
}

#[test]
fn source_failures_surface_directly() {
    install_stub();

    let err = hischooldata::fetch_enr(SchoolYear::new(1999)).unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert!(err.to_string().contains("1998-99"));
}

#[test]
fn second_install_is_rejected() {
    install_stub();

    let err = install_source(Box::new(StubSource)).unwrap_err();
    assert!(matches!(err, Error::AlreadyInstalled(name) if name == "stub"));
}
