use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Enrollment records for one school year, as returned by the source.
///
/// Records are kept as raw JSON objects. Column names and types belong to
/// the data source; the bindings pass them through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Value>,
}

impl Dataset {
    /// Wrap a list of records produced by a source.
    pub fn new(records: Vec<Value>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in source order.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Consume the dataset, yielding the records.
    pub fn into_records(self) -> Vec<Value> {
        self.records
    }
}

impl From<Vec<Value>> for Dataset {
    fn from(records: Vec<Value>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_by_default() {
        let data = Dataset::default();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
    }

    #[test]
    fn test_records_kept_in_order() {
        let data = Dataset::new(vec![
            json!({"school": "Hilo High", "enrollment": 1100}),
            json!({"school": "Waiakea High", "enrollment": 1200}),
        ]);

        assert_eq!(data.len(), 2);
        assert_eq!(data.records()[0]["school"], "Hilo High");
        assert_eq!(data.records()[1]["enrollment"], 1200);

        let records = data.into_records();
        assert_eq!(records.len(), 2);
    }
}
