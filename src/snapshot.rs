//! Table snapshots: the rows-plus-headers sample the surrounding application
//! (query layer, API client) hands to the width engine.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One table's worth of sampled data: ordered column headers plus ordered
/// rows of heterogeneous cells. Rows may be ragged. The snapshot is
/// read-only input to measurement; pass a bounded sample, not a full result
/// set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TableSnapshot {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { headers, rows }
    }

    /// Parse a `{"headers": [...], "rows": [[...], ...]}` payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Build a snapshot from an already-parsed payload, validating its shape
    /// so malformed responses fail here with a located message instead of
    /// skewing measurement.
    pub fn from_value(payload: Value) -> Result<Self> {
        let mut payload = match payload {
            Value::Object(map) => map,
            other => {
                return Err(eyre!(
                    "snapshot payload is not an object (got {})",
                    json_type_name(&other)
                ))
            }
        };

        let headers = match payload.remove("headers") {
            Some(Value::Array(names)) => names
                .into_iter()
                .enumerate()
                .map(|(index, name)| match name {
                    Value::String(name) => Ok(name),
                    other => Err(eyre!(
                        "headers[{}] is not a string (got {})",
                        index,
                        json_type_name(&other)
                    )),
                })
                .collect::<Result<Vec<String>>>()?,
            Some(other) => {
                return Err(eyre!(
                    "\"headers\" is not an array (got {})",
                    json_type_name(&other)
                ))
            }
            None => return Err(eyre!("payload has no \"headers\" field")),
        };

        let rows = match payload.remove("rows") {
            Some(Value::Array(rows)) => rows
                .into_iter()
                .enumerate()
                .map(|(index, row)| match row {
                    Value::Array(cells) => Ok(cells),
                    other => Err(eyre!(
                        "rows[{}] is not an array (got {})",
                        index,
                        json_type_name(&other)
                    )),
                })
                .collect::<Result<Vec<Vec<Value>>>>()?,
            Some(other) => {
                return Err(eyre!(
                    "\"rows\" is not an array (got {})",
                    json_type_name(&other)
                ))
            }
            None => return Err(eyre!("payload has no \"rows\" field")),
        };

        Ok(Self { headers, rows })
    }

    /// Number of sampled rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns: the widest row or the header row, whichever is
    /// longer.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .fold(self.headers.len(), usize::max)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Measurement-bounded copy: at most `max_rows` rows, same headers. Use
    /// when holding a full result set; widths only need a sample.
    pub fn sample(&self, max_rows: usize) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(max_rows).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_parses_payload() {
        let snapshot = TableSnapshot::from_json(
            r#"{"headers": ["name", "qty"], "rows": [["ab", 1], ["abcdef", 22]]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.headers, vec!["name", "qty"]);
        assert_eq!(snapshot.row_count(), 2);
        assert_eq!(snapshot.rows[1][0], json!("abcdef"));
    }

    #[test]
    fn test_from_json_accepts_ragged_rows() {
        let snapshot =
            TableSnapshot::from_json(r#"{"headers": ["a"], "rows": [[1], [1, 2, 3]]}"#).unwrap();

        assert_eq!(snapshot.column_count(), 3);
    }

    #[test]
    fn test_from_value_rejects_non_object_payload() {
        let err = TableSnapshot::from_value(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn test_from_value_requires_headers_and_rows() {
        let err = TableSnapshot::from_value(json!({"rows": []})).unwrap_err();
        assert!(err.to_string().contains("headers"));

        let err = TableSnapshot::from_value(json!({"headers": []})).unwrap_err();
        assert!(err.to_string().contains("rows"));
    }

    #[test]
    fn test_from_value_locates_bad_row() {
        let payload = json!({"headers": ["a"], "rows": [[1], "oops"]});
        let err = TableSnapshot::from_value(payload).unwrap_err();
        assert!(err.to_string().contains("rows[1]"));
        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn test_from_value_locates_bad_header() {
        let payload = json!({"headers": ["a", 5], "rows": []});
        let err = TableSnapshot::from_value(payload).unwrap_err();
        assert!(err.to_string().contains("headers[1]"));
    }

    #[test]
    fn test_sample_bounds_rows() {
        let snapshot = TableSnapshot::new(
            vec!["a".to_string()],
            (0..10).map(|i| vec![json!(i)]).collect(),
        );

        let sample = snapshot.sample(3);
        assert_eq!(sample.row_count(), 3);
        assert_eq!(sample.headers, snapshot.headers);

        // Sampling beyond the row count is the identity.
        assert_eq!(snapshot.sample(100), snapshot);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = TableSnapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.column_count(), 0);
    }
}
