use serde_json::{Map, Value};

use crate::calendar::Timestamp;

/// Where a record's submission date came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionDate {
    /// Pre-formatted `M/D/YYYY` text from the `date` field.
    Formatted(String),
    /// Absolute timestamp from the `date_created` field.
    Created(Timestamp),
}

/// The fields of one structured-log line that the report consumes.
///
/// Fallbacks are resolved at decode time: `compiler` wins over
/// `compile_version` and `date` wins over `date_created`, where an empty
/// string counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub errored: bool,
    pub compiler: Option<String>,
    pub name: Option<String>,
    pub date: Option<SubmissionDate>,
}

impl SubmissionRecord {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let compiler = label(object.get("compiler")).or_else(|| label(object.get("compile_version")));
        let name = label(object.get("name"));
        let date = label(object.get("date")).map(SubmissionDate::Formatted).or_else(|| {
            object.get("date_created").filter(|v| is_truthy(v)).and_then(timestamp).map(SubmissionDate::Created)
        });
        Self { errored: object.get("err").is_some_and(is_truthy), compiler, name, date }
    }

    /// True when the record carries none of the aggregated fields.
    pub fn is_blank(&self) -> bool {
        self.compiler.is_none() && self.name.is_none() && self.date.is_none()
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn label(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn timestamp(value: &Value) -> Option<Timestamp> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).map(Timestamp::Millis),
        Value::String(s) => Some(Timestamp::Text(s.clone())),
        _ => None,
    }
}
