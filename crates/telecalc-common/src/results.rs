//! Labelled calculation results.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single computed metric.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
    Text(String),
    /// No data to compute from. Serialized as `null`, which is distinct
    /// from a computed zero.
    Absent,
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Int(v) => Some(*v as f64),
            MetricValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MetricValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetricValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MetricValue::Absent)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{v}"),
            MetricValue::Float(v) => write!(f, "{v}"),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Absent => f.write_str("not available"),
        }
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetricValue::Int(v) => serializer.serialize_i64(*v),
            MetricValue::Float(v) => serializer.serialize_f64(*v),
            MetricValue::Text(s) => serializer.serialize_str(s),
            MetricValue::Absent => serializer.serialize_none(),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(v: i64) -> Self {
        MetricValue::Int(v)
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Float(v)
    }
}

impl From<String> for MetricValue {
    fn from(v: String) -> Self {
        MetricValue::Text(v)
    }
}

impl From<&str> for MetricValue {
    fn from(v: &str) -> Self {
        MetricValue::Text(v.to_string())
    }
}

impl<T: Into<MetricValue>> From<Option<T>> for MetricValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(MetricValue::Absent, Into::into)
    }
}

// ── ResultSet ───────────────────────────────────────────────────────

/// Ordered mapping from a human-readable label to a metric.
///
/// Built once per request and read-only afterwards. Serializes as a JSON
/// object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(String, MetricValue)>,
}

impl ResultSet {
    pub fn get(&self, label: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, V: Into<MetricValue>> FromIterator<(L, V)> for ResultSet {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        }
    }
}

/// One `label: value` per line.
impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in &self.entries {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultSet {
        [
            ("Zeta", MetricValue::Int(3)),
            ("Alpha", MetricValue::Float(1.5)),
            ("Move", MetricValue::from("2,1")),
            ("Missing", MetricValue::Absent),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn serializes_in_insertion_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"Zeta":3,"Alpha":1.5,"Move":"2,1","Missing":null}"#
        );
    }

    #[test]
    fn lookup_by_label() {
        let set = sample();
        assert_eq!(set.len(), 4);
        assert_eq!(set.get("Zeta").and_then(MetricValue::as_i64), Some(3));
        assert_eq!(set.get("Move").and_then(MetricValue::as_str), Some("2,1"));
        assert!(set.get("Missing").unwrap().is_absent());
        assert!(set.get("Nope").is_none());
    }

    #[test]
    fn display_is_one_line_per_metric() {
        let text = sample().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("Zeta: 3\n"));
        assert!(text.contains("Missing: not available"));
    }

    #[test]
    fn option_maps_to_absent() {
        assert_eq!(MetricValue::from(None::<f64>), MetricValue::Absent);
        assert_eq!(MetricValue::from(Some(2.0)), MetricValue::Float(2.0));
    }
}
