//! JSON utility functions

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};

/// Deserialize a JSON object into `(key, value)` pairs in document order.
///
/// Duplicate keys are rejected.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use filterdoc::utils::json::deserialize_ordered_entries;
///
/// #[derive(Deserialize)]
/// struct Doc {
///     #[serde(deserialize_with = "deserialize_ordered_entries")]
///     entries: Vec<(String, u32)>,
/// }
///
/// let doc: Doc = serde_json::from_str(r#"{"entries": {"b": 1, "a": 2}}"#).unwrap();
/// assert_eq!(doc.entries[0].0, "b");
/// ```
pub fn deserialize_ordered_entries<'de, D, V>(
    deserializer: D,
) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(OrderedEntriesVisitor(PhantomData))
}

struct OrderedEntriesVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for OrderedEntriesVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with unique keys")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate key `{}`", key)));
            }
            let value = map.next_value()?;
            entries.push((key, value));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(deserialize_with = "deserialize_ordered_entries")]
        entries: Vec<(String, i64)>,
    }

    #[test]
    fn test_keeps_document_order() {
        let doc: Doc = serde_json::from_str(r#"{"entries": {"z": 1, "a": 2, "m": 3}}"#).unwrap();
        let keys: Vec<&str> = doc.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_empty_object() {
        let doc: Doc = serde_json::from_str(r#"{"entries": {}}"#).unwrap();
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let err = serde_json::from_str::<Doc>(r#"{"entries": {"a": 1, "a": 2}}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate key `a`"));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<Doc>(r#"{"entries": [1, 2]}"#).is_err());
    }
}
