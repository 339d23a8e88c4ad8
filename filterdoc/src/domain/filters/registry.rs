//! Endpoint filter registry
//!
//! Maps endpoint names to the filter set they accept. Endpoints without a
//! declared filter set simply document no query parameters.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::json::deserialize_ordered_entries;

use super::error::RegistryError;
use super::schema::{FieldDescriptor, collect_schema_fields};
use super::tree::FilterSet;

/// Filter sets per endpoint, in declaration order
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    separator: String,
    endpoints: Vec<(String, FilterSet)>,
}

/// JSON shape of a filter definitions file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefinitionsFile {
    #[serde(default, deserialize_with = "deserialize_ordered_entries")]
    endpoints: Vec<(String, FilterSet)>,
}

/// URL path of an endpoint. Paths always start with a slash, so `books`
/// and `/books` name the same endpoint.
pub fn endpoint_path(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

impl FilterRegistry {
    /// Empty registry composing names with `separator`
    pub fn new(separator: impl Into<String>) -> Result<Self, RegistryError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(RegistryError::EmptySeparator);
        }
        Ok(Self {
            separator,
            endpoints: Vec::new(),
        })
    }

    /// Load filter definitions from a JSON file
    pub fn load(path: &Path, separator: &str) -> Result<Self, RegistryError> {
        tracing::debug!(path = %path.display(), "Loading filter definitions");
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content, separator)
    }

    /// Parse filter definitions from a JSON document
    pub fn from_json(json: &str, separator: &str) -> Result<Self, RegistryError> {
        let file: DefinitionsFile = serde_json::from_str(json)?;
        let mut registry = Self::new(separator)?;
        for (endpoint, set) in file.endpoints {
            registry.register(endpoint, set)?;
        }
        tracing::debug!(
            endpoints = registry.len(),
            separator = %registry.separator,
            "Filter definitions loaded"
        );
        Ok(registry)
    }

    /// Add the filter set of an endpoint
    pub fn register(
        &mut self,
        endpoint: impl Into<String>,
        set: FilterSet,
    ) -> Result<(), RegistryError> {
        let endpoint = endpoint.into();
        let path = endpoint_path(&endpoint);
        if self
            .endpoints
            .iter()
            .any(|(name, _)| endpoint_path(name) == path)
        {
            return Err(RegistryError::DuplicateEndpoint(endpoint));
        }
        if let Err(source) = set.validate(&self.separator) {
            return Err(RegistryError::Invalid { endpoint, source });
        }
        tracing::trace!(endpoint = %endpoint, filters = set.len(), "Registered filter set");
        self.endpoints.push((endpoint, set));
        Ok(())
    }

    pub fn get(&self, endpoint: &str) -> Option<&FilterSet> {
        self.endpoints
            .iter()
            .find(|(name, _)| name == endpoint)
            .map(|(_, set)| set)
    }

    pub fn endpoints(&self) -> impl Iterator<Item = (&str, &FilterSet)> {
        self.endpoints.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Query parameters accepted by `endpoint`.
    ///
    /// Returns an empty list when the endpoint has no filter set.
    pub fn schema_fields_for(&self, endpoint: &str) -> Vec<FieldDescriptor> {
        match self.get(endpoint) {
            Some(set) => {
                let fields = collect_schema_fields(set, &self.separator);
                tracing::debug!(endpoint, fields = fields.len(), "Generated schema fields");
                fields
            }
            None => {
                tracing::debug!(endpoint, "No filters declared for endpoint");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::filters::error::FilterError;
    use crate::domain::filters::tree::LeafFilter;
    use crate::domain::filters::types::{SchemaType, ValueKind};

    const DEFINITIONS: &str = r#"{
        "endpoints": {
            "/books": {
                "title": {"lookups": ["icontains"]},
                "author": {
                    "filters": {
                        "created_at": {"type": "datetime", "lookups": ["gte", "lte"]}
                    }
                }
            },
            "/authors": {
                "active": {"type": "boolean", "lookups": ["in"]}
            }
        }
    }"#;

    #[test]
    fn test_from_json_keeps_endpoint_order() {
        let registry = FilterRegistry::from_json(DEFINITIONS, "__").unwrap();
        let endpoints: Vec<&str> = registry.endpoints().map(|(name, _)| name).collect();
        assert_eq!(endpoints, vec!["/books", "/authors"]);
        assert_eq!(registry.separator(), "__");
    }

    #[test]
    fn test_schema_fields_for_endpoint() {
        let registry = FilterRegistry::from_json(DEFINITIONS, "__").unwrap();
        let fields = registry.schema_fields_for("/books");
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "title",
                "title__icontains",
                "author__created_at",
                "author__created_at__gte",
                "author__created_at__lte",
            ]
        );

        let fields = registry.schema_fields_for("/authors");
        assert_eq!(fields[0].schema, SchemaType::Boolean);
        assert_eq!(fields[1].schema, SchemaType::Array);
    }

    #[test]
    fn test_unknown_endpoint_has_no_fields() {
        let registry = FilterRegistry::from_json(DEFINITIONS, "__").unwrap();
        assert!(registry.schema_fields_for("/publishers").is_empty());
    }

    #[test]
    fn test_missing_endpoints_key_is_empty_registry() {
        let registry = FilterRegistry::from_json("{}", "__").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_names_containing_separator() {
        let json = r#"{"endpoints": {"/books": {"created__at": {}}}}"#;
        let err = FilterRegistry::from_json(json, "__").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Invalid {
                ref endpoint,
                source: FilterError::NameContainsSeparator { .. },
            } if endpoint == "/books"
        ));

        // Fine once the separator no longer collides
        assert!(FilterRegistry::from_json(json, ".").is_ok());
    }

    #[test]
    fn test_rejects_duplicate_endpoints() {
        let json = r#"{"endpoints": {"/books": {}, "/books": {}}}"#;
        assert!(matches!(
            FilterRegistry::from_json(json, "__"),
            Err(RegistryError::Parse(_))
        ));

        let mut registry = FilterRegistry::new("__").unwrap();
        registry.register("/books", FilterSet::new()).unwrap();
        assert!(matches!(
            registry.register("/books", FilterSet::new()),
            Err(RegistryError::DuplicateEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_endpoints_sharing_a_path() {
        let json = r#"{"endpoints": {"/books": {"a": {}}, "books": {"b": {}}}}"#;
        let err = FilterRegistry::from_json(json, "__").unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateEndpoint(ref name) if name == "books"));

        let mut registry = FilterRegistry::new("__").unwrap();
        registry.register("authors", FilterSet::new()).unwrap();
        assert!(matches!(
            registry.register("/authors", FilterSet::new()),
            Err(RegistryError::DuplicateEndpoint(_))
        ));
        assert!(registry.register("/authors/", FilterSet::new()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_lookups() {
        let json = r#"{"endpoints": {"/books": {"status": {"lookups": ["in", "in"]}}}}"#;
        let err = FilterRegistry::from_json(json, "__").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Invalid {
                source: FilterError::DuplicateLookup { ref filter, ref lookup },
                ..
            } if filter == "status" && lookup == "in"
        ));
    }

    #[test]
    fn test_endpoint_path() {
        assert_eq!(endpoint_path("/books"), "/books");
        assert_eq!(endpoint_path("books"), "/books");
    }

    #[test]
    fn test_rejects_empty_separator() {
        assert!(matches!(
            FilterRegistry::new(""),
            Err(RegistryError::EmptySeparator)
        ));
    }

    #[test]
    fn test_rejects_unknown_top_level_keys() {
        let json = r#"{"endpoint": {}}"#;
        assert!(matches!(
            FilterRegistry::from_json(json, "__"),
            Err(RegistryError::Parse(_))
        ));
    }

    #[test]
    fn test_register_programmatic_set() {
        let set = FilterSet::new()
            .with(
                "status",
                LeafFilter::new(ValueKind::Char).lookups(["in", "isnull"]),
            )
            .unwrap();
        let mut registry = FilterRegistry::new(".").unwrap();
        registry.register("/orders", set).unwrap();

        let names: Vec<String> = registry
            .schema_fields_for("/orders")
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["status", "status.in", "status.isnull"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFINITIONS.as_bytes()).unwrap();

        let registry = FilterRegistry::load(file.path(), "__").unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FilterRegistry::load(&dir.path().join("missing.json"), "__").unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
