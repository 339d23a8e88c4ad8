//! Filter declaration and registry errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter name cannot be empty")]
    EmptyName,

    #[error("Duplicate filter name: {0}")]
    DuplicateName(String),

    #[error("Filter name `{name}` contains the separator `{separator}`")]
    NameContainsSeparator { name: String, separator: String },

    #[error("Filter `{filter}` declares an empty lookup")]
    EmptyLookup { filter: String },

    #[error("Lookup `{lookup}` of filter `{filter}` contains the separator `{separator}`")]
    LookupContainsSeparator {
        filter: String,
        lookup: String,
        separator: String,
    },

    #[error("Filter `{filter}` declares lookup `{lookup}` more than once")]
    DuplicateLookup { filter: String, lookup: String },

    #[error("Filter group cannot declare leaf options: {0}")]
    MixedDeclaration(String),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read filter definitions {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse filter definitions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Endpoint `{0}` is declared more than once")]
    DuplicateEndpoint(String),

    #[error("Invalid filters for endpoint `{endpoint}`: {source}")]
    Invalid {
        endpoint: String,
        #[source]
        source: FilterError,
    },

    #[error("Separator cannot be empty")]
    EmptySeparator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let err = FilterError::DuplicateName("status".to_string());
        assert_eq!(err.to_string(), "Duplicate filter name: status");
    }

    #[test]
    fn test_duplicate_lookup_display() {
        let err = FilterError::DuplicateLookup {
            filter: "status".to_string(),
            lookup: "in".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Filter `status` declares lookup `in` more than once"
        );
    }

    #[test]
    fn test_separator_display() {
        let err = FilterError::LookupContainsSeparator {
            filter: "created".to_string(),
            lookup: "date__gte".to_string(),
            separator: "__".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Lookup `date__gte` of filter `created` contains the separator `__`"
        );
    }

    #[test]
    fn test_registry_invalid_display() {
        let err = RegistryError::Invalid {
            endpoint: "/books".to_string(),
            source: FilterError::EmptyName,
        };
        assert_eq!(
            err.to_string(),
            "Invalid filters for endpoint `/books`: Filter name cannot be empty"
        );
    }

    #[test]
    fn test_registry_io_display() {
        let err = RegistryError::Io {
            path: PathBuf::from("/tmp/filters.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read filter definitions /tmp/filters.json: missing"
        );
    }
}
