//! Query filter documentation
//!
//! Describes every query parameter a filter tree accepts, including one
//! parameter per supported lookup, as a flat list of typed descriptors.
//!
//! ## Usage
//!
//! ```
//! use filterdoc::domain::filters::{FilterSet, LeafFilter, ValueKind, collect_schema_fields};
//!
//! let author = FilterSet::new()
//!     .with("created_at", LeafFilter::new(ValueKind::DateTime).lookups(["gte"]))
//!     .unwrap();
//! let filters = FilterSet::new().with("author", author).unwrap();
//!
//! let fields = collect_schema_fields(&filters, "__");
//! assert_eq!(fields[1].name, "author__created_at__gte");
//! ```

mod error;
pub mod lookups;
mod registry;
mod schema;
mod tree;
mod types;

pub use error::{FilterError, RegistryError};
pub use registry::{FilterRegistry, endpoint_path};
pub use schema::{
    DEFAULT_SEPARATOR, FieldDescriptor, Location, SchemaFields, collect_schema_fields,
    schema_fields,
};
pub use tree::{FilterNode, FilterSet, LeafFilter};
pub use types::{FormField, SchemaType, ValueKind};
