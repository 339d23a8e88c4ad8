//! Query parameter descriptors
//!
//! Flattens a [`FilterSet`] into one [`FieldDescriptor`] per accepted query
//! parameter: the bare filter name for its default lookup, then
//! `name<sep>lookup` for every additional lookup, with nested sets
//! contributing their own name as a prefix.

use std::iter::FusedIterator;
use std::slice;

use serde::Serialize;

use super::lookups;
use super::tree::{FilterNode, FilterSet, LeafFilter};
use super::types::SchemaType;

/// Separator between path segments of a query parameter name
pub const DEFAULT_SEPARATOR: &str = "__";

/// Where a parameter is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    #[default]
    Query,
}

/// One documented query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub required: bool,
    pub location: Location,
    pub schema: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDescriptor {
    fn for_lookup(name: String, filter: &LeafFilter, lookup: &str) -> Self {
        Self {
            name,
            required: false,
            location: Location::Query,
            schema: SchemaType::resolve(&filter.form_field(lookup)),
            description: lookups::describe(lookup).map(str::to_string),
        }
    }
}

/// Lazy depth-first walk over a filter tree.
///
/// A clone continues from the same position. Call [`schema_fields`] again
/// to start over.
#[derive(Debug, Clone)]
pub struct SchemaFields<'a> {
    separator: &'a str,
    prefix: Vec<&'a str>,
    stack: Vec<slice::Iter<'a, (String, FilterNode)>>,
    pending: Option<PendingLookups<'a>>,
}

/// Additional lookups of the leaf emitted last
#[derive(Debug, Clone)]
struct PendingLookups<'a> {
    path: String,
    filter: &'a LeafFilter,
    lookups: slice::Iter<'a, String>,
}

/// Walk `set` and yield its query parameter descriptors in declaration order
pub fn schema_fields<'a>(set: &'a FilterSet, separator: &'a str) -> SchemaFields<'a> {
    SchemaFields {
        separator,
        prefix: Vec::new(),
        stack: vec![set.entries().iter()],
        pending: None,
    }
}

/// Eager form of [`schema_fields`]
pub fn collect_schema_fields(set: &FilterSet, separator: &str) -> Vec<FieldDescriptor> {
    schema_fields(set, separator).collect()
}

impl SchemaFields<'_> {
    fn path_to(&self, name: &str) -> String {
        let mut path = String::new();
        for segment in &self.prefix {
            path.push_str(segment);
            path.push_str(self.separator);
        }
        path.push_str(name);
        path
    }
}

impl Iterator for SchemaFields<'_> {
    type Item = FieldDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.as_mut() {
            if let Some(lookup) = pending.lookups.next() {
                let name = format!("{}{}{}", pending.path, self.separator, lookup);
                return Some(FieldDescriptor::for_lookup(name, pending.filter, lookup));
            }
            self.pending = None;
        }

        loop {
            let (name, node) = match self.stack.last_mut()?.next() {
                Some((name, node)) => (name, node),
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                    continue;
                }
            };

            match node {
                FilterNode::Composite(children) => {
                    self.prefix.push(name);
                    self.stack.push(children.entries().iter());
                }
                FilterNode::Leaf(filter) => {
                    let path = self.path_to(name);
                    let field =
                        FieldDescriptor::for_lookup(path.clone(), filter, &filter.default_lookup);
                    if !filter.no_lookup && !filter.lookups.is_empty() {
                        self.pending = Some(PendingLookups {
                            path,
                            filter,
                            lookups: filter.lookups.iter(),
                        });
                    }
                    return Some(field);
                }
            }
        }
    }
}

impl FusedIterator for SchemaFields<'_> {}
