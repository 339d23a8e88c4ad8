//! Filter tree declarations
//!
//! A [`FilterSet`] is an ordered, name-unique collection of filters. Each
//! entry is either a [`LeafFilter`] or a nested set, which expresses access
//! to related fields (`author__name`). Children are owned, so a tree is
//! always finite and acyclic.

use serde::{Deserialize, Deserializer};

use crate::utils::json::deserialize_ordered_entries;

use super::error::FilterError;
use super::lookups::{self, DEFAULT_LOOKUP, NULL_LOOKUP};
use super::types::{FormField, ValueKind};

/// Ordered collection of named filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    entries: Vec<(String, FilterNode)>,
}

/// One entry of a filter set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NodeDecl")]
pub enum FilterNode {
    Leaf(LeafFilter),
    Composite(FilterSet),
}

/// A single queryable attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafFilter {
    pub value: ValueKind,
    pub default_lookup: String,
    pub lookups: Vec<String>,
    pub no_lookup: bool,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from entries, rejecting empty and duplicate names
    pub fn from_entries<I>(entries: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (String, FilterNode)>,
    {
        let mut set = Self::new();
        for (name, node) in entries {
            set.insert(name, node)?;
        }
        Ok(set)
    }

    /// Append a filter at the end of the set
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: impl Into<FilterNode>,
    ) -> Result<(), FilterError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FilterError::EmptyName);
        }
        if self.get(&name).is_some() {
            return Err(FilterError::DuplicateName(name));
        }
        self.entries.push((name, node.into()));
        Ok(())
    }

    /// Builder-style [`FilterSet::insert`]
    pub fn with(
        mut self,
        name: impl Into<String>,
        node: impl Into<FilterNode>,
    ) -> Result<Self, FilterError> {
        self.insert(name, node)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&FilterNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FilterNode)> + Clone {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub(crate) fn entries(&self) -> &[(String, FilterNode)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every name and lookup in the tree can be joined with
    /// `separator` and split back unambiguously.
    pub fn validate(&self, separator: &str) -> Result<(), FilterError> {
        for (name, node) in &self.entries {
            if !separator.is_empty() && name.contains(separator) {
                return Err(FilterError::NameContainsSeparator {
                    name: name.clone(),
                    separator: separator.to_string(),
                });
            }
            match node {
                FilterNode::Composite(children) => children.validate(separator)?,
                FilterNode::Leaf(leaf) => leaf.validate(name, separator)?,
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for FilterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<(String, FilterNode)> = deserialize_ordered_entries(deserializer)?;
        Self::from_entries(entries).map_err(serde::de::Error::custom)
    }
}

impl LeafFilter {
    /// A filter on values of `value` kind, matched with `exact` by default
    pub fn new(value: ValueKind) -> Self {
        Self {
            value,
            default_lookup: DEFAULT_LOOKUP.to_string(),
            lookups: Vec::new(),
            no_lookup: false,
        }
    }

    pub fn default_lookup(mut self, lookup: impl Into<String>) -> Self {
        self.default_lookup = lookup.into();
        self
    }

    pub fn lookups<I, S>(mut self, lookups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lookups = lookups.into_iter().map(Into::into).collect();
        self
    }

    pub fn no_lookup(mut self, no_lookup: bool) -> Self {
        self.no_lookup = no_lookup;
        self
    }

    /// Value representation this filter expects for `lookup`
    pub fn form_field(&self, lookup: &str) -> FormField {
        if lookup == NULL_LOOKUP {
            FormField::Single(ValueKind::Boolean)
        } else if lookups::is_date_part(lookup) {
            FormField::Single(ValueKind::Integer)
        } else if lookups::is_multi_value(lookup) {
            FormField::Multiple(self.value)
        } else {
            FormField::Single(self.value)
        }
    }

    fn validate(&self, name: &str, separator: &str) -> Result<(), FilterError> {
        let declared = std::iter::once(&self.default_lookup).chain(&self.lookups);
        for lookup in declared {
            if lookup.is_empty() {
                return Err(FilterError::EmptyLookup {
                    filter: name.to_string(),
                });
            }
            if !separator.is_empty() && lookup.contains(separator) {
                return Err(FilterError::LookupContainsSeparator {
                    filter: name.to_string(),
                    lookup: lookup.clone(),
                    separator: separator.to_string(),
                });
            }
        }
        for (i, lookup) in self.lookups.iter().enumerate() {
            if self.lookups[..i].contains(lookup) {
                return Err(FilterError::DuplicateLookup {
                    filter: name.to_string(),
                    lookup: lookup.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<LeafFilter> for FilterNode {
    fn from(leaf: LeafFilter) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<FilterSet> for FilterNode {
    fn from(set: FilterSet) -> Self {
        Self::Composite(set)
    }
}

/// JSON shape of a filter node. A `filters` key marks a nested set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeDecl {
    filters: Option<FilterSet>,
    #[serde(rename = "type")]
    value: Option<ValueKind>,
    default_lookup: Option<String>,
    lookups: Option<Vec<String>>,
    no_lookup: Option<bool>,
}

impl TryFrom<NodeDecl> for FilterNode {
    type Error = FilterError;

    fn try_from(decl: NodeDecl) -> Result<Self, Self::Error> {
        let Some(filters) = decl.filters else {
            let mut leaf = LeafFilter::new(decl.value.unwrap_or_default())
                .no_lookup(decl.no_lookup.unwrap_or(false));
            if let Some(lookup) = decl.default_lookup {
                leaf = leaf.default_lookup(lookup);
            }
            if let Some(lookups) = decl.lookups {
                leaf = leaf.lookups(lookups);
            }
            return Ok(Self::Leaf(leaf));
        };

        let leaf_keys: Vec<&str> = [
            ("type", decl.value.is_some()),
            ("default_lookup", decl.default_lookup.is_some()),
            ("lookups", decl.lookups.is_some()),
            ("no_lookup", decl.no_lookup.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect();

        if !leaf_keys.is_empty() {
            return Err(FilterError::MixedDeclaration(leaf_keys.join(", ")));
        }
        Ok(Self::Composite(filters))
    }
}
