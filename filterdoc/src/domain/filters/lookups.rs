//! Lookup catalog
//!
//! Static descriptions for every comparison lookup a filter can accept,
//! plus the lookup groups that change the expected value representation.

/// Lookup applied when a query parameter carries no explicit lookup suffix
pub const DEFAULT_LOOKUP: &str = "exact";

/// Lookup that checks for NULL and always takes a boolean value
pub const NULL_LOOKUP: &str = "isnull";

/// Lookups that accept several comma separated values
pub const MULTI_VALUE_LOOKUPS: &[&str] = &["in", "iin", "range"];

/// Lookups that compare a single component of a date or timestamp
pub const DATE_PART_LOOKUPS: &[&str] = &[
    "year", "month", "day", "week_day", "hour", "minute", "second",
];

/// Lookup descriptions, sorted by lookup name
const DESCRIPTIONS: &[(&str, &str)] = &[
    ("contains", "Match when string contains given substring"),
    ("day", "Match by day of the month"),
    ("endswith", "Match when string ends with given substring"),
    ("exact", "Match exactly the value as is"),
    ("gt", "Match when value is greater then given value"),
    ("gte", "Match when value is greater or equal then given value"),
    ("hour", "Match by the hour (24 hour) value of the timestamp"),
    (
        "icontains",
        "Case insensitive match when string contains given substring",
    ),
    (
        "iendswith",
        "Case insensitive match when string ends with given substring",
    ),
    ("iexact", "Case insensitive match exactly the value as is"),
    (
        "iin",
        "Case insensitive match when value is any of given comma separated values",
    ),
    ("in", "Match when value is any of given comma separated values"),
    ("iregex", "Case insensitive match string by regex pattern"),
    ("isnull", "Match when value is NULL"),
    (
        "istartswith",
        "Case insensitive match when string starts with given substring",
    ),
    ("lt", "Match when value is less then given value"),
    ("lte", "Match when value is less or equal then given value"),
    ("minute", "Match by the minute value of the timestamp"),
    ("month", "Match by the month value of the timestamp"),
    ("range", "Match when value is within comma separated range"),
    ("regex", "Match string by regex pattern"),
    ("second", "Match by the second value of the timestamp"),
    ("startswith", "Match when string starts with given substring"),
    (
        "week_day",
        "Match by week day (1-Sunday to 7-Saturday) of the timestamp",
    ),
    ("year", "Match by the year value of the timestamp"),
];

/// Describe a lookup. Unknown lookups have no description.
pub fn describe(lookup: &str) -> Option<&'static str> {
    DESCRIPTIONS
        .binary_search_by(|(name, _)| name.cmp(&lookup))
        .ok()
        .map(|idx| DESCRIPTIONS[idx].1)
}

/// All known lookups with their descriptions, sorted by name
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    DESCRIPTIONS.iter().copied()
}

pub fn is_multi_value(lookup: &str) -> bool {
    MULTI_VALUE_LOOKUPS.contains(&lookup)
}

pub fn is_date_part(lookup: &str) -> bool {
    DATE_PART_LOOKUPS.contains(&lookup)
}
