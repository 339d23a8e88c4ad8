//! Output rendering for the command line

use anyhow::Result;
use serde::Serialize;

use crate::core::config::{OpenApiConfig, OutputFormat};
use crate::domain::filters::{FieldDescriptor, FilterRegistry, lookups};

use super::openapi::build_document;

/// Render the query parameters of one endpoint, or of all endpoints when
/// `endpoint` is `None`.
pub fn render_fields(
    registry: &FilterRegistry,
    endpoint: Option<&str>,
    format: OutputFormat,
    openapi: &OpenApiConfig,
) -> Result<String> {
    let selected: Vec<(&str, Vec<FieldDescriptor>)> = match endpoint {
        Some(endpoint) => vec![(endpoint, registry.schema_fields_for(endpoint))],
        None => registry
            .endpoints()
            .map(|(name, _)| (name, registry.schema_fields_for(name)))
            .collect(),
    };

    let rendered = match format {
        OutputFormat::Json => match (endpoint, selected.as_slice()) {
            (Some(_), [(_, fields)]) => serde_json::to_string_pretty(fields)?,
            _ => {
                let map: serde_json::Map<String, serde_json::Value> = selected
                    .iter()
                    .map(|(name, fields)| {
                        Ok((name.to_string(), serde_json::to_value(fields)?))
                    })
                    .collect::<Result<_, serde_json::Error>>()?;
                serde_json::to_string_pretty(&map)?
            }
        },
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, fields) in &selected {
                if endpoint.is_none() {
                    out.push_str(&format!("# {}\n", name));
                }
                for field in fields {
                    out.push_str(&text_line(field));
                    out.push('\n');
                }
            }
            out
        }
        OutputFormat::Openapi => build_document(openapi, selected).to_pretty_json()?,
    };
    Ok(rendered)
}

fn text_line(field: &FieldDescriptor) -> String {
    format!(
        "{}\t{}\t{}",
        field.name,
        field.schema,
        field.description.as_deref().unwrap_or("")
    )
}

#[derive(Serialize)]
struct LookupEntry {
    lookup: &'static str,
    description: &'static str,
}

/// Render the lookup catalog
pub fn render_lookups(format: OutputFormat) -> Result<String> {
    let rendered: String = match format {
        OutputFormat::Text => lookups::all()
            .map(|(lookup, description)| format!("{}\t{}\n", lookup, description))
            .collect(),
        OutputFormat::Json | OutputFormat::Openapi => {
            let entries: Vec<LookupEntry> = lookups::all()
                .map(|(lookup, description)| LookupEntry {
                    lookup,
                    description,
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        }
    };
    Ok(rendered)
}
