//! OpenAPI document generation
//!
//! Publishes query parameter descriptors as OpenAPI `in: query` parameters,
//! one `GET` operation per endpoint.

use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
};
use utoipa::openapi::response::ResponseBuilder;
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder, PathsBuilder, RefOr, Required};

use crate::core::config::OpenApiConfig;
use crate::domain::filters::{FieldDescriptor, FilterRegistry, Location, SchemaType, endpoint_path};

/// Build the schema object of a parameter
fn schema_for(schema: SchemaType) -> RefOr<Schema> {
    let scalar = |ty: Type| ObjectBuilder::new().schema_type(ty);
    let schema = match schema {
        SchemaType::String => Schema::Object(scalar(Type::String).build()),
        SchemaType::Integer => Schema::Object(scalar(Type::Integer).build()),
        SchemaType::Number => Schema::Object(scalar(Type::Number).build()),
        SchemaType::Boolean => Schema::Object(scalar(Type::Boolean).build()),
        // Multiple values arrive comma separated in a single query string
        SchemaType::Array => Schema::Array(scalar(Type::String).to_array_builder().build()),
    };
    RefOr::T(schema)
}

/// Convert a descriptor into an OpenAPI parameter
pub fn to_parameter(field: &FieldDescriptor) -> Parameter {
    let parameter_in = match field.location {
        Location::Query => ParameterIn::Query,
    };
    let required = if field.required {
        Required::True
    } else {
        Required::False
    };
    ParameterBuilder::new()
        .name(field.name.clone())
        .parameter_in(parameter_in)
        .required(required)
        .description(field.description.clone())
        .schema(Some(schema_for(field.schema)))
        .build()
}

/// Stable operation id derived from an endpoint name
fn operation_id(endpoint: &str) -> String {
    let slug: String = endpoint
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "list".to_string()
    } else {
        format!("list_{}", slug)
    }
}

fn operation(endpoint: &str, fields: &[FieldDescriptor]) -> Operation {
    OperationBuilder::new()
        .operation_id(Some(operation_id(endpoint)))
        .parameters(Some(fields.iter().map(to_parameter)))
        .response(
            "200",
            ResponseBuilder::new()
                .description("Filtered results")
                .build(),
        )
        .build()
}

/// Build a document from `(endpoint, fields)` pairs
pub fn build_document<'a, I>(config: &OpenApiConfig, endpoints: I) -> OpenApi
where
    I: IntoIterator<Item = (&'a str, Vec<FieldDescriptor>)>,
{
    let mut paths = PathsBuilder::new();
    for (endpoint, fields) in endpoints {
        tracing::trace!(endpoint, parameters = fields.len(), "Adding OpenAPI path");
        paths = paths.path(
            endpoint_path(endpoint),
            PathItem::new(HttpMethod::Get, operation(endpoint, &fields)),
        );
    }

    let info = InfoBuilder::new()
        .title(config.title.clone())
        .version(config.version.clone())
        .description(config.description.clone())
        .build();

    OpenApiBuilder::new().info(info).paths(paths.build()).build()
}

/// Build a document covering every endpoint of `registry`
pub fn registry_document(config: &OpenApiConfig, registry: &FilterRegistry) -> OpenApi {
    build_document(
        config,
        registry
            .endpoints()
            .map(|(endpoint, _)| (endpoint, registry.schema_fields_for(endpoint))),
    )
}
