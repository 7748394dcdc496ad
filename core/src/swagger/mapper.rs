#![deny(missing_docs)]

//! # Schema-to-Document Mapper
//!
//! Merges a list of endpoint definitions into a Swagger header document.
//! For each endpoint, derives the operation's parameters, request body
//! definition, response definitions, and deprecation flag, then stores the
//! assembled operation under the converted path and method.
//!
//! `paths` and `definitions` are rebuilt from scratch on every run; all
//! other header-document fields are left untouched, apart from the
//! environment banner prepended to `info.description` once per run.

use crate::error::{AppError, AppResult};
use crate::swagger::naming;
use crate::swagger::operation::{Operation, ParamLocation, Parameter, ResponseObject, SchemaRef};
use crate::swagger::paths::{convert_path, join_paths};
use crate::validator::{EndpointDefinition, ObjectSchema, ResponseSchema};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Caller-supplied knobs for one mapper run.
#[derive(Debug, Clone)]
pub struct MapperOptions {
    /// Gateway base path prepended to each generated `paths` key. Parameter
    /// names inside operations are unaffected.
    pub api_gateway_path: Option<String>,
    /// Runtime environment name embedded in the description banner.
    pub environment: String,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            api_gateway_path: None,
            environment: "development".to_string(),
        }
    }
}

/// Merges `api_list` into `document` in place.
///
/// The document must be a JSON object with a string `basePath` and an
/// `info` object. Its `paths` and `definitions` tables are discarded and
/// repopulated from the endpoint definitions.
pub fn merge_api_list(
    document: &mut Value,
    api_list: &[EndpointDefinition],
    options: &MapperOptions,
) -> AppResult<()> {
    let base_path = document
        .get("basePath")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::General("Header document missing string 'basePath'".into()))?
        .to_string();

    prepend_environment_banner(document, &options.environment)?;

    let mut paths: IndexMap<String, Map<String, Value>> = IndexMap::new();
    let mut definitions: Map<String, Value> = Map::new();

    for endpoint in api_list {
        let converted = convert_path(&join_paths(&base_path, &endpoint.path));
        let lookup_key = match &options.api_gateway_path {
            Some(gateway) => join_paths(gateway, &converted),
            None => converted,
        };

        let mut operation = Operation::new(endpoint.name.clone(), endpoint.tags.clone());

        if let Some(schema) = &endpoint.schema {
            if let Some(headers) = &schema.headers {
                header_parameters(headers, &mut operation.parameters);
            }
            if let Some(body) = &schema.body {
                body_parameter(endpoint, body, &mut definitions, &mut operation.parameters)?;
            }
            // `path` and `params` are alternative spellings handled
            // additively; when both are present, both contribute.
            if let Some(path_schema) = &schema.path {
                path_parameters(path_schema, &mut operation.parameters);
            }
            if let Some(params_schema) = &schema.params {
                path_parameters(params_schema, &mut operation.parameters);
            }
            if let Some(query) = &schema.query {
                query_parameters(query, &mut operation.parameters);
            }
            if let Some(response) = &schema.response {
                build_responses(endpoint, response, &mut definitions, &mut operation.responses)?;
            }
            operation.deprecated = schema.deprecated;
        }

        let entry = paths.entry(lookup_key).or_default();
        entry.insert(endpoint.method.clone(), serde_json::to_value(&operation)?);
    }

    let root = document
        .as_object_mut()
        .ok_or_else(|| AppError::General("Header document must be a JSON object".into()))?;
    root.insert(
        "paths".to_string(),
        Value::Object(
            paths
                .into_iter()
                .map(|(key, methods)| (key, Value::Object(methods)))
                .collect(),
        ),
    );
    root.insert("definitions".to_string(), Value::Object(definitions));

    Ok(())
}

/// Prepends the environment banner to `info.description`, once per run.
fn prepend_environment_banner(document: &mut Value, environment: &str) -> AppResult<()> {
    let info = document
        .get_mut("info")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| AppError::General("Header document missing 'info' object".into()))?;

    let description = info
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let banner = format!(
        "<b>Environment: `{}` </b><br /><br />{}",
        environment, description
    );
    info.insert("description".to_string(), Value::String(banner));
    Ok(())
}

/// One parameter per header property; required iff listed in the schema's
/// required set.
fn header_parameters(schema: &ObjectSchema, parameters: &mut Vec<Parameter>) {
    for (name, property) in &schema.properties {
        parameters.push(Parameter {
            name: name.clone(),
            location: ParamLocation::Header,
            required: Some(schema.is_required(name)),
            ty: property.ty.clone(),
            schema: None,
        });
    }
}

/// Registers the body schema under `definitions` and adds the single body
/// parameter referencing it.
fn body_parameter(
    endpoint: &EndpointDefinition,
    body: &ObjectSchema,
    definitions: &mut Map<String, Value>,
    parameters: &mut Vec<Parameter>,
) -> AppResult<()> {
    let model_name = naming::body_model_name(&endpoint.name, &endpoint.method);
    definitions.insert(model_name.clone(), serde_json::to_value(body)?);
    parameters.push(Parameter::body_ref(&model_name));
    Ok(())
}

/// One parameter per property, always required.
fn path_parameters(schema: &ObjectSchema, parameters: &mut Vec<Parameter>) {
    for (name, property) in &schema.properties {
        parameters.push(Parameter {
            name: name.clone(),
            location: ParamLocation::Path,
            required: Some(true),
            ty: property.ty.clone(),
            schema: None,
        });
    }
}

/// One parameter per query property; required defaults to false when the
/// schema carries no required set.
fn query_parameters(schema: &ObjectSchema, parameters: &mut Vec<Parameter>) {
    for (name, property) in &schema.properties {
        parameters.push(Parameter {
            name: name.clone(),
            location: ParamLocation::Query,
            required: Some(schema.is_required(name)),
            ty: property.ty.clone(),
            schema: None,
        });
    }
}

/// Registers each status's body schema under `definitions` and emits the
/// response entry with its literal description and `$ref`.
fn build_responses(
    endpoint: &EndpointDefinition,
    response: &IndexMap<String, ResponseSchema>,
    definitions: &mut Map<String, Value>,
    responses: &mut IndexMap<String, ResponseObject>,
) -> AppResult<()> {
    for (status, entry) in response {
        let model_name = naming::response_model_name(&endpoint.name, &endpoint.method, status);
        definitions.insert(model_name.clone(), serde_json::to_value(&entry.body)?);

        let description = entry.description.literal().ok_or_else(|| {
            AppError::General(format!(
                "Response '{}' on '{}' has an empty description enum",
                status, endpoint.name
            ))
        })?;

        let headers = match &entry.header {
            Some(header) => Some(header.properties.clone()),
            None if is_success_status(status) => Some(IndexMap::new()),
            None => None,
        };

        responses.insert(
            status.clone(),
            ResponseObject {
                description: description.to_string(),
                schema: SchemaRef::to_definition(&model_name),
                headers,
            },
        );
    }
    Ok(())
}

/// Whether a status-code key falls in the 2xx-3xx success range.
fn is_success_status(status: &str) -> bool {
    status
        .parse::<u16>()
        .map(|code| (200..400).contains(&code))
        .unwrap_or(false)
}
