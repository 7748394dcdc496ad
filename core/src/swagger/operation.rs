#![deny(missing_docs)]

//! # Operation Records
//!
//! Typed output structures serialized into the Swagger document: operation
//! objects, parameters, responses, and `$ref` schema references.
//!
//! Optional keys are skipped when absent so the emitted JSON carries only
//! what each parameter kind defines (a body parameter has `schema` but no
//! `required`/`type`; the other kinds have the inverse).

use crate::validator::PropertySchema;
use indexmap::IndexMap;
use serde::Serialize;

/// Media type attached to every operation's `consumes`/`produces`.
pub const APPLICATION_JSON: &str = "application/json";

/// Location of a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Request header parameter.
    Header,
    /// Request body parameter.
    Body,
    /// Path template parameter.
    Path,
    /// Query string parameter.
    Query,
}

/// A `$ref` pointer to a registered definition.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaRef {
    /// The reference string, e.g. `#/definitions/GetUserGetBody`.
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl SchemaRef {
    /// Builds a reference to a named entry under `definitions`.
    pub fn to_definition(name: &str) -> Self {
        Self {
            reference: format!("#/definitions/{}", name),
        }
    }
}

/// One operation parameter.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the parameter lives.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Whether the parameter is required. Absent for body parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Primitive type of the parameter. Absent for body parameters and for
    /// properties that declare no type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Schema reference. Only present on body parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

impl Parameter {
    /// The single body parameter referencing a registered definition.
    pub fn body_ref(model_name: &str) -> Self {
        Self {
            name: "body".to_string(),
            location: ParamLocation::Body,
            required: None,
            ty: None,
            schema: Some(SchemaRef::to_definition(model_name)),
        }
    }
}

/// One response entry keyed by status code.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseObject {
    /// Literal description string.
    pub description: String,
    /// Reference to the registered response body definition.
    pub schema: SchemaRef,
    /// Response headers, taken directly from the header schema's properties.
    /// Success-range statuses without header data carry an empty object;
    /// other statuses omit the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, PropertySchema>>,
}

/// A fully assembled operation object stored at `paths[path][method]`.
#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    /// Human-readable summary (the endpoint definition's `name`).
    pub summary: String,
    /// Grouping tags.
    pub tags: Vec<String>,
    /// Accepted request media types.
    pub consumes: Vec<String>,
    /// Produced response media types.
    pub produces: Vec<String>,
    /// Derived parameters, in derivation order.
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, ResponseObject>,
    /// Deprecation flag.
    pub deprecated: bool,
}

impl Operation {
    /// Creates an operation with the fixed JSON media types and no
    /// parameters or responses yet.
    pub fn new(summary: String, tags: Vec<String>) -> Self {
        Self {
            summary,
            tags,
            consumes: vec![APPLICATION_JSON.to_string()],
            produces: vec![APPLICATION_JSON.to_string()],
            parameters: Vec::new(),
            responses: IndexMap::new(),
            deprecated: false,
        }
    }
}
