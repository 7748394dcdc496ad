#![deny(missing_docs)]

//! # Validator Definitions
//!
//! Typed records for endpoint validator files. Each validator describes one
//! API operation: its path template, HTTP method, summary name, tags, and an
//! optional validation schema for the request/response surfaces.
//!
//! Sub-schemas are JSON-Schema-shaped objects. Unknown keywords are captured
//! in flattened `extra` maps so schemas registered under `definitions`
//! round-trip verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single-file validator document holding the full endpoint list.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorFile {
    /// Endpoint definitions, in declaration order.
    #[serde(rename = "apiList")]
    pub api_list: Vec<EndpointDefinition>,
}

/// One endpoint definition record.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointDefinition {
    /// URL path template. Parameter placeholders are written `:name`.
    pub path: String,
    /// HTTP method name, lowercase expected; used as the map key under the
    /// path entry.
    #[serde(rename = "type")]
    pub method: String,
    /// Human-readable summary. Its whitespace-stripped form namespaces
    /// generated schema names.
    pub name: String,
    /// Grouping tags, order preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional validation schema.
    pub schema: Option<ValidationSchema>,
}

/// The per-endpoint validation schema with one optional sub-schema per
/// request surface plus keyed response schemas.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationSchema {
    /// Request header schema.
    pub headers: Option<ObjectSchema>,
    /// Request body schema.
    pub body: Option<ObjectSchema>,
    /// Path parameter schema.
    pub path: Option<ObjectSchema>,
    /// Alternative naming for the path parameter schema. Handled identically
    /// to `path`, and additively when both are present.
    pub params: Option<ObjectSchema>,
    /// Query parameter schema.
    pub query: Option<ObjectSchema>,
    /// Response schemas keyed by HTTP status code.
    pub response: Option<IndexMap<String, ResponseSchema>>,
    /// Marks the operation as deprecated.
    #[serde(default)]
    pub deprecated: bool,
}

/// A JSON-Schema-shaped object schema: named properties plus a required set.
///
/// Registered verbatim under `definitions` when used as a body schema, so
/// keywords beyond `type`/`properties`/`required` are carried in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Schema type, usually `object`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Property name to property schema, insertion order preserved.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of required properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Any further schema keywords, round-tripped untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ObjectSchema {
    /// Whether `name` appears in this schema's required set.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// One property inside an [`ObjectSchema`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Primitive type of the property, when declared.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    /// Any further keywords (format, enum, nested schemas, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Response schema for one status code.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSchema {
    /// Body schema, registered under `definitions`.
    pub body: ObjectSchema,
    /// Optional response-header schema.
    pub header: Option<ObjectSchema>,
    /// Description schema; its single enum member is the literal description.
    pub description: DescriptionSchema,
}

/// A schema whose allowed value set has exactly one member, used to carry a
/// literal description string.
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptionSchema {
    /// Allowed values; the first entry is the description literal.
    #[serde(rename = "enum")]
    pub values: Vec<String>,
}

impl DescriptionSchema {
    /// The literal description string, if the enum is non-empty.
    pub fn literal(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}
