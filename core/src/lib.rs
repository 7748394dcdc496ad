#![deny(missing_docs)]

//! # Swaggen Core
//!
//! Core library for the validator-to-Swagger document generator: typed
//! endpoint definition records and the mapper that merges them into a
//! Swagger header document. File I/O lives in the CLI crate; everything
//! here is pure transformation.

/// Shared error types.
pub mod error;

/// Swagger document construction.
pub mod swagger;

/// Endpoint validator input records.
pub mod validator;

pub use error::{AppError, AppResult};
pub use swagger::mapper::{merge_api_list, MapperOptions};
pub use swagger::operation::{Operation, ParamLocation, Parameter, ResponseObject, SchemaRef};
pub use swagger::paths::{convert_path, join_paths};
pub use validator::{
    DescriptionSchema, EndpointDefinition, ObjectSchema, PropertySchema, ResponseSchema,
    ValidationSchema, ValidatorFile,
};
