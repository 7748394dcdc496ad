#![deny(missing_docs)]

//! # Swagger Document Construction
//!
//! Everything that turns endpoint definitions into output document pieces:
//! path conversion, definition naming, typed operation records, and the
//! mapper that assembles them into the header document.

/// Schema-to-document mapping.
pub mod mapper;

/// Definition name derivation.
pub mod naming;

/// Typed operation output records.
pub mod operation;

/// Path joining and conversion.
pub mod paths;
