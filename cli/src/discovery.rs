#![deny(missing_docs)]

//! # Validator Discovery
//!
//! Loading endpoint definitions from disk: a single validator file with an
//! `apiList` array, or a directory tree scanned recursively for
//! `*.validator.json` files holding one definition each.

use std::fs;
use std::path::Path;
use swaggen_core::{AppError, AppResult, EndpointDefinition, ValidatorFile};
use walkdir::WalkDir;

/// File-name suffix matched during recursive discovery.
const VALIDATOR_SUFFIX: &str = ".validator.json";

/// Loads the `apiList` of a single validator file.
pub fn load_api_list(path: &Path) -> AppResult<Vec<EndpointDefinition>> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::General(format!("Failed to read validator file {:?}: {}", path, e)))?;
    let file: ValidatorFile = serde_json::from_str(&content)
        .map_err(|e| AppError::General(format!("Failed to parse validator file {:?}: {}", path, e)))?;
    Ok(file.api_list)
}

/// Recursively collects one endpoint definition per `*.validator.json` file
/// under `dir`, in file-name order.
pub fn discover_validators(dir: &Path) -> AppResult<Vec<EndpointDefinition>> {
    let mut api_list = Vec::new();

    let walker = WalkDir::new(dir).sort_by_file_name().into_iter();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_suffix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(VALIDATOR_SUFFIX));
        if !matches_suffix {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::General(format!("Failed to read validator file {:?}: {}", path, e))
        })?;
        let definition: EndpointDefinition = serde_json::from_str(&content).map_err(|e| {
            AppError::General(format!("Failed to parse validator file {:?}: {}", path, e))
        })?;
        api_list.push(definition);
    }

    Ok(api_list)
}
