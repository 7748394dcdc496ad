#![deny(missing_docs)]

//! # Generate Command
//!
//! The single pipeline of the tool: load the header document and the
//! endpoint definitions, merge them, write the result as pretty-printed
//! JSON with 4-space indentation.

use crate::discovery;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use swaggen_core::{merge_api_list, AppError, AppResult, EndpointDefinition, MapperOptions};

/// Arguments for the generate pipeline.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Location of the validator file, or of the validator directory when
    /// --recursive is set.
    #[clap(short = 'v', long)]
    pub validator: PathBuf,

    /// Location of the output file.
    #[clap(short = 'o', long)]
    pub output: PathBuf,

    /// Location of the header file in JSON format.
    #[clap(short = 'H', long)]
    pub header: PathBuf,

    /// Recursively search the validator directory for *.validator.json
    /// files, one endpoint definition per file.
    #[clap(short = 'r', long)]
    pub recursive: bool,

    /// Override the header document's basePath.
    #[clap(short = 'b', long)]
    pub base_url: Option<String>,

    /// Override the header document's redirectPath.
    #[clap(short = 'm', long)]
    pub map_path: Option<String>,

    /// API gateway base path prepended to each generated paths key.
    #[clap(short = 'g', long)]
    pub api_gateway_path: Option<String>,

    /// Environment name embedded in the description banner.
    #[clap(long, env = "SWAGGEN_ENV", default_value = "development")]
    pub environment: String,
}

/// Executes the generate pipeline.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    if !args.validator.exists() {
        return Err(AppError::General(format!(
            "Validator file not found at {:?}, create the validator file first",
            args.validator
        )));
    }
    if !args.header.exists() {
        return Err(AppError::General(format!(
            "Header file not found at {:?}, create the header file first",
            args.header
        )));
    }

    let mut document = load_header(args)?;

    let api_list = if args.recursive {
        discovery::discover_validators(&args.validator)?
    } else {
        discovery::load_api_list(&args.validator)?
    };

    apply_overrides(&mut document, args);
    warn_ambiguous_path_schemas(&api_list);

    let options = MapperOptions {
        api_gateway_path: args.api_gateway_path.clone(),
        environment: args.environment.clone(),
    };
    merge_api_list(&mut document, &api_list, &options)?;

    let rendered = render_document(&document)?;
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::General(format!("Failed to create output directory: {}", e))
            })?;
        }
    }
    fs::write(&args.output, rendered)
        .map_err(|e| AppError::General(format!("Failed to write output file: {}", e)))?;

    println!("Swagger document written to {:?}", args.output);
    Ok(())
}

fn load_header(args: &GenerateArgs) -> AppResult<Value> {
    let content = fs::read_to_string(&args.header).map_err(|e| {
        AppError::General(format!("Failed to read header file {:?}: {}", args.header, e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::General(format!(
            "Failed to parse header file {:?}: {}",
            args.header, e
        ))
    })
}

/// Applies the --base-url / --map-path header-document overrides.
fn apply_overrides(document: &mut Value, args: &GenerateArgs) {
    let Some(root) = document.as_object_mut() else {
        return;
    };
    if let Some(base_url) = &args.base_url {
        root.insert("basePath".to_string(), Value::String(base_url.clone()));
    }
    if let Some(map_path) = &args.map_path {
        root.insert("redirectPath".to_string(), Value::String(map_path.clone()));
    }
}

/// Flags endpoints declaring both `path` and `params` sub-schemas. Both
/// still contribute parameters; the warning only surfaces the ambiguity.
fn warn_ambiguous_path_schemas(api_list: &[EndpointDefinition]) {
    for endpoint in api_list {
        let both = endpoint
            .schema
            .as_ref()
            .is_some_and(|s| s.path.is_some() && s.params.is_some());
        if both {
            eprintln!(
                "Warning: endpoint '{}' defines both 'path' and 'params' sub-schemas; parameters from both are emitted",
                endpoint.name
            );
        }
    }
}

/// Pretty-prints the document with 4-space indentation.
fn render_document(document: &Value) -> AppResult<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|e| AppError::General(format!("Output is not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const HEADER: &str = r#"{
        "swagger": "2.0",
        "info": { "title": "Example API", "description": "Base", "version": "1.0.0" },
        "basePath": "/api"
    }"#;

    fn args(validator: &Path, header: &Path, output: &Path) -> GenerateArgs {
        GenerateArgs {
            validator: validator.to_path_buf(),
            output: output.to_path_buf(),
            header: header.to_path_buf(),
            recursive: false,
            base_url: None,
            map_path: None,
            api_gateway_path: None,
            environment: "test".to_string(),
        }
    }

    #[test]
    fn test_execute_single_file_pipeline() {
        let dir = tempdir().unwrap();
        let validator_path = dir.path().join("validators.json");
        let header_path = dir.path().join("header.json");
        let output_path = dir.path().join("out/swagger.json");

        fs::write(
            &validator_path,
            r#"{
                "apiList": [{
                    "path": "/users/:id",
                    "type": "get",
                    "name": "Get User",
                    "tags": ["users"],
                    "schema": {
                        "path": {
                            "type": "object",
                            "properties": { "id": { "type": "string" } }
                        },
                        "response": {
                            "200": {
                                "body": { "type": "object" },
                                "description": { "type": "string", "enum": ["OK"] }
                            }
                        }
                    }
                }]
            }"#,
        )
        .unwrap();
        fs::write(&header_path, HEADER).unwrap();

        execute(&args(&validator_path, &header_path, &output_path)).unwrap();

        let rendered = fs::read_to_string(&output_path).unwrap();
        // 4-space indentation on top-level keys.
        assert!(rendered.contains("\n    \"swagger\": \"2.0\""));

        let document: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            document["info"]["description"],
            serde_json::json!("<b>Environment: `test` </b><br /><br />Base")
        );
        let operation = &document["paths"]["/api/users/{id}"]["get"];
        assert_eq!(operation["summary"], serde_json::json!("Get User"));
        assert_eq!(
            operation["responses"]["200"]["schema"]["$ref"],
            serde_json::json!("#/definitions/GetUserGet200Response")
        );
        assert!(document["definitions"]["GetUserGet200Response"].is_object());
    }

    #[test]
    fn test_execute_recursive_pipeline() {
        let dir = tempdir().unwrap();
        let validator_dir = dir.path().join("validators");
        let header_path = dir.path().join("header.json");
        let output_path = dir.path().join("swagger.json");

        fs::create_dir_all(validator_dir.join("users")).unwrap();
        fs::write(
            validator_dir.join("users/list.validator.json"),
            r#"{ "path": "/users", "type": "get", "name": "List Users" }"#,
        )
        .unwrap();
        fs::write(
            validator_dir.join("users/create.validator.json"),
            r#"{ "path": "/users", "type": "post", "name": "Create User" }"#,
        )
        .unwrap();
        fs::write(&header_path, HEADER).unwrap();

        let mut args = args(&validator_dir, &header_path, &output_path);
        args.recursive = true;
        execute(&args).unwrap();

        let document: Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        let methods = document["paths"]["/api/users"].as_object().unwrap();
        assert_eq!(methods.len(), 2);
    }

    #[test]
    fn test_execute_missing_validator() {
        let dir = tempdir().unwrap();
        let header_path = dir.path().join("header.json");
        fs::write(&header_path, HEADER).unwrap();

        let missing = dir.path().join("missing.json");
        let output_path = dir.path().join("swagger.json");
        let err = execute(&args(&missing, &header_path, &output_path)).unwrap_err();
        assert!(format!("{}", err).contains("Validator file not found"));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_execute_missing_header() {
        let dir = tempdir().unwrap();
        let validator_path = dir.path().join("validators.json");
        fs::write(&validator_path, r#"{ "apiList": [] }"#).unwrap();

        let missing = dir.path().join("missing.json");
        let output_path = dir.path().join("swagger.json");
        let err = execute(&args(&validator_path, &missing, &output_path)).unwrap_err();
        assert!(format!("{}", err).contains("Header file not found"));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_base_url_and_map_path_overrides() {
        let dir = tempdir().unwrap();
        let validator_path = dir.path().join("validators.json");
        let header_path = dir.path().join("header.json");
        let output_path = dir.path().join("swagger.json");

        fs::write(
            &validator_path,
            r#"{ "apiList": [{ "path": "/users", "type": "get", "name": "List Users" }] }"#,
        )
        .unwrap();
        fs::write(&header_path, HEADER).unwrap();

        let mut args = args(&validator_path, &header_path, &output_path);
        args.base_url = Some("/v2".to_string());
        args.map_path = Some("/redirect".to_string());
        execute(&args).unwrap();

        let document: Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert_eq!(document["basePath"], serde_json::json!("/v2"));
        assert_eq!(document["redirectPath"], serde_json::json!("/redirect"));
        assert!(document["paths"]
            .as_object()
            .unwrap()
            .contains_key("/v2/users"));
    }

    #[test]
    fn test_gateway_path_reaches_mapper() {
        let dir = tempdir().unwrap();
        let validator_path = dir.path().join("validators.json");
        let header_path = dir.path().join("header.json");
        let output_path = dir.path().join("swagger.json");

        fs::write(
            &validator_path,
            r#"{ "apiList": [{ "path": "/users", "type": "get", "name": "List Users" }] }"#,
        )
        .unwrap();
        fs::write(&header_path, HEADER).unwrap();

        let mut args = args(&validator_path, &header_path, &output_path);
        args.api_gateway_path = Some("/gateway".to_string());
        execute(&args).unwrap();

        let document: Value =
            serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
        assert!(document["paths"]
            .as_object()
            .unwrap()
            .contains_key("/gateway/api/users"));
    }

    #[test]
    fn test_render_document_uses_four_space_indent() {
        let document = serde_json::json!({ "a": { "b": 1 } });
        let rendered = render_document(&document).unwrap();
        assert_eq!(rendered, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }
}
