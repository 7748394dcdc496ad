#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving definition model names from endpoint names
//! and HTTP methods.

/// Uppercases the first character of a string, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Removes all whitespace from a string.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Derives the definition name for a request body schema.
///
/// e.g. `("Get User", "get")` -> `GetUserGetBody`
pub fn body_model_name(name: &str, method: &str) -> String {
    format!("{}{}Body", strip_whitespace(name), capitalize(method))
}

/// Derives the definition name for a response body schema at a status code.
///
/// e.g. `("Get User", "get", "200")` -> `GetUserGet200Response`
pub fn response_model_name(name: &str, method: &str, status: &str) -> String {
    format!(
        "{}{}{}Response",
        strip_whitespace(name),
        capitalize(method),
        status
    )
}
