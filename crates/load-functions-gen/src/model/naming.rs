//! Naming helpers for generated C++ symbols.

/// Target name used for the function built from the sentinel mapping.
pub const DEFAULT_TARGET_NAME: &str = "default";

/// Strip the `GL_` prefix from a source format identifier, if present.
pub fn short_format_name(internal_format: &str) -> &str {
    internal_format
        .strip_prefix("GL_")
        .unwrap_or(internal_format)
}

/// Compose a per-pair function name as `<short source>_to_<target>`.
pub fn load_functions_name(internal_format: &str, target_format: &str) -> String {
    format!("{}_to_{}", short_format_name(internal_format), target_format)
}

/// Function name used for the source format's sentinel (fallback) mapping.
pub fn default_functions_name(internal_format: &str) -> String {
    load_functions_name(internal_format, DEFAULT_TARGET_NAME)
}
