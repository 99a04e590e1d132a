//! Per-pair type switch functions.

use crate::model::TypeFunctions;

/// Body returned when the data type is not in the table.
const UNREACHABLE_CASE: &str = "        default:\n            UNREACHABLE();\n            return LoadImageFunctionInfo(UnreachableLoadFunction, true);\n";

/// Whether `load_function` changes the pixel layout rather than copying it.
pub fn requires_conversion(load_function: &str, direct_copy_marker: &str) -> bool {
    !load_function.contains(direct_copy_marker)
}

/// Emit `LoadImageFunctionInfo <func_name>(GLenum type)` with one case per data type.
pub fn load_function_block(
    func_name: &str,
    type_functions: &TypeFunctions,
    direct_copy_marker: &str,
) -> String {
    let mut snippet = format!("LoadImageFunctionInfo {func_name}(GLenum type)\n");
    snippet.push_str("{\n");
    snippet.push_str("    switch (type)\n");
    snippet.push_str("    {\n");
    for (gl_type, load_function) in &type_functions.by_type {
        let conversion = requires_conversion(load_function, direct_copy_marker);
        snippet.push_str(&format!("        case {gl_type}:\n"));
        snippet.push_str(&format!(
            "            return LoadImageFunctionInfo({load_function}, {conversion});\n"
        ));
    }
    snippet.push_str(UNREACHABLE_CASE);
    snippet.push_str("    }\n");
    snippet.push_str("}\n");
    snippet.push('\n');
    snippet
}
