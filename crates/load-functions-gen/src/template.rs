//! Output file template and placeholder substitution.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::emit::GeneratedTable;

/// The generated translation unit. `{name}` (lowercase letters and `_`) is
/// a placeholder; every other brace is C++.
pub const FILE_TEMPLATE: &str = r#"// GENERATED FILE - DO NOT EDIT.
// Generated by {generator} using data from {data_file}
//
// Copyright {copyright_year} The ANGLE Project Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// load_functions_table:
//   Contains the GetLoadFunctionsMap for texture_format_util.h
//

#include "libANGLE/renderer/load_functions_table.h"

#include "image_util/copyimage.h"
#include "image_util/generatemip.h"
#include "image_util/loadimage.h"

using namespace rx;

namespace angle
{

namespace
{

// ES3 image loading functions vary based on:
//    - the GL internal format (supplied to glTex*Image*D)
//    - the GL data type given (supplied to glTex*Image*D)
//    - the target DXGI_FORMAT that the image will be loaded into (which is chosen based on the D3D
//    device's capabilities)
// This map type determines which loading function to use, based on these three parameters.
// Source formats and types are taken from Tables 3.2 and 3.3 of the ES 3 spec.
void UnimplementedLoadFunction(size_t width,
                               size_t height,
                               size_t depth,
                               const uint8_t *input,
                               size_t inputRowPitch,
                               size_t inputDepthPitch,
                               uint8_t *output,
                               size_t outputRowPitch,
                               size_t outputDepthPitch)
{
    UNIMPLEMENTED();
}

void UnreachableLoadFunction(size_t width,
                             size_t height,
                             size_t depth,
                             const uint8_t *input,
                             size_t inputRowPitch,
                             size_t inputDepthPitch,
                             uint8_t *output,
                             size_t outputRowPitch,
                             size_t outputDepthPitch)
{
    UNREACHABLE();
}

{load_functions_data}}  // namespace

LoadFunctionMap GetLoadFunctionsMap(GLenum {internal_format}, FormatID {angle_format})
{
    // clang-format off
    switch ({internal_format})
    {
{switch_data}
        default:
            break;
    }
    // clang-format on
    ASSERT({internal_format} == GL_NONE || {angle_format} == angle::FormatID::NONE);
    static LoadFunctionMap emptyLoadFunctionsMap;
    return emptyLoadFunctionsMap;

}  // GetLoadFunctionsMap

}  // namespace angle
"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template references unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),
}

/// Build the placeholder values for one generated file.
pub fn file_values(
    config: &GeneratorConfig,
    table: &GeneratedTable,
    copyright_year: i32,
) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        ("copyright_year", copyright_year.to_string()),
        ("generator", config.generator_name.clone()),
        ("data_file", config.data_file.clone()),
        ("internal_format", config.table.internal_format_param.clone()),
        ("angle_format", config.table.angle_format_param.clone()),
        ("load_functions_data", table.load_functions_data.clone()),
        ("switch_data", table.switch_data.clone()),
    ])
}

/// Substitute `{name}` placeholders in a single pass. Substituted text is not rescanned.
pub fn render(template: &str, values: &BTreeMap<&str, String>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + values.values().map(String::len).sum::<usize>());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match placeholder_len(after) {
            Some(len) => {
                let name = &after[..len];
                let value = values
                    .get(name)
                    .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
                out.push_str(value);
                rest = &after[len + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Length of the placeholder name at the start of `s` if it is closed by `}`.
fn placeholder_len(s: &str) -> Option<usize> {
    let len = s
        .bytes()
        .take_while(|b| b.is_ascii_lowercase() || *b == b'_')
        .count();
    (len > 0 && s.as_bytes().get(len) == Some(&b'}')).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> BTreeMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn substitutes_placeholders_and_keeps_cpp_braces() {
        let out = render(
            "void f()\n{\n    switch ({param})\n    {\n{body}    }\n}\n",
            &values(&[("param", "type"), ("body", "        default:\n")]),
        )
        .unwrap();
        assert_eq!(
            out,
            "void f()\n{\n    switch (type)\n    {\n        default:\n    }\n}\n"
        );
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let out = render("{a}", &values(&[("a", "{b}"), ("b", "x")])).unwrap();
        assert_eq!(out, "{b}");
    }

    #[test]
    fn unknown_placeholder_is_error() {
        let err = render("x {missing} y", &values(&[])).unwrap_err();
        assert_eq!(err, TemplateError::UnknownPlaceholder("missing".into()));
        assert_eq!(
            err.to_string(),
            "template references unknown placeholder '{missing}'"
        );
    }

    #[test]
    fn placeholder_followed_by_brace() {
        let out = render("{a}}  // namespace", &values(&[("a", "int x;\n")])).unwrap();
        assert_eq!(out, "int x;\n}  // namespace");
    }

    #[test]
    fn file_template_renders_with_defaults() {
        let config = GeneratorConfig::new(std::path::PathBuf::from("."));
        let table = GeneratedTable {
            switch_data: "        case GL_R8:\n            return R8_to_default;\n".into(),
            load_functions_data: String::new(),
        };
        let out = render(FILE_TEMPLATE, &file_values(&config, &table, 2026)).unwrap();
        assert!(out.starts_with("// GENERATED FILE - DO NOT EDIT.\n"));
        assert!(out.contains("// Copyright 2026 The ANGLE Project Authors."));
        assert!(out.contains(
            "// Generated by gen_load_functions_table.py using data from load_functions_data.json\n"
        ));
        assert!(out.contains(
            "LoadFunctionMap GetLoadFunctionsMap(GLenum internalFormat, FormatID angleFormat)"
        ));
        assert!(out.contains("    switch (internalFormat)\n    {\n        case GL_R8:\n"));
        assert!(out.contains("return R8_to_default;\n\n        default:\n            break;\n"));
        assert!(out.contains(
            "ASSERT(internalFormat == GL_NONE || angleFormat == angle::FormatID::NONE);"
        ));
        assert!(out.contains("    UNREACHABLE();\n}\n\n}  // namespace\n"));
        assert!(!out.contains("{switch_data}"));
    }
}
