//! Property-based tests for the load functions table generator.
//!
//! Key invariants:
//! - Rendering the same mapping twice yields identical bytes
//! - Outer switch cases follow lexicographic source format order
//! - Inner switches exist only for formats with a specific target
//! - Specific target functions cover the union of their own and the default types,
//!   with their own entries winning

use std::collections::BTreeMap;
use std::path::PathBuf;

use load_functions_gen::{FormatMap, GeneratorConfig, TargetMap, TypeFunctions, render_file};
use proptest::prelude::*;

const SENTINEL: &str = "NONE";

fn type_functions() -> impl Strategy<Value = TypeFunctions> {
    prop::collection::btree_map(
        "GL_[A-Z]{1,8}",
        prop_oneof![
            "LoadToNative<GLubyte, [1-4]>",
            "Load[A-Z][a-zA-Z0-9]{1,10}",
        ],
        0..4,
    )
    .prop_map(|by_type| TypeFunctions { by_type })
}

fn target_map() -> impl Strategy<Value = TargetMap> {
    (
        prop::collection::btree_map("[A-Z][A-Z0-9]{0,7}", type_functions(), 0..3),
        prop::option::of(type_functions()),
    )
        .prop_filter_map("at least one target", |(mut by_target, default)| {
            if let Some(default) = default {
                by_target.insert(SENTINEL.to_string(), default);
            }
            (!by_target.is_empty()).then_some(TargetMap { by_target })
        })
}

fn format_map() -> impl Strategy<Value = FormatMap> {
    prop::collection::btree_map("GL_[A-Z0-9]{1,8}", target_map(), 1..6)
        .prop_map(|by_format| FormatMap { by_format })
}

fn config() -> GeneratorConfig {
    GeneratorConfig::new(PathBuf::from("."))
}

/// The `GetLoadFunctionsMap` body, after all generated functions.
fn dispatch_part(text: &str) -> &str {
    let start = text
        .find("LoadFunctionMap GetLoadFunctionsMap(")
        .expect("dispatch function present");
    &text[start..]
}

/// Case label -> returned function for the type switch named `func_name`.
fn function_cases(text: &str, func_name: &str) -> BTreeMap<String, String> {
    let header = format!("LoadImageFunctionInfo {func_name}(GLenum type)\n");
    let start = text.find(&header).expect("function emitted") + header.len();
    let body = &text[start..start + text[start..].find("\n}\n").expect("function end")];
    let mut cases = BTreeMap::new();
    let mut lines = body.lines();
    while let Some(line) = lines.next() {
        if let Some(label) = line.trim().strip_prefix("case ") {
            let ret = lines.next().expect("return after case").trim();
            let inner = ret
                .strip_prefix("return LoadImageFunctionInfo(")
                .and_then(|r| r.rsplit_once(", "))
                .map(|(f, _)| f.to_string())
                .expect("return shape");
            cases.insert(label.trim_end_matches(':').to_string(), inner);
        }
    }
    cases
}

proptest! {
    /// Rendering is a pure function of the mapping.
    #[test]
    fn rendering_is_deterministic(map in format_map()) {
        let a = render_file(&map, &config(), 2026).unwrap();
        let b = render_file(&map.clone(), &config(), 2026).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Outer cases appear once per source format, sorted.
    #[test]
    fn outer_cases_are_sorted(map in format_map()) {
        let text = render_file(&map, &config(), 2026).unwrap();
        let cases: Vec<String> = dispatch_part(&text)
            .lines()
            .filter_map(|l| l.strip_prefix("        case "))
            .map(|l| l.trim_end_matches(':').to_string())
            .collect();
        let expected: Vec<String> = map.by_format.keys().cloned().collect();
        prop_assert_eq!(cases, expected);
    }

    /// Only formats with a non-sentinel target open an inner switch.
    #[test]
    fn inner_switch_only_for_specific_targets(map in format_map()) {
        let text = render_file(&map, &config(), 2026).unwrap();
        let switches = dispatch_part(&text).matches("switch (angleFormat)").count();
        let expected = map
            .by_format
            .values()
            .filter(|t| !t.is_unconditional(SENTINEL))
            .count();
        prop_assert_eq!(switches, expected);
    }

    /// Specific functions are the default mapping overlaid by their own entries.
    #[test]
    fn specific_functions_merge_default(map in format_map()) {
        let text = render_file(&map, &config(), 2026).unwrap();
        for (internal_format, targets) in &map.by_format {
            let short = internal_format.trim_start_matches("GL_");
            for (target, own) in targets.specific(SENTINEL) {
                let mut expected = targets
                    .default_functions(SENTINEL)
                    .map(|d| d.by_type.clone())
                    .unwrap_or_default();
                expected.extend(own.by_type.clone());
                let cases = function_cases(&text, &format!("{short}_to_{target}"));
                prop_assert_eq!(cases, expected);
            }
        }
    }

    /// Every case's conversion flag is false exactly for direct copies.
    #[test]
    fn conversion_flag_matches_function(map in format_map()) {
        let text = render_file(&map, &config(), 2026).unwrap();
        for line in text.lines().filter(|l| l.contains("return LoadImageFunctionInfo(")) {
            let direct = line.contains("LoadToNative<");
            prop_assert_eq!(line.ends_with(", false);"), direct, "{}", line);
        }
    }
}
