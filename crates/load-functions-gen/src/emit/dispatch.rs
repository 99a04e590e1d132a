//! Outer `GetLoadFunctionsMap` switch cases.

use super::GeneratedTable;
use super::function::load_function_block;
use crate::config::TableConfig;
use crate::model::{TargetMap, default_functions_name, load_functions_name};

const INDENT: &str = "    ";

/// Append the case for one source format to `table.switch_data`, and the
/// functions it references to `table.load_functions_data`.
///
/// A source format whose only target is the sentinel returns its default
/// function directly. Otherwise an inner switch on the renderer format is
/// opened; its default returns the sentinel function, or breaks out when the
/// source format has no sentinel entry.
pub fn emit_source_case(
    table: &mut GeneratedTable,
    internal_format: &str,
    targets: &TargetMap,
    cfg: &TableConfig,
) {
    let unknown = cfg.unknown_format.as_str();
    let out = &mut table.switch_data;
    let mut s = INDENT.repeat(2);

    out.push_str(&format!("{s}case {internal_format}:\n"));

    let do_switch = !targets.is_unconditional(unknown);
    if do_switch {
        out.push_str(&format!("{s}{{\n"));
        s.push_str(INDENT);
        out.push_str(&format!("{s}switch ({})\n", cfg.angle_format_param));
        out.push_str(&format!("{s}{{\n"));
        s.push_str(INDENT);
    }

    let default_functions = targets.default_functions(unknown);
    for (angle_format, type_functions) in targets.specific(unknown) {
        let func_name = load_functions_name(internal_format, angle_format);
        out.push_str(&format!("{s}case FormatID::{angle_format}:\n"));
        out.push_str(&format!("{s}{INDENT}return {func_name};\n"));

        let merged = match default_functions {
            Some(defaults) => type_functions.merged_with(defaults),
            None => type_functions.clone(),
        };
        table.load_functions_data.push_str(&load_function_block(
            &func_name,
            &merged,
            &cfg.direct_copy_marker,
        ));
    }

    if do_switch {
        out.push_str(&format!("{s}default:\n"));
    }

    let has_break_in_switch = match default_functions {
        Some(defaults) => {
            let func_name = default_functions_name(internal_format);
            out.push_str(&format!("{s}{INDENT}return {func_name};\n"));
            table.load_functions_data.push_str(&load_function_block(
                &func_name,
                defaults,
                &cfg.direct_copy_marker,
            ));
            false
        }
        None => {
            out.push_str(&format!("{s}{INDENT}break;\n"));
            true
        }
    };

    if do_switch {
        s.truncate(s.len() - INDENT.len());
        out.push_str(&format!("{s}}}\n"));
        // a break inside the inner switch only leaves the inner switch
        if has_break_in_switch {
            out.push_str(&format!("{s}break;\n"));
        }
        s.truncate(s.len() - INDENT.len());
        out.push_str(&format!("{s}}}\n"));
    }
}
