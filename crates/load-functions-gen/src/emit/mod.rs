//! C++ text emitters for the load functions table.
//!
//! Two blocks are produced from one pass over the format mapping:
//! - `load_functions_data`: one `LoadImageFunctionInfo <name>(GLenum type)`
//!   switch function per (source, target) pair and per source default.
//! - `switch_data`: the case list of the outer `GetLoadFunctionsMap` switch.
//!
//! Both blocks iterate in lexicographic key order so that the output is
//! byte-identical for identical input.

pub mod dispatch;
pub mod function;

use crate::config::TableConfig;
use crate::model::FormatMap;

pub use dispatch::*;
pub use function::*;

/// The two generated text blocks substituted into the file template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTable {
    pub switch_data: String,
    pub load_functions_data: String,
}

pub fn generate_table(map: &FormatMap, cfg: &TableConfig) -> GeneratedTable {
    let mut table = GeneratedTable::default();
    for (internal_format, targets) in &map.by_format {
        emit_source_case(&mut table, internal_format, targets, cfg);
    }
    tracing::debug!(
        "emitted {} source format case(s), {} bytes of functions",
        map.by_format.len(),
        table.load_functions_data.len()
    );
    table
}
