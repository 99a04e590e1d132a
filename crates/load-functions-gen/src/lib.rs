//! Generator for ANGLE's `load_functions_table_autogen.cpp`.
//!
//! Reads `load_functions_data.json` (GL internal format -> renderer format ->
//! GL data type -> load function) and writes the C++ `GetLoadFunctionsMap`
//! lookup table. Invoked by the code generation orchestrator, which also
//! queries the declared inputs and outputs through [`cli::Command`].

pub mod cli;
pub mod config;
pub mod emit;
pub mod generator;
pub mod loader;
pub mod model;
pub mod template;
pub mod writer;

pub use config::{GeneratorConfig, TableConfig};
pub use generator::{GenerateError, generate, render_file};
pub use model::{FormatMap, TargetMap, TypeFunctions};
