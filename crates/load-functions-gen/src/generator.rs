//! Load -> emit -> substitute -> write.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::GeneratorConfig;
use crate::emit::generate_table;
use crate::loader::{LoadError, load_from_file};
use crate::model::FormatMap;
use crate::template::{FILE_TEMPLATE, TemplateError, file_values, render};
use crate::writer::{WriteError, write_atomic};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Render the complete C++ file for `map`. Pure: same inputs, same bytes.
pub fn render_file(
    map: &FormatMap,
    config: &GeneratorConfig,
    copyright_year: i32,
) -> Result<String, TemplateError> {
    let table = generate_table(map, &config.table);
    render(FILE_TEMPLATE, &file_values(config, &table, copyright_year))
}

/// Run the whole pipeline and return the path written.
pub fn generate(config: &GeneratorConfig, copyright_year: i32) -> Result<PathBuf, GenerateError> {
    let data_path = config.data_path();
    tracing::info!("loading {}", data_path.display());
    let map = load_from_file(&data_path)?;

    let output = render_file(&map, config, copyright_year)?;

    let output_path = config.output_path();
    write_atomic(&output_path, &output)?;
    tracing::info!(
        "generated {} ({} source formats)",
        output_path.display(),
        map.by_format.len()
    );
    Ok(output_path)
}
