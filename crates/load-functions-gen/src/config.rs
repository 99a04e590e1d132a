use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional per-directory config file.
pub const CONFIG_FILE_NAME: &str = "load_functions_gen.toml";

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    pub logging: Option<LoggingCfg>,
    pub generator: Option<GeneratorCfg>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneratorCfg {
    pub data_file: Option<String>,
    pub helper_module: Option<String>,
    pub output_file: Option<String>,
    pub generator_name: Option<String>,

    pub internal_format_param: Option<String>,
    pub angle_format_param: Option<String>,
    pub unknown_format: Option<String>, // sentinel target key in the data file
    pub direct_copy_marker: Option<String>,
}

/// Fully resolved, immutable generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding the inputs and receiving the output.
    pub work_dir: PathBuf,
    /// JSON data file, relative to `work_dir`.
    pub data_file: String,
    /// Format-definition helper module; declared as an input only.
    pub helper_module: String,
    /// Generated C++ file, relative to `work_dir`.
    pub output_file: String,
    /// Name written into the "Generated by" banner line.
    pub generator_name: String,
    pub table: TableConfig,
}

/// Values that shape the generated C++ text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Parameter name of the GL internal format in `GetLoadFunctionsMap`.
    pub internal_format_param: String,
    /// Parameter name of the renderer format in `GetLoadFunctionsMap`.
    pub angle_format_param: String,
    /// Target key meaning "no specific target format".
    pub unknown_format: String,
    /// Function references containing this text are direct copies (no conversion).
    pub direct_copy_marker: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            internal_format_param: "internalFormat".to_string(),
            angle_format_param: "angleFormat".to_string(),
            unknown_format: "NONE".to_string(),
            direct_copy_marker: "LoadToNative<".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            data_file: "load_functions_data.json".to_string(),
            helper_module: "angle_format.py".to_string(),
            output_file: "load_functions_table_autogen.cpp".to_string(),
            generator_name: "gen_load_functions_table.py".to_string(),
            table: TableConfig::default(),
        }
    }

    /// Overlay values present in the `[generator]` table.
    pub fn with_overrides(mut self, cfg: &GeneratorCfg) -> Self {
        let set = |slot: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *slot = v.clone();
            }
        };
        set(&mut self.data_file, &cfg.data_file);
        set(&mut self.helper_module, &cfg.helper_module);
        set(&mut self.output_file, &cfg.output_file);
        set(&mut self.generator_name, &cfg.generator_name);
        set(&mut self.table.internal_format_param, &cfg.internal_format_param);
        set(&mut self.table.angle_format_param, &cfg.angle_format_param);
        set(&mut self.table.unknown_format, &cfg.unknown_format);
        set(&mut self.table.direct_copy_marker, &cfg.direct_copy_marker);
        self
    }

    /// Files the generator reads, as declared to the build orchestrator.
    pub fn inputs(&self) -> Vec<&str> {
        vec![self.helper_module.as_str(), self.data_file.as_str()]
    }

    /// Files the generator writes, as declared to the build orchestrator.
    pub fn outputs(&self) -> Vec<&str> {
        vec![self.output_file.as_str()]
    }

    pub fn data_path(&self) -> PathBuf {
        self.work_dir.join(&self.data_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(&self.output_file)
    }
}

pub fn load_user_config(work_dir: &Path) -> anyhow::Result<Option<UserConfig>> {
    let path = work_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path)?;
    let cfg: UserConfig = toml::from_str(&s)?;
    Ok(Some(cfg))
}

/// Resolve the generator settings for `work_dir`, applying the optional config file.
pub fn resolve(work_dir: PathBuf, user_cfg: Option<&UserConfig>) -> GeneratorConfig {
    let base = GeneratorConfig::new(work_dir);
    match user_cfg.and_then(|c| c.generator.as_ref()) {
        Some(g) => base.with_overrides(g),
        None => base,
    }
}
