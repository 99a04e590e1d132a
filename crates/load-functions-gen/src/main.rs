use std::process::ExitCode;

use anyhow::Context as _;
use chrono::Datelike as _;
use env_flags::env_flags;

use load_functions_gen::cli::{Command, INVALID_PARAMETERS, file_list};
use load_functions_gen::config::{UserConfig, load_user_config, resolve};

fn init_tracing(user_cfg: Option<&UserConfig>) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// Pretty formatting for logs (ignored if TRACING_JSON=true).
        TRACING_PRETTY: bool = false;
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
    }

    use tracing_subscriber::{EnvFilter, prelude::*};

    let env_set = |k: &str| std::env::var_os(k).is_some();

    // Support TRACING_FILTER as primary; fall back to RUST_LOG; then user config.
    let mut rust_log = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut tracing_json = *TRACING_JSON;
    let mut tracing_compact = *TRACING_COMPACT;
    let mut tracing_pretty = *TRACING_PRETTY;

    if let Some(cfg) = user_cfg.and_then(|c| c.logging.as_ref()) {
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(level) = cfg.level.as_ref()
        {
            rust_log = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            tracing_json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            tracing_compact = v;
        }
        if !env_set("TRACING_PRETTY")
            && let Some(v) = cfg.pretty
        {
            tracing_pretty = v;
        }
    }

    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    // Always write logs to stderr; stdout carries the inputs/outputs lists.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_writer(std::io::stderr);
    let reg = tracing_subscriber::registry().with(filter);
    let result = if tracing_json {
        reg.with(base.json()).try_init()
    } else if tracing_compact {
        reg.with(base.compact()).try_init()
    } else if tracing_pretty {
        reg.with(base.pretty()).try_init()
    } else {
        reg.with(base).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("tracing already set: {:?}", e);
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_flags! {
        /// Directory holding the data file and receiving the output. Defaults to the current directory.
        LOADGEN_DIR: &str = "";
    }

    // Unknown arguments are rejected before the config file is read.
    let command = match Command::from_args(std::env::args_os().skip(1)) {
        Ok(c) => c,
        Err(_) => {
            println!("{INVALID_PARAMETERS}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let work_dir = if !(*LOADGEN_DIR).is_empty() {
        std::path::PathBuf::from((*LOADGEN_DIR).to_string())
    } else {
        std::env::current_dir().context("failed to resolve current directory")?
    };

    let user_cfg = load_user_config(&work_dir).context("invalid generator config file")?;
    init_tracing(user_cfg.as_ref());
    let config = resolve(work_dir, user_cfg.as_ref());

    match command {
        Command::ListInputs => println!("{}", file_list(&config.inputs())),
        Command::ListOutputs => println!("{}", file_list(&config.outputs())),
        Command::Generate => {
            tracing::debug!("work_dir={}", config.work_dir.display());
            let year = chrono::Local::now().year();
            load_functions_gen::generate(&config, year).with_context(|| {
                format!("failed to generate {}", config.output_path().display())
            })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
