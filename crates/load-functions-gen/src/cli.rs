//! Command-line modes understood by the build orchestrator.

use std::ffi::OsStr;

/// Token requesting the declared input files.
pub const INPUTS_TOKEN: &str = "inputs";
/// Token requesting the declared output files.
pub const OUTPUTS_TOKEN: &str = "outputs";
/// Message printed (on stdout) for any other argument.
pub const INVALID_PARAMETERS: &str = "Invalid script parameters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// No argument: load the data file and write the table.
    Generate,
    ListInputs,
    ListOutputs,
}

impl Command {
    /// Select the mode from the first argument after the program name.
    /// Further arguments are ignored. Arguments that are not valid UTF-8 are
    /// rejected like any other unknown token.
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let Some(arg) = args.into_iter().next() else {
            return Ok(Self::Generate);
        };
        let arg = arg.as_ref();
        match arg.to_str() {
            Some(INPUTS_TOKEN) => Ok(Self::ListInputs),
            Some(OUTPUTS_TOKEN) => Ok(Self::ListOutputs),
            _ => Err(arg.to_string_lossy().into_owned()),
        }
    }
}

/// Render a file list the way the orchestrator parses it.
pub fn file_list(files: &[&str]) -> String {
    files.join(",")
}
