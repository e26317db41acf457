use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Overrides the saved base URL for this session.
    pub base_url: Option<String>,
    /// Tracing output goes here; the terminal itself stays clean.
    pub log_file: Option<PathBuf>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    if let Some(path) = &opts.log_file {
        crate::logging::init_file(path)?;
    }
    crate::tui_shell::run(opts)
}
