use std::{ffi::OsString, path::PathBuf, process::ExitStatus};

use anyhow::Result;
use clap::Parser;

mod python;

/// One fully-described child invocation, built from the command line and
/// owned by the runner for the lifetime of the process.
pub struct Invocation {
    /// Value injected into the child's module search path variable.
    pub search_path: OsString,

    /// Capture target for the child's stdout, `None` to inherit.
    pub output: Option<PathBuf>,

    /// The script and its arguments, passed to the interpreter verbatim.
    pub command: Vec<OsString>,
}

pub fn execute() -> Result<ExitStatus> {
    let invocation = crate::cli::Cli::parse().into_invocation();
    python::command(&invocation)
}
