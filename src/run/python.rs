use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{anyhow, Context as _, Result};

use super::Invocation;
use crate::command as CommandTool;
use crate::module::Context;
use crate::signal::pass_control_to_child;

pub(super) fn command(invocation: &Invocation) -> Result<ExitStatus> {
    let context = Context::global()?;

    let mut command = CommandTool::create_command(context.interpreter());
    command
        .args(&invocation.command)
        .env(context.search_path_var(), &invocation.search_path);

    match &invocation.output {
        Some(target) => run_captured(command, target),
        None => run_inherited(command),
    }
}

/// The child writes straight to the parent's stdout; only its exit status
/// matters.
fn run_inherited(mut command: Command) -> Result<ExitStatus> {
    pass_control_to_child();

    let status = command
        .status()
        .with_context(|| format!("could not start {:?}", command.get_program()))?;
    Ok(status)
}

/// Capture mode. The target is opened before the child is spawned: an
/// unusable target never costs a child process. The captured bytes reach the
/// file only after the child has closed its stdout, never interleaved.
fn run_captured(mut command: Command, target: &Path) -> Result<ExitStatus> {
    let mut file = File::create(target)
        .with_context(|| format!("could not create output file \"{}\"", target.display()))?;

    command.stdout(Stdio::piped());

    pass_control_to_child();

    let result = capture_into(&mut command, &mut file);
    if result.is_err() {
        // Leave no truncated half-written target behind.
        drop(file);
        let _ = fs::remove_file(target);
    }
    result
}

fn capture_into(command: &mut Command, file: &mut File) -> Result<ExitStatus> {
    let mut child = command
        .spawn()
        .with_context(|| format!("could not start {:?}", command.get_program()))?;

    let mut captured = Vec::new();
    child
        .stdout
        .take()
        .ok_or_else(|| anyhow!("the child's standard output was not piped"))?
        .read_to_end(&mut captured)
        .context("failed to read the child's standard output")?;

    file.write_all(&captured)
        .context("failed to write the captured output")?;

    let status = child.wait().context("failed to wait for the child")?;
    Ok(status)
}
