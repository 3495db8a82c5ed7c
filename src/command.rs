use std::ffi::OsStr;
use std::process::Command;

/// Build the `Command` for an executable. The interpreter is a real binary on
/// every platform (no `.cmd` shims), so PATH resolution is left to the OS.
pub fn create_command<E: AsRef<OsStr>>(exe: E) -> Command {
    Command::new(exe.as_ref())
}
