use std::process::ExitStatus;

/// Exit code reserved for failures of the runner itself (unusable output
/// target, interpreter that cannot be started). The pass-through path can
/// only produce it if the child itself exits 125.
pub const INTERNAL_ERROR_CODE: i32 = 125;

pub enum Error {
    Message(String),
    Code(i32),
}

pub trait IntoResult<T> {
    fn into_result(self) -> Result<T, Error>;
}

impl IntoResult<()> for anyhow::Result<ExitStatus> {
    fn into_result(self) -> Result<(), Error> {
        match self {
            Ok(status) => {
                if status.success() {
                    Ok(())
                } else {
                    let code = status.code().unwrap_or_else(|| fallback_code(&status));
                    Err(Error::Code(code))
                }
            }
            Err(err) => Err(Error::Message(format!("{err:#}"))),
        }
    }
}

/// A child killed by a signal carries no exit code of its own.
#[cfg(unix)]
fn fallback_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map(|signal| 128 + signal).unwrap_or(1)
}

#[cfg(windows)]
fn fallback_code(_status: &ExitStatus) -> i32 {
    1
}
