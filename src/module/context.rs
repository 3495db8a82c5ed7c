use super::Setting;
use anyhow::Result;
use cfg_if::cfg_if;
use fs_extra::file::read_to_string;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

cfg_if! {
    if #[cfg(windows)] {
        const DEFAULT_INTERPRETER: &str = "python";
    } else {
        const DEFAULT_INTERPRETER: &str = "python3";
    }
}

const RCFILE_NAME: &str = ".pyrunrc";
const INTERPRETER_ENV: &str = "PYRUN_PYTHON";

/// Everything about the environment the child runs in that is not part of
/// the invocation itself, resolved once per process.
pub struct Context {
    interpreter: PathBuf,
    search_path_var: String,
}

impl Context {
    pub fn global<'a>() -> Result<&'a Context> {
        static CONTEXT: OnceCell<Context> = OnceCell::new();

        CONTEXT.get_or_try_init(|| {
            let interpreter = resolve_interpreter()?;
            let search_path_var = Setting::global()?.get_search_path_var();
            Ok(Self {
                interpreter,
                search_path_var,
            })
        })
    }

    pub fn interpreter(&self) -> &Path {
        &self.interpreter
    }

    pub fn search_path_var(&self) -> &str {
        &self.search_path_var
    }
}

/// The interpreter comes from, in order: the `PYRUN_PYTHON` environment
/// variable, the nearest `.pyrunrc`, the user's `setting.json`, the platform
/// default.
fn resolve_interpreter() -> Result<PathBuf> {
    if let Some(exe) = std::env::var_os(INTERPRETER_ENV) {
        return Ok(PathBuf::from(exe));
    }

    if let Some(rcfile) = find_rcfile()? {
        let interpreter = read_to_string(&rcfile)?;
        let interpreter = interpreter.trim();
        if !interpreter.is_empty() {
            return Ok(PathBuf::from(interpreter));
        }
    }

    if let Some(interpreter) = Setting::global()?.get_interpreter() {
        return Ok(interpreter);
    }

    Ok(PathBuf::from(DEFAULT_INTERPRETER))
}

fn find_rcfile() -> Result<Option<PathBuf>> {
    Ok(find_rcfile_from(&std::env::current_dir()?))
}

fn find_rcfile_from(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|dir| dir.join(RCFILE_NAME))
        .find(|path| path.is_file())
}
