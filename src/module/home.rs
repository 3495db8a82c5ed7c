use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static PYRUN_HOME: OnceCell<PyrunHome> = OnceCell::new();

pub fn pyrun_home<'a>() -> Result<&'a PyrunHome> {
    PYRUN_HOME.get_or_try_init(|| {
        let home_dir = match std::env::var_os("PYRUN_HOME") {
            Some(home) => PathBuf::from(home),
            None => default_home_dir()?,
        };

        Ok(PyrunHome::new(home_dir))
    })
}

pub struct PyrunHome(PathBuf);

impl PyrunHome {
    pub fn new(home: PathBuf) -> Self {
        Self(home)
    }

    pub fn setting_path(&self) -> PathBuf {
        self.0.join("setting.json")
    }
}

fn default_home_dir() -> Result<PathBuf> {
    let mut home = dirs::home_dir().context("Could not determine home directory")?;
    home.push(".pyrun");
    Ok(home)
}
