use super::pyrun_home;
use crate::utils::help::read_json;
use anyhow::Result;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_SEARCH_PATH_VAR: &str = "PYTHONPATH";

#[derive(Debug, Default, Deserialize)]
pub struct Setting {
    /// interpreter used when neither `PYRUN_PYTHON` nor a `.pyrunrc` names one
    pub interpreter: Option<PathBuf>,

    /// environment variable the search path is written to
    pub search_path_var: Option<String>,
}

impl Setting {
    pub fn global<'a>() -> Result<&'a Setting> {
        static SETTING: OnceCell<Setting> = OnceCell::new();

        SETTING.get_or_try_init(|| {
            let path = pyrun_home()?.setting_path();
            match read_json::<Setting>(&path) {
                Ok(setting) => Ok(setting),
                Err(_) => Ok(Setting::default()),
            }
        })
    }

    pub fn get_interpreter(&self) -> Option<PathBuf> {
        self.interpreter.clone()
    }

    pub fn get_search_path_var(&self) -> String {
        self.search_path_var
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_SEARCH_PATH_VAR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let setting: Setting = serde_json::from_str("{}").unwrap();
        assert_eq!(setting.get_interpreter(), None);
        assert_eq!(setting.get_search_path_var(), "PYTHONPATH");
    }

    #[test]
    fn full_setting_is_read() {
        let setting: Setting = serde_json::from_str(
            r#"{ "interpreter": "/opt/python/bin/python3", "search_path_var": "MODULE_ROOTS" }"#,
        )
        .unwrap();
        assert_eq!(
            setting.get_interpreter(),
            Some(PathBuf::from("/opt/python/bin/python3"))
        );
        assert_eq!(setting.get_search_path_var(), "MODULE_ROOTS");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let setting: Setting =
            serde_json::from_str(r#"{ "mirror": "https://example.com" }"#).unwrap();
        assert_eq!(setting.get_interpreter(), None);
    }
}
