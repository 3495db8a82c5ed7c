use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::run::Invocation;

/// Sentinel output target meaning "do not capture", so generated build rules
/// can always emit the `--output` flag.
const NO_CAPTURE: &str = "none";

#[derive(Parser)]
#[command(name=env!("CARGO_PKG_NAME"), version=env!("CARGO_PKG_VERSION"), about="Run a Python tool with a scoped module search path", after_help="The child's exit code is passed through unchanged. Exit code 125 is\nreserved for failures of pyrun itself (unusable output file, interpreter\nthat cannot be started).", long_about = None)]
#[command(help_template = "\
{before-help}{name} ({version})
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
")]
pub struct Cli {
    /// The value written to the child's module search path variable
    #[arg(value_name = "SEARCH_PATH")]
    pub search_path: OsString,

    /// Capture the child's standard output into this file ("none" leaves it on stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// The script to run, followed by its arguments, handed to the interpreter verbatim
    #[arg(value_name = "SCRIPT", required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<OsString>,
}

impl Cli {
    pub fn into_invocation(self) -> Invocation {
        let output = self
            .output
            .filter(|target| target.as_os_str() != NO_CAPTURE);

        Invocation {
            search_path: self.search_path,
            output,
            command: self.command,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_capture_form() {
        let cli = Cli::try_parse_from(["pyrun", "/gen/py", "-o", "out.h", "gen.py", "--api", "gl"])
            .unwrap();
        let invocation = cli.into_invocation();

        assert_eq!(invocation.search_path, OsString::from("/gen/py"));
        assert_eq!(invocation.output, Some(PathBuf::from("out.h")));
        assert_eq!(
            invocation.command,
            vec![
                OsString::from("gen.py"),
                OsString::from("--api"),
                OsString::from("gl")
            ]
        );
    }

    #[test]
    fn parses_the_exit_code_only_form() {
        let cli = Cli::try_parse_from(["pyrun", "/gen/py", "check.py"]).unwrap();
        let invocation = cli.into_invocation();

        assert_eq!(invocation.output, None);
        assert_eq!(invocation.command, vec![OsString::from("check.py")]);
    }

    #[test]
    fn none_target_means_no_capture() {
        let cli = Cli::try_parse_from(["pyrun", "/gen/py", "-o", "none", "check.py"]).unwrap();
        assert_eq!(cli.into_invocation().output, None);
    }

    #[test]
    fn hyphen_tokens_after_the_script_belong_to_the_script() {
        let cli = Cli::try_parse_from(["pyrun", "", "gen.py", "-o", "--output", "-x"]).unwrap();
        let invocation = cli.into_invocation();

        assert_eq!(invocation.output, None);
        assert_eq!(
            invocation.command,
            vec![
                OsString::from("gen.py"),
                OsString::from("-o"),
                OsString::from("--output"),
                OsString::from("-x")
            ]
        );
    }

    #[test]
    fn the_first_command_token_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["pyrun", "/gen/py", "-c", "print()"]).unwrap();
        assert_eq!(
            cli.into_invocation().command,
            vec![OsString::from("-c"), OsString::from("print()")]
        );
    }

    #[test]
    fn an_empty_search_path_is_accepted() {
        let cli = Cli::try_parse_from(["pyrun", "", "gen.py"]).unwrap();
        assert_eq!(cli.into_invocation().search_path, OsString::from(""));
    }

    #[test]
    fn a_command_is_required() {
        assert!(Cli::try_parse_from(["pyrun", "/gen/py"]).is_err());
    }
}
