use std::process;

mod cli;
mod command;
mod common;
mod module;
mod run;
mod signal;
mod utils;

use common::{Error, IntoResult};
use run::execute;

fn main() {
    signal::setup_signal_handler();

    let result = execute().into_result();
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(Error::Code(code)) => {
            process::exit(code);
        }
        Err(Error::Message(msg)) => {
            eprintln!("pyrun: {}", msg);
            process::exit(common::INTERNAL_ERROR_CODE);
        }
    }
}
