// src/main.rs
use clap::{CommandFactory as _, Parser as _};
use docs_list::{Args, help_requested, missing_flag_value, run, setup_logging};
use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let raw_args: Vec<OsString> = env::args_os().collect();

    if help_requested(&raw_args) {
        let _ = Args::command().print_long_help();
        return ExitCode::SUCCESS;
    }

    if let Some(err) = missing_flag_value(&raw_args) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    let args = match Args::try_parse_from(&raw_args) {
        Ok(args) => args,
        Err(err) => {
            // Version requests are not failures; every usage error exits 1.
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    setup_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
