/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line front end of bmp-logo
//!
//! The binary calls [`main`], tests and other front ends can call [`run`]
//! to get the rendered text without touching standard output.
use std::ffi::OsString;
use std::process::exit;

use log::error;

pub use crate::errors::LogoErrors;
pub use crate::workflow::Output;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod probe_files;
mod serde;
mod workflow;

/// Parse `args` (program name first) and render the requested header
///
/// Nothing is written, see [`Output::write`].
pub fn run<I, T>(args: I) -> Result<Output, LogoErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let options = cmd_args::create_cmd_args()
        .try_get_matches_from(args)
        .map_err(|e| LogoErrors::Argument(e.to_string()))?;

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    create_and_exec_workflow_from_cmd(&parsed_opts)
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches() {
        Ok(options) => options,
        // help and version go to stdout with status 0
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            exit(1);
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    let result = create_and_exec_workflow_from_cmd(&parsed_opts).and_then(Output::write);

    if let Err(reason) = result {
        error!("Could not complete workflow, reason {reason}");
        exit(1);
    }
}
