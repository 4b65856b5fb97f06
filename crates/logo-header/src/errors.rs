/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Error;

/// Errors occurring during encoding
pub enum HeaderErrors {
    Static(&'static str),
    IoErrors(io::Error)
}

impl From<io::Error> for HeaderErrors {
    fn from(err: Error) -> Self {
        HeaderErrors::IoErrors(err)
    }
}

impl Debug for HeaderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderErrors::Static(ref errors) => {
                writeln!(f, "{errors}")
            }
            HeaderErrors::IoErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for HeaderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderErrors::Static(errors) => write!(f, "{errors}"),
            HeaderErrors::IoErrors(err) => write!(f, "Could not write header: {err}")
        }
    }
}

impl std::error::Error for HeaderErrors {}
