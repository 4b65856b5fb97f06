/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use logo_bmp::BmpDecoderErrors;
use logo_header::HeaderErrors;

/// Anything that stops a run
///
/// Every variant ends the process with exit status 1.
pub enum LogoErrors {
    /// Bad command line, or not enough files for a charge logo
    Argument(String),
    /// The file does not start with the bitmap signature
    NotABitmap(PathBuf),
    /// A charge logo file whose geometry differs from the first file,
    /// only raised in strict mode
    GeometryMismatch(PathBuf),
    Decode(PathBuf, BmpDecoderErrors),
    Header(HeaderErrors),
    Io(PathBuf, io::Error)
}

impl LogoErrors {
    /// Attach the file being decoded to a decoder error
    pub(crate) fn decoding(path: &Path) -> impl FnOnce(BmpDecoderErrors) -> LogoErrors + '_ {
        move |err| match err {
            BmpDecoderErrors::InvalidMagicBytes => LogoErrors::NotABitmap(path.to_path_buf()),
            err => LogoErrors::Decode(path.to_path_buf(), err)
        }
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> LogoErrors + '_ {
        move |err| LogoErrors::Io(path.to_path_buf(), err)
    }
}

impl From<HeaderErrors> for LogoErrors {
    fn from(err: HeaderErrors) -> Self {
        LogoErrors::Header(err)
    }
}

impl Display for LogoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoErrors::Argument(reason) => write!(f, "{reason}"),
            LogoErrors::NotABitmap(path) => write!(f, "{} is not a bitmap file.", path.display()),
            LogoErrors::GeometryMismatch(path) => write!(
                f,
                "{} does not have the size, depth and colors of the first file",
                path.display()
            ),
            LogoErrors::Decode(path, err) => write!(f, "{}: {err}", path.display()),
            LogoErrors::Header(err) => write!(f, "{err}"),
            LogoErrors::Io(path, err) => write!(f, "{}: {err}", path.display())
        }
    }
}

impl Debug for LogoErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoErrors::Decode(path, err) => write!(f, "Decode({path:?}, {err:?})"),
            LogoErrors::Header(err) => write!(f, "Header({err:?})"),
            _ => write!(f, "{self}")
        }
    }
}

impl std::error::Error for LogoErrors {}
