/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! The reader is positional, header fields are picked off at fixed
//! offsets and everything in between is skipped, which is how the
//! bitmap decoder walks a file.
//!
//! Reads that cannot be satisfied return an error instead of
//! filling in zeroes, a short file is always reported to the caller.
pub use reader::{ByteIoError, ByteReader};
pub use traits::ByteSource;

mod reader;
mod traits;
