/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the bmp-logo crates
//!
//! This crate provides the pieces shared by the bitmap decoder, the
//! header emitter and the command line tool
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads and positional skips
//! - An endian normalizer for little endian header fields
//! - Bit depth information for the two supported bitmap depths
//! - Packed palette formats (5-6-5, 8-8-8 and 4-4-4)
//! - Decoder options
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
pub mod bit_depth;
pub mod bytestream;
pub mod endian;
pub mod options;
pub mod packing;
pub mod serde;
