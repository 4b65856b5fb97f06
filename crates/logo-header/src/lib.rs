/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! C header emitter for decoded BMP logos
//!
//! Two flavours of header are produced
//!
//! - A single logo, either macros only ([`LogoEncoder::encode_info`]) or
//!   macros with the palette and bitmap arrays ([`LogoEncoder::encode_data`])
//! - A charge logo, several same sized bitmaps sharing one palette
//!   stored in a two dimensional array ([`ChargeLogoEncoder`])
//!
//! Every array is written as hex literals, eight per line.
pub use charge::ChargeLogoEncoder;
pub use encoder::LogoEncoder;
pub use errors::HeaderErrors;
pub use format::{CType, Layout, VALUES_PER_LINE};

mod charge;
mod encoder;
mod errors;
mod format;
