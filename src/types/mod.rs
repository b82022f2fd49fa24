// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types shared across the library.
//!
//! # Types
//!
//! - [`GroupAddress`] - 16-bit KNX group address
//! - [`RgbColor`] - RGB color (0-255 per channel)
//! - [`RgbwColor`] - RGB color with an additional white channel

mod address;
mod color;

pub use address::GroupAddress;
pub use color::{RgbColor, RgbwColor};
