// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Gantry Core
//!
//! Foundational utilities and math primitives for the Gantry warehouse
//! engine. This crate consolidates the small reusable building blocks that
//! underpin the higher-level model and warehouse crates.
//!
//! ## Modules
//!
//! - `math`: validated 2-D grid dimensions with the linear flattening used by
//!   shelf storage (physical origin at the bottom-left, storage laid out
//!   top-down), including checked and panicking coordinate mappings.
//! - `utils`: phantom-tagged, strongly typed indices (`TypedIndex<T>`) to
//!   keep room indices and plain counters from mixing, with the 1-based
//!   external id ↔ 0-based internal index conversion at one place.
//!
//! ## Purpose
//!
//! These primitives keep the shelf engine and the distribution algorithm free
//! of accidental index-space bugs while compiling down to plain `usize`
//! arithmetic. Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
