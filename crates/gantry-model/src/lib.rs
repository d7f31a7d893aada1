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

//! # Gantry Model
//!
//! **The Core Domain Model for the Gantry Warehouse Engine.**
//!
//! This crate defines the data structures a warehouse is made of: product
//! identifiers, shelf slots, the shelf engine itself, and the binary room
//! topology with its preorder wire codec. It sits between problem input
//! (instance loading) and orchestration (`gantry_warehouse`).
//!
//! ## Architecture
//!
//! * **`index`**: the strongly-typed `RoomIndex` used to address rooms.
//! * **`product`**: opaque product identifiers with lexicographic ordering.
//! * **`slot`**: one storage cell, either empty or holding a product. An
//!   empty slot is represented structurally, never by a sentinel identifier,
//!   so the empty string remains a legal product id.
//! * **`shelf`**: a fixed-capacity grid of slots with occupancy and
//!   per-product bookkeeping kept consistent across placement, removal,
//!   compaction, reorganization, and resizing.
//! * **`topology`**: the binary room tree, built once from its preorder
//!   encoding (right subtree before left, `0` terminating null branches).
//!
//! ## Design Philosophy
//!
//! 1.  **Bookkeeping is authoritative**: the shelf maintains an occupancy
//!     bitset and a per-product count map alongside the slot buffer; every
//!     mutation keeps the three views in lockstep so queries never rescan.
//! 2.  **Fail-fast**: constructors and coordinate mappings validate eagerly;
//!     checked accessors exist wherever a caller cannot guarantee bounds.
//! 3.  **Build once, walk read-only**: the topology is immutable after
//!     construction, which keeps the distribution recursion borrow-friendly.

pub mod index;
pub mod product;
pub mod shelf;
pub mod slot;
pub mod topology;
