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

//! # Gantry Warehouse
//!
//! The orchestration layer of the Gantry warehouse engine: one `Warehouse`
//! owns the room topology, one shelf per room, and the warehouse-wide
//! product registry, and keeps the registry equal to the sum of per-room
//! counts by applying the deltas each shelf operation reports back.
//!
//! Core flow
//! - Load an instance (`loading::WarehouseLoader`) or assemble a
//!   `warehouse::Warehouse` from a `RoomTree` and shelves directly.
//! - Register products, then place, remove, and distribute stock.
//! - Interpret leftovers: a positive leftover or overflow means capacity
//!   ran out somewhere, which is a normal outcome, not an error.
//!
//! Design highlights
//! - Registry adjustment is centralized here: shelves report what actually
//!   happened, the warehouse applies the delta exactly once per operation
//!   (distribution adjusts once at the end of the whole walk).
//! - The distribution recursion walks the immutable topology while mutating
//!   shelves through a disjoint borrow, so no interior mutability is needed.
//! - All failures are explicit values (`error::WarehouseError`, booleans for
//!   registry edits); nothing panics on bad input except documented
//!   precondition violations.
//!
//! Module map
//! - `warehouse`: the orchestrator and its operation set.
//! - `distribute`: the overflow-splitting policy and recursive walk.
//! - `loading`: text-instance loader (room count, preorder tree, shelf
//!   dimensions).
//! - `error`: the error taxonomy shared by warehouse operations.

pub mod distribute;
pub mod error;
pub mod loading;
pub mod warehouse;
