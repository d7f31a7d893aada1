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

//! The shelf engine: a room's fixed-capacity grid of product slots.
//!
//! A shelf keeps three views of its contents in lockstep:
//! - `slots`: the linear slot buffer, row-major with the top physical row
//!   first (see `gantry_core::math::grid` for the coordinate mapping).
//! - `occupancy`: a bitset mirroring which slots hold a product, so
//!   placement and removal scan in ascending index order without touching
//!   every cell.
//! - `counts`: per-product item counts, with an entry iff the count is
//!   positive.
//!
//! Invariants:
//! - `slots.len() == dims.capacity()`
//! - `occupancy.contains(i)` iff `!slots[i].is_empty()`
//! - `occupied == occupancy.count_ones(..) == counts.values().sum()`
//! - `occupied <= dims.capacity()`
//!
//! Every mutating operation restores all of the above before returning.

use crate::{product::ProductId, slot::Slot};
use fixedbitset::FixedBitSet;
use gantry_core::math::grid::GridDims;
use rustc_hash::FxHashMap;

/// A fixed-capacity grid of product slots with occupancy bookkeeping.
///
/// Quantities returned by [`Shelf::place`] and [`Shelf::remove`] are the
/// caller's responsibility to interpret: a positive leftover from placement
/// means the shelf is full, a positive shortfall from removal means the
/// shelf ran out of that product. Neither is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shelf {
    dims: GridDims,
    slots: Vec<Slot>,
    occupancy: FixedBitSet,
    counts: FxHashMap<ProductId, usize>,
    occupied: usize,
}

impl Shelf {
    /// Creates an empty shelf of `rows × columns` slots.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[inline]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_dims(GridDims::new(rows, columns))
    }

    /// Creates an empty shelf with the given dimensions.
    pub fn with_dims(dims: GridDims) -> Self {
        let capacity = dims.capacity();
        Self {
            dims,
            slots: vec![Slot::empty(); capacity],
            occupancy: FixedBitSet::with_capacity(capacity),
            counts: FxHashMap::default(),
            occupied: 0,
        }
    }

    /// Returns the shelf dimensions.
    #[inline(always)]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        self.dims.rows()
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub const fn columns(&self) -> usize {
        self.dims.columns()
    }

    /// Returns the total number of slots.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.dims.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline(always)]
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the number of empty slots.
    #[inline(always)]
    pub const fn free(&self) -> usize {
        self.capacity() - self.occupied
    }

    /// Checks whether every slot is occupied.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.occupied == self.capacity()
    }

    /// Returns how many items of `product` this shelf holds.
    #[inline]
    pub fn count_of(&self, product: &ProductId) -> usize {
        self.counts.get(product).copied().unwrap_or(0)
    }

    /// Iterates over the products held by this shelf and their counts, in
    /// arbitrary order. Only products with a positive count appear.
    #[inline]
    pub fn products(&self) -> impl Iterator<Item = (&ProductId, usize)> {
        self.counts.iter().map(|(product, &count)| (product, count))
    }

    /// Places up to `quantity` items of `product` into the first empty slots
    /// in ascending index order.
    ///
    /// Returns the number of items that did not fit. A return of `quantity`
    /// means nothing was placed (shelf full or `quantity == 0`).
    pub fn place(&mut self, product: &ProductId, quantity: usize) -> usize {
        let add = quantity.min(self.free());
        if add == 0 {
            return quantity;
        }

        let targets: Vec<usize> = self.occupancy.zeroes().take(add).collect();
        debug_assert_eq!(targets.len(), add);
        for &index in &targets {
            self.slots[index] = Slot::holding(product.clone());
            self.occupancy.insert(index);
        }

        self.occupied += add;
        *self.counts.entry(product.clone()).or_insert(0) += add;
        quantity - add
    }

    /// Removes up to `quantity` items of `product`, clearing the lowest-index
    /// slots holding it first.
    ///
    /// Returns the number of items that could not be removed because the
    /// shelf did not hold enough of `product`.
    pub fn remove(&mut self, product: &ProductId, quantity: usize) -> usize {
        let Some(&held) = self.counts.get(product) else {
            return quantity;
        };
        let take = quantity.min(held);
        if take == 0 {
            return quantity;
        }

        let targets: Vec<usize> = self
            .occupancy
            .ones()
            .filter(|&index| self.slots[index].holds(product))
            .take(take)
            .collect();
        debug_assert_eq!(targets.len(), take);
        for &index in &targets {
            self.slots[index].clear();
            self.occupancy.remove(index);
        }

        self.occupied -= take;
        if take == held {
            self.counts.remove(product);
        } else if let Some(count) = self.counts.get_mut(product) {
            *count -= take;
        }
        quantity - take
    }

    /// Moves all occupied slots to the front of the buffer, preserving their
    /// relative order, and empties the rest. Idempotent; no-op when full.
    pub fn compact(&mut self) {
        if self.is_full() {
            return;
        }

        // Swap-into-place: advance a write cursor over the prefix, swapping
        // each occupied slot down; stop once all occupied slots have moved.
        let mut write = 0;
        for read in 0..self.slots.len() {
            if write == self.occupied {
                break;
            }
            if !self.slots[read].is_empty() {
                self.slots.swap(write, read);
                write += 1;
            }
        }

        self.reset_occupancy_prefix();
    }

    /// Compacts and alphabetizes the shelf: after this, the occupied prefix
    /// is sorted ascending by product id and the suffix is entirely empty.
    ///
    /// A single sort does both because [`Slot`]'s ordering places empties
    /// after every product.
    pub fn reorganize(&mut self) {
        self.slots.sort();
        self.reset_occupancy_prefix();
    }

    /// Resizes the shelf to `rows × columns`, compacting its contents into
    /// the new buffer (occupied slots first, pre-resize order preserved).
    ///
    /// Returns `false`, leaving the shelf untouched, when the new capacity
    /// cannot hold the currently occupied slots.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn resize(&mut self, rows: usize, columns: usize) -> bool {
        let dims = GridDims::new(rows, columns);
        if dims.capacity() < self.occupied {
            return false;
        }

        let mut slots = Vec::with_capacity(dims.capacity());
        for slot in &mut self.slots {
            if !slot.is_empty() {
                slots.push(std::mem::take(slot));
            }
        }
        debug_assert_eq!(slots.len(), self.occupied);
        slots.resize_with(dims.capacity(), Slot::empty);

        self.slots = slots;
        self.dims = dims;
        self.reset_occupancy_prefix();
        true
    }

    /// Returns the slot at the 1-based physical coordinate `(f, c)`, row
    /// `f` counted from the bottom, column `c` from the left.
    ///
    /// # Panics
    ///
    /// Panics if `(f, c)` is outside the shelf.
    #[inline]
    pub fn position(&self, f: usize, c: usize) -> &Slot {
        &self.slots[self.dims.flatten(f, c)]
    }

    /// Checked variant of [`Shelf::position`]; returns `None` when `(f, c)`
    /// is outside the shelf.
    #[inline]
    pub fn try_position(&self, f: usize, c: usize) -> Option<&Slot> {
        self.dims.try_flatten(f, c).map(|index| &self.slots[index])
    }

    /// Returns the slot buffer in storage order (top physical row first).
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Writes the shelf to `out` the way it physically stands: top row
    /// first, cells left-to-right separated by single spaces, one row per
    /// line, empty slots rendered as `NULL`.
    pub fn write<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)
    }

    /// Rebuilds the occupancy bitset for a compacted buffer: the first
    /// `occupied` bits set, the rest clear.
    fn reset_occupancy_prefix(&mut self) {
        let capacity = self.capacity();
        if self.occupancy.len() != capacity {
            self.occupancy = FixedBitSet::with_capacity(capacity);
        } else {
            self.occupancy.clear();
        }
        self.occupancy.insert_range(..self.occupied);
    }

    /// Asserts every bookkeeping invariant. Test-only.
    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.slots.len(), self.capacity());
        assert_eq!(self.occupancy.len(), self.capacity());
        assert!(self.occupied <= self.capacity());
        assert_eq!(self.occupancy.count_ones(..), self.occupied);
        for index in 0..self.slots.len() {
            assert_eq!(self.occupancy.contains(index), !self.slots[index].is_empty());
        }
        let total: usize = self.counts.values().sum();
        assert_eq!(total, self.occupied);
        for (product, &count) in &self.counts {
            assert!(count > 0);
            let held = self.slots.iter().filter(|s| s.holds(product)).count();
            assert_eq!(held, count);
        }
    }
}

impl std::fmt::Display for Shelf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            let start = row * self.columns();
            write!(f, "{}", self.slots[start])?;
            for column in 1..self.columns() {
                write!(f, " {}", self.slots[start + column])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
