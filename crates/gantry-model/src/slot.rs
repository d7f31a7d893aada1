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

use crate::product::ProductId;

/// The token an empty slot renders as.
pub const EMPTY_TOKEN: &str = "NULL";

/// One storage cell of a shelf: either empty or holding a product.
///
/// Emptiness is structural (`Option` underneath) rather than a sentinel
/// identifier. Thanks to niche optimization the slot is still a single
/// machine word.
///
/// The ordering treats an empty slot as strictly greater than any occupied
/// slot, and occupied slots order by their product id. Sorting a slot buffer
/// therefore compacts and alphabetizes it in a single pass, which is exactly
/// what shelf reorganization does.
///
/// # Examples
///
/// ```rust
/// use gantry_model::{product::ProductId, slot::Slot};
///
/// let full = Slot::holding(ProductId::from("crate"));
/// let empty = Slot::empty();
/// assert!(full < empty);
/// assert_eq!(format!("{}", empty), "NULL");
/// assert_eq!(format!("{}", full), "crate");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Slot(Option<ProductId>);

impl Slot {
    /// Creates an empty slot.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a slot holding the given product.
    #[inline]
    pub const fn holding(product: ProductId) -> Self {
        Self(Some(product))
    }

    /// Checks whether the slot is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the product held by this slot, if any.
    #[inline]
    pub const fn product(&self) -> Option<&ProductId> {
        self.0.as_ref()
    }

    /// Checks whether the slot holds the given product.
    #[inline]
    pub fn holds(&self, product: &ProductId) -> bool {
        self.0.as_ref() == Some(product)
    }

    /// Empties the slot, returning the product it held.
    #[inline]
    pub fn clear(&mut self) -> Option<ProductId> {
        self.0.take()
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        match (&self.0, &other.0) {
            (None, None) => Ordering::Equal,
            // Empties migrate past every product.
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Slot {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<ProductId> for Slot {
    #[inline]
    fn from(product: ProductId) -> Self {
        Self::holding(product)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(product) => product.fmt(f),
            None => f.write_str(EMPTY_TOKEN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str) -> Slot {
        Slot::holding(ProductId::from(id))
    }

    #[test]
    fn test_empty_sorts_after_any_product() {
        let mut slots = vec![Slot::empty(), slot("b"), Slot::empty(), slot("a")];
        slots.sort();
        assert_eq!(slots, vec![slot("a"), slot("b"), Slot::empty(), Slot::empty()]);
    }

    #[test]
    fn test_clear_returns_the_product() {
        let mut s = slot("crate");
        assert!(!s.is_empty());
        assert_eq!(s.clear(), Some(ProductId::from("crate")));
        assert!(s.is_empty());
        assert_eq!(s.clear(), None);
    }

    #[test]
    fn test_holds() {
        let s = slot("crate");
        assert!(s.holds(&ProductId::from("crate")));
        assert!(!s.holds(&ProductId::from("pallet")));
        assert!(!Slot::empty().holds(&ProductId::from("crate")));
    }

    #[test]
    fn test_empty_string_product_is_not_an_empty_slot() {
        // The sentinel-free representation keeps "" distinct from emptiness.
        let s = slot("");
        assert!(!s.is_empty());
        assert_eq!(format!("{}", s), "");
        assert_eq!(format!("{}", Slot::empty()), "NULL");
    }
}
