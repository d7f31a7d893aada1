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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing indices from
//! different domains (e.g., rooms vs. shelf slots). `TypedIndex<T>` carries a
//! tag type `T: TypedIndexTag` that encodes intent at the type level while
//! compiling down to a transparent `usize`.
//!
//! The warehouse engine works with several index spaces at once (room
//! positions in the topology tree, linear slot positions inside a shelf),
//! and a raw `usize` invites accidental swaps between them. Tagged indices
//! make that a compile error with no runtime overhead.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct RoomTag;
//! impl TypedIndexTag for RoomTag { const NAME: &'static str = "RoomIndex"; }
//!
//! type RoomIndex = TypedIndex<RoomTag>;
//! let r = RoomIndex::new(2);
//! assert_eq!(r.get(), 2);
//! assert_eq!(format!("{}", r), "RoomIndex(2)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
///
/// This struct wraps a `usize` index and uses a phantom type parameter `T`
/// to prevent indices of different domains from being used interchangeably.
///
/// # Examples
///
/// ```rust
/// # use gantry_core::utils::index::{TypedIndex, TypedIndexTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct SlotTag;
///
/// impl TypedIndexTag for SlotTag {
///     const NAME: &'static str = "SlotIndex";
/// }
///
/// type SlotIndex = TypedIndex<SlotTag>;
///
/// let index = SlotIndex::new(5);
/// assert_eq!(index.get(), 5);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Converts a 1-based external identifier into a 0-based index.
    ///
    /// The warehouse's public interface numbers rooms from 1; internal
    /// storage is 0-based. Returns `None` for identifier 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gantry_core::utils::index::{TypedIndex, TypedIndexTag};
    /// #
    /// # #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// # struct RoomTag;
    /// # impl TypedIndexTag for RoomTag { const NAME: &'static str = "RoomIndex"; }
    /// # type RoomIndex = TypedIndex<RoomTag>;
    /// assert_eq!(RoomIndex::from_one_based(1), Some(RoomIndex::new(0)));
    /// assert_eq!(RoomIndex::from_one_based(0), None);
    /// ```
    #[inline]
    pub const fn from_one_based(id: usize) -> Option<Self> {
        match id.checked_sub(1) {
            Some(index) => Some(Self::new(index)),
            None => None,
        }
    }

    /// Returns the 1-based external identifier for this index.
    #[inline(always)]
    pub const fn one_based(&self) -> usize {
        self.index + 1
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

impl<T> std::ops::Add<usize> for TypedIndex<T> {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::new(self.index + rhs)
    }
}

impl<T> std::ops::Sub<usize> for TypedIndex<T> {
    type Output = Self;

    fn sub(self, rhs: usize) -> Self::Output {
        Self::new(self.index - rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Define a dummy tag for testing purposes
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIdx";
    }

    // Type alias for convenience inside tests
    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let idx = TestIndex::new(10);
        assert_eq!(idx.get(), 10);
    }

    #[test]
    fn test_conversions() {
        // From usize
        let idx: TestIndex = 42.into();
        assert_eq!(idx.get(), 42);

        // Into usize
        let val: usize = idx.into();
        assert_eq!(val, 42);
    }

    #[test]
    fn test_one_based_round_trip() {
        let idx = TestIndex::from_one_based(7).unwrap();
        assert_eq!(idx.get(), 6);
        assert_eq!(idx.one_based(), 7);

        // Identifier 0 marks a null branch in the wire format, never a room.
        assert_eq!(TestIndex::from_one_based(0), None);
    }

    #[test]
    fn test_debug_and_display() {
        let idx = TestIndex::new(7);
        // Uses the NAME const from the trait
        assert_eq!(format!("{}", idx), "TestIdx(7)");
        assert_eq!(format!("{:?}", idx), "TestIdx(7)");
    }

    #[test]
    fn test_arithmetic_ops() {
        let idx = TestIndex::new(10);
        assert_eq!((idx + 5).get(), 15);
        assert_eq!((idx - 5).get(), 5);
    }
}
