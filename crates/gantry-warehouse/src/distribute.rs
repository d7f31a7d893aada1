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

//! The hierarchical distribution walk and its overflow-splitting policy.
//!
//! Distribution pours a quantity of one product into the room tree, top
//! down: each room absorbs as much as it can, and whatever does not fit is
//! split between its two subtrees and poured again. An absent subtree
//! absorbs nothing; its whole allotment becomes overflow.
//!
//! The split is deterministic. With the default policy the right subtree
//! receives `floor(n / 2)` and the left subtree the remaining
//! `ceil(n / 2)`, so an odd leftover always sends the extra unit left. The
//! direction is a fixed convention, not a load-bearing property; `SplitPolicy`
//! exists so deployments tied to the mirrored convention can flip it.

use gantry_model::{product::ProductId, shelf::Shelf, topology::RoomTree};

/// Which subtree receives the floored half of an odd leftover.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SplitPolicy {
    /// Right subtree gets `floor(n / 2)`, left gets `ceil(n / 2)`.
    #[default]
    RightFloor,
    /// Left subtree gets `floor(n / 2)`, right gets `ceil(n / 2)`.
    LeftFloor,
}

impl SplitPolicy {
    /// Splits a leftover quantity into `(right_share, left_share)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_warehouse::distribute::SplitPolicy;
    ///
    /// assert_eq!(SplitPolicy::RightFloor.split(5), (2, 3));
    /// assert_eq!(SplitPolicy::LeftFloor.split(5), (3, 2));
    /// assert_eq!(SplitPolicy::RightFloor.split(4), (2, 2));
    /// ```
    #[inline]
    pub const fn split(self, quantity: usize) -> (usize, usize) {
        let floored = quantity / 2;
        match self {
            Self::RightFloor => (floored, quantity - floored),
            Self::LeftFloor => (quantity - floored, floored),
        }
    }
}

/// Pours `quantity` items of `product` into the subtree rooted at `tree`,
/// returning the overflow that fit nowhere.
///
/// Registry bookkeeping is the caller's business
/// ([`crate::warehouse::Warehouse::distribute`] adjusts it once from the
/// total); this walk only touches shelves.
pub(crate) fn spread(
    tree: &RoomTree,
    rooms: &mut [Shelf],
    product: &ProductId,
    quantity: usize,
    policy: SplitPolicy,
) -> usize {
    let RoomTree::Node { room, right, left } = tree else {
        return quantity;
    };

    debug_assert!(
        room.get() < rooms.len(),
        "called `spread` on a topology naming room index {} but only {} rooms exist",
        room.get(),
        rooms.len()
    );

    let leftover = rooms[room.get()].place(product, quantity);
    if leftover == 0 {
        return 0;
    }

    let (to_right, to_left) = policy.split(leftover);
    spread(right, rooms, product, to_right, policy) + spread(left, rooms, product, to_left, policy)
}
