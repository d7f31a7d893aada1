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

//! The binary room topology and its preorder wire codec.
//!
//! A warehouse's rooms form a binary tree; an empty subtree means "no room
//! here". The tree is built once from a preorder token stream and walked
//! read-only afterwards (the distribution algorithm recurses over it while
//! mutating shelves stored elsewhere).
//!
//! Wire format: depth-first preorder with the **right subtree serialized
//! before the left subtree**, each token a 1-based room id and `0`
//! terminating a null branch. A well-formed encoding of `n` rooms is exactly
//! `2n + 1` tokens: one per node plus one `0` per null branch. This exact
//! traversal order must be preserved for round-trip compatibility with
//! existing encoded topologies.

use crate::index::RoomIndex;

/// Errors produced while decoding or validating a room topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// The token stream ended before the tree was complete.
    UnexpectedEnd,
    /// The token stream continued past a complete tree.
    TrailingTokens {
        /// Number of tokens consumed by the complete tree.
        consumed: usize,
    },
    /// A room id outside `[1, num_rooms]` appeared in the tree.
    RoomOutOfRange {
        /// The offending 1-based room id.
        id: usize,
        /// The declared number of rooms.
        num_rooms: usize,
    },
    /// A room id appeared more than once.
    DuplicateRoom {
        /// The offending 1-based room id.
        id: usize,
    },
    /// The tree holds fewer rooms than declared.
    MissingRooms {
        /// The declared number of rooms.
        expected: usize,
        /// The number of rooms actually present.
        found: usize,
    },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => {
                write!(f, "Preorder encoding ended before the room tree was complete")
            }
            Self::TrailingTokens { consumed } => write!(
                f,
                "Preorder encoding continues past a complete room tree ({} tokens consumed)",
                consumed
            ),
            Self::RoomOutOfRange { id, num_rooms } => write!(
                f,
                "Room id {} is outside the declared range [1, {}]",
                id, num_rooms
            ),
            Self::DuplicateRoom { id } => write!(f, "Room id {} appears more than once", id),
            Self::MissingRooms { expected, found } => write!(
                f,
                "Room tree holds {} rooms but {} were declared",
                found, expected
            ),
        }
    }
}

impl std::error::Error for TopologyError {}

/// A binary tree of rooms. `Empty` marks the absence of a subtree.
///
/// Children are stored right-before-left to mirror the wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomTree {
    /// No room here; accepts nothing during distribution.
    Empty,
    /// A room and its two (possibly empty) subtrees.
    Node {
        /// The room at this node.
        room: RoomIndex,
        /// The right subtree (serialized first).
        right: Box<RoomTree>,
        /// The left subtree.
        left: Box<RoomTree>,
    },
}

impl RoomTree {
    /// Decodes a tree from its preorder token stream.
    ///
    /// The whole slice must encode exactly one tree; a truncated or
    /// over-long stream is an error. Ids are taken at face value here;
    /// range and uniqueness are the business of [`RoomTree::validate`].
    pub fn from_preorder(tokens: &[usize]) -> Result<Self, TopologyError> {
        let mut cursor = 0;
        let tree = Self::decode(tokens, &mut cursor)?;
        if cursor != tokens.len() {
            return Err(TopologyError::TrailingTokens { consumed: cursor });
        }
        Ok(tree)
    }

    fn decode(tokens: &[usize], cursor: &mut usize) -> Result<Self, TopologyError> {
        let id = *tokens.get(*cursor).ok_or(TopologyError::UnexpectedEnd)?;
        *cursor += 1;

        let Some(room) = RoomIndex::from_one_based(id) else {
            return Ok(Self::Empty);
        };
        let right = Box::new(Self::decode(tokens, cursor)?);
        let left = Box::new(Self::decode(tokens, cursor)?);
        Ok(Self::Node { room, right, left })
    }

    /// Serializes the tree back into its preorder encoding.
    pub fn preorder_encoding(&self) -> Vec<usize> {
        let mut tokens = Vec::new();
        self.encode(&mut tokens);
        tokens
    }

    fn encode(&self, tokens: &mut Vec<usize>) {
        match self {
            Self::Empty => tokens.push(0),
            Self::Node { room, right, left } => {
                tokens.push(room.one_based());
                right.encode(tokens);
                left.encode(tokens);
            }
        }
    }

    /// Checks that every room id in `[1, num_rooms]` appears exactly once.
    pub fn validate(&self, num_rooms: usize) -> Result<(), TopologyError> {
        let mut seen = vec![false; num_rooms];
        let mut found = 0;
        self.check(num_rooms, &mut seen, &mut found)?;
        if found != num_rooms {
            return Err(TopologyError::MissingRooms {
                expected: num_rooms,
                found,
            });
        }
        Ok(())
    }

    fn check(
        &self,
        num_rooms: usize,
        seen: &mut [bool],
        found: &mut usize,
    ) -> Result<(), TopologyError> {
        let Self::Node { room, right, left } = self else {
            return Ok(());
        };

        let index = room.get();
        if index >= num_rooms {
            return Err(TopologyError::RoomOutOfRange {
                id: room.one_based(),
                num_rooms,
            });
        }
        if seen[index] {
            return Err(TopologyError::DuplicateRoom {
                id: room.one_based(),
            });
        }
        seen[index] = true;
        *found += 1;

        right.check(num_rooms, seen, found)?;
        left.check(num_rooms, seen, found)
    }

    /// Returns the number of rooms in the tree.
    pub fn room_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node { right, left, .. } => 1 + right.room_count() + left.room_count(),
        }
    }

    /// Checks whether the tree holds no rooms at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: usize, right: RoomTree, left: RoomTree) -> RoomTree {
        RoomTree::Node {
            room: RoomIndex::new(id - 1),
            right: Box::new(right),
            left: Box::new(left),
        }
    }

    fn leaf(id: usize) -> RoomTree {
        node(id, RoomTree::Empty, RoomTree::Empty)
    }

    #[test]
    fn test_decode_right_before_left() {
        // Root 1, right child 2, left child 3.
        let tree = RoomTree::from_preorder(&[1, 2, 0, 0, 3, 0, 0]).unwrap();
        assert_eq!(tree, node(1, leaf(2), leaf(3)));
        assert_eq!(tree.room_count(), 3);
        tree.validate(3).unwrap();
    }

    #[test]
    fn test_encoding_round_trips() {
        let encoded = [2, 0, 1, 4, 0, 0, 3, 0, 0];
        let tree = RoomTree::from_preorder(&encoded).unwrap();
        assert_eq!(tree.preorder_encoding(), encoded);
    }

    #[test]
    fn test_single_zero_is_the_empty_tree() {
        let tree = RoomTree::from_preorder(&[0]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.room_count(), 0);
    }

    #[test]
    fn test_truncated_stream_is_rejected() {
        assert_eq!(
            RoomTree::from_preorder(&[1, 2, 0, 0]),
            Err(TopologyError::UnexpectedEnd)
        );
        assert_eq!(RoomTree::from_preorder(&[]), Err(TopologyError::UnexpectedEnd));
    }

    #[test]
    fn test_trailing_tokens_are_rejected() {
        assert_eq!(
            RoomTree::from_preorder(&[0, 1]),
            Err(TopologyError::TrailingTokens { consumed: 1 })
        );
    }

    #[test]
    fn test_validate_catches_out_of_range_duplicates_and_missing() {
        let tree = RoomTree::from_preorder(&[1, 2, 0, 0, 3, 0, 0]).unwrap();
        assert_eq!(
            tree.validate(2),
            Err(TopologyError::RoomOutOfRange { id: 3, num_rooms: 2 })
        );
        assert_eq!(
            tree.validate(4),
            Err(TopologyError::MissingRooms {
                expected: 4,
                found: 3
            })
        );

        let duplicated = RoomTree::from_preorder(&[1, 2, 0, 0, 2, 0, 0]).unwrap();
        assert_eq!(
            duplicated.validate(3),
            Err(TopologyError::DuplicateRoom { id: 2 })
        );
    }
}
