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

use gantry_core::math::grid::GridDims;
use gantry_model::product::ProductId;

/// The error type for warehouse operations.
///
/// Every variant is non-fatal and leaves the warehouse unmutated. Capacity
/// exhaustion is deliberately *not* here: a positive leftover or overflow
/// is a normal return value the caller interprets.
#[derive(Debug)]
pub enum WarehouseError {
    /// The operation named a product the registry does not know.
    UnknownProduct(ProductId),
    /// The operation named a room id outside `[1, num_rooms]`.
    RoomOutOfRange {
        /// The offending 1-based room id.
        room: usize,
        /// The number of rooms in the warehouse.
        num_rooms: usize,
    },
    /// A coordinate lookup fell outside the shelf's current dimensions.
    CoordinatesOutOfRange {
        /// The requested 1-based row (from the bottom).
        f: usize,
        /// The requested 1-based column (from the left).
        c: usize,
        /// The shelf's dimensions at the time of the lookup.
        dims: GridDims,
    },
    /// An I/O error occurred while writing a shelf rendering.
    Io(std::io::Error),
}

impl std::fmt::Display for WarehouseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProduct(product) => {
                write!(f, "Product '{}' is not registered", product)
            }
            Self::RoomOutOfRange { room, num_rooms } => {
                write!(f, "Room id {} is outside [1, {}]", room, num_rooms)
            }
            Self::CoordinatesOutOfRange { f: row, c, dims } => write!(
                f,
                "Coordinates ({}, {}) are outside a {} shelf",
                row, c, dims
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for WarehouseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WarehouseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
