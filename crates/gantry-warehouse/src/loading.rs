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

//! Instance loader for warehouse topologies.
//!
//! This module turns whitespace-delimited text streams into a validated
//! `Warehouse`: the room count, the preorder tree encoding (right subtree
//! before left, `0` terminating null branches), and one `(rows, columns)`
//! pair per room in room-id order.
//!
//! The parser accepts any `BufRead`, file path, raw reader, or string
//! slice, which keeps benchmarks, tests, and tooling on the same code
//! path. Lines may contain comments introduced by `#`; they are stripped
//! before tokenization. Errors carry the offending token or index so
//! malformed instances point directly at their defect.

use crate::{distribute::SplitPolicy, warehouse::Warehouse};
use gantry_model::{
    shelf::Shelf,
    topology::{RoomTree, TopologyError},
};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum WarehouseLoadError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended unexpectedly (e.g., missing tokens).
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The declared room count was zero.
    InvalidRoomCount,
    /// A shelf was declared with a zero dimension.
    InvalidShelfDims {
        /// The 1-based id of the offending room.
        room: usize,
        /// The declared number of rows.
        rows: usize,
        /// The declared number of columns.
        columns: usize,
    },
    /// The room tree encoding was malformed or inconsistent.
    Topology(TopologyError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The string token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "usize").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for WarehouseLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidRoomCount => write!(f, "Room count must be a positive integer"),
            Self::InvalidShelfDims {
                room,
                rows,
                columns,
            } => write!(
                f,
                "Room {} declares a {}x{} shelf; both dimensions must be positive",
                room, rows, columns
            ),
            Self::Topology(e) => write!(f, "Topology error: {}", e),
        }
    }
}

impl std::error::Error for WarehouseLoadError {}

impl From<std::io::Error> for WarehouseLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for WarehouseLoadError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<TopologyError> for WarehouseLoadError {
    fn from(e: TopologyError) -> Self {
        Self::Topology(e)
    }
}

/// A configurable loader for warehouse instances.
///
/// The format this parser expects is as follows (whitespace-separated
/// tokens, `#` starting a comment):
///
/// ```raw
/// n                      // number of rooms
/// t_1 ... t_{2n+1}       // preorder room tree, right subtree first, 0 = null
/// f_1 c_1                // shelf dimensions of room 1
/// ...
/// f_n c_n                // shelf dimensions of room n
/// ```
///
/// # Configuration
/// * `split_policy`: the overflow-splitting convention the built warehouse
///   will distribute with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WarehouseLoader {
    split_policy: SplitPolicy,
}

impl WarehouseLoader {
    /// Creates a new `WarehouseLoader` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overflow-splitting convention of the built warehouse.
    #[inline]
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    /// Loads a warehouse from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Warehouse, WarehouseLoadError> {
        let mut sc = Scanner::new(rdr);

        let num_rooms: usize = sc.next()?;
        if num_rooms == 0 {
            return Err(WarehouseLoadError::InvalidRoomCount);
        }

        // A well-formed preorder encoding of n rooms is exactly 2n + 1
        // tokens: one id per node, one 0 per null branch.
        let mut tokens = Vec::with_capacity(2 * num_rooms + 1);
        for _ in 0..2 * num_rooms + 1 {
            tokens.push(sc.next::<usize>()?);
        }
        let topology = RoomTree::from_preorder(&tokens)?;

        let mut rooms = Vec::with_capacity(num_rooms);
        for room in 1..=num_rooms {
            let rows: usize = sc.next()?;
            let columns: usize = sc.next()?;
            if rows == 0 || columns == 0 {
                return Err(WarehouseLoadError::InvalidShelfDims {
                    room,
                    rows,
                    columns,
                });
            }
            rooms.push(Shelf::new(rows, columns));
        }

        // `Warehouse::new` re-walks the tree to enforce id range and
        // uniqueness against the declared room count.
        let warehouse = Warehouse::new(topology, rooms)?;
        Ok(warehouse.with_split_policy(self.split_policy))
    }

    /// Loads a warehouse from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Warehouse, WarehouseLoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a warehouse from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Warehouse, WarehouseLoadError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a warehouse from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Warehouse, WarehouseLoadError> {
        self.from_reader(s.as_bytes())
    }
}

/// A helper to read whitespace-delimited tokens from a generic reader,
/// stripping `#` comments.
struct Scanner<R> {
    rdr: R,
    line: String,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new `Scanner` wrapping the given reader.
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pending: VecDeque::new(),
        }
    }

    /// Reads the next token and parses it into `T`.
    fn next<T>(&mut self) -> Result<T, WarehouseLoadError>
    where
        T: FromStr,
    {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token.parse::<T>().map_err(|_| {
                    WarehouseLoadError::Parse(ParseTokenError {
                        token,
                        type_name: std::any::type_name::<T>(),
                    })
                });
            }

            self.line.clear();
            if self.rdr.read_line(&mut self.line)? == 0 {
                return Err(WarehouseLoadError::UnexpectedEof);
            }

            let content = self.line.split('#').next().unwrap_or("");
            self.pending
                .extend(content.split_whitespace().map(str::to_owned));
        }
    }
}
