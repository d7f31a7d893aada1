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

/// An opaque product identifier.
///
/// Products are compared, ordered, and hashed by their textual identifier;
/// reorganization sorts shelf contents by this ordering. Any string is a
/// legal identifier; emptiness of a slot is represented by the slot itself,
/// not by a reserved id.
///
/// # Examples
///
/// ```rust
/// use gantry_model::product::ProductId;
///
/// let a = ProductId::from("bolt-m4");
/// let b = ProductId::from("washer");
/// assert!(a < b);
/// assert_eq!(a.as_str(), "bolt-m4");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProductId(Box<str>);

impl ProductId {
    /// Creates a product identifier from anything string-like.
    #[inline]
    pub fn new(id: impl Into<Box<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(Box::from(id))
    }
}

impl From<String> for ProductId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id.into_boxed_str())
    }
}

impl AsRef<str> for ProductId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for ProductId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut ids = vec![
            ProductId::from("pallet"),
            ProductId::from("anchor"),
            ProductId::from("crate"),
        ];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(ProductId::as_str).collect();
        assert_eq!(names, ["anchor", "crate", "pallet"]);
    }

    #[test]
    fn test_borrow_allows_str_lookups() {
        let mut counts: BTreeMap<ProductId, usize> = BTreeMap::new();
        counts.insert(ProductId::from("crate"), 3);
        assert_eq!(counts.get("crate"), Some(&3));
        assert_eq!(counts.get("pallet"), None);
    }

    #[test]
    fn test_empty_string_is_a_legal_id() {
        let id = ProductId::from("");
        assert_eq!(id.as_str(), "");
        assert_eq!(format!("{}", id), "");
    }
}
