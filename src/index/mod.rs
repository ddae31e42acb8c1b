//! Inverted index over official Unicode character names.
//!
//! Each token extracted from a character's name maps to a [`RoaringBitmap`]
//! of code points whose name contains that word. Searches intersect one
//! bitmap per query word, so multi-word queries have AND semantics.

pub mod build;
pub mod stats;

use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::tokenize::tokenize;

/// Largest valid Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Default first code point to index. Skips the C0 control block, whose code
/// points are unnamed anyway.
pub const DEFAULT_START: u32 = 32;

/// Default end bound (exclusive): one past the last valid scalar value.
pub const DEFAULT_END: u32 = MAX_CODE_POINT + 1;

/// Immutable word-to-characters index over a code point range.
///
/// Built once with [`CharIndex::build`]; every method afterwards takes
/// `&self`, so a built index can be shared across threads (e.g. behind an
/// `Arc` in a request handler) without locking.
pub struct CharIndex {
    /// Token -> code points whose name contains that token.
    pub(crate) postings: FxHashMap<String, RoaringBitmap>,
    /// Number of named code points that were indexed.
    pub(crate) chars_indexed: u64,
    pub(crate) start: u32,
    pub(crate) end: u32,
}

/// One search result: a character paired with its official name.
///
/// Serializes as `{"char": "8", "name": "DIGIT EIGHT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "char")]
    pub ch: char,
    pub name: String,
}

impl CharIndex {
    /// Search for characters whose name contains every query word.
    ///
    /// Results are sorted by code point ascending (roaring bitmaps iterate
    /// in ascending order). Unknown tokens and empty queries yield an empty
    /// vec; this method never fails.
    pub fn search(&self, query: &str) -> Vec<char> {
        let words = tokenize(query);
        let Some((first, rest)) = words.split_first() else {
            return Vec::new();
        };
        let Some(mut result) = self.postings.get(first).cloned() else {
            return Vec::new();
        };
        for word in rest {
            match self.postings.get(word) {
                Some(bitmap) => result &= bitmap,
                None => return Vec::new(),
            }
            if result.is_empty() {
                break;
            }
        }
        result.iter().filter_map(char::from_u32).collect()
    }

    /// Like [`search`](Self::search), but pairs each character with its
    /// official name, ready for serialization.
    pub fn search_hits(&self, query: &str) -> Vec<Hit> {
        self.search(query)
            .into_iter()
            .filter_map(|ch| char_name(ch).map(|name| Hit { ch, name }))
            .collect()
    }

    /// Posting bitmap for a token, if the token occurs in any indexed name.
    pub fn get(&self, token: &str) -> Option<&RoaringBitmap> {
        self.postings.get(token)
    }

    /// Number of distinct tokens in the index.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of named code points that were indexed.
    pub fn char_count(&self) -> u64 {
        self.chars_indexed
    }

    /// The half-open `[start, end)` code point range this index covers.
    pub fn range(&self) -> (u32, u32) {
        (self.start, self.end)
    }

    /// Iterate over all `(token, postings)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoaringBitmap)> {
        self.postings.iter().map(|(t, b)| (t.as_str(), b))
    }
}

/// Official Unicode name of a character, if it has one.
pub fn char_name(ch: char) -> Option<String> {
    unicode_names2::name(ch).map(|name| name.to_string())
}
