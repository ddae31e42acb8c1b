//! Index construction.
//!
//! Building walks every code point in the requested range, looks up its
//! official name and files the code point under each word of that name.
//! The full default range is just over a million code points, so the range
//! is split into chunks that are processed in parallel and merged.

use anyhow::{Result, bail};
use rayon::prelude::*;
use roaring::RoaringBitmap;
use rustc_hash::FxHashMap;

use crate::index::{CharIndex, MAX_CODE_POINT};
use crate::tokenize::tokenize;

/// Code points per parallel work unit.
const CHUNK_SIZE: u32 = 0x4000;

/// Postings built from one chunk of the range.
struct Partial {
    postings: FxHashMap<String, RoaringBitmap>,
    chars_indexed: u64,
}

impl CharIndex {
    /// Build an index over the half-open code point range `[start, end)`.
    ///
    /// Unnamed code points (controls, unassigned, private use) and the
    /// surrogate gap are skipped; that is normal, not an error. An invalid
    /// range fails immediately so a half-built index can never be observed.
    pub fn build(start: u32, end: u32) -> Result<CharIndex> {
        if start >= end {
            bail!("invalid code point range: start {start:#x} is not below end {end:#x}");
        }
        if end > MAX_CODE_POINT + 1 {
            bail!(
                "invalid code point range: end {end:#x} exceeds U+{MAX_CODE_POINT:04X} + 1"
            );
        }

        let chunks: Vec<(u32, u32)> = (start..end)
            .step_by(CHUNK_SIZE as usize)
            .map(|lo| (lo, end.min(lo.saturating_add(CHUNK_SIZE))))
            .collect();

        let partials: Vec<Partial> = chunks
            .into_par_iter()
            .map(|(lo, hi)| build_partial(lo, hi))
            .collect();

        // Chunks cover disjoint ranges, so merging is a plain union.
        let mut postings: FxHashMap<String, RoaringBitmap> = FxHashMap::default();
        let mut chars_indexed = 0u64;
        for partial in partials {
            chars_indexed += partial.chars_indexed;
            for (token, bitmap) in partial.postings {
                *postings.entry(token).or_default() |= bitmap;
            }
        }

        Ok(CharIndex {
            postings,
            chars_indexed,
            start,
            end,
        })
    }
}

/// Index the named code points in `[lo, hi)`.
fn build_partial(lo: u32, hi: u32) -> Partial {
    let mut postings: FxHashMap<String, RoaringBitmap> = FxHashMap::default();
    let mut chars_indexed = 0u64;

    for code in lo..hi {
        // Surrogates are not chars and have no name.
        let Some(ch) = char::from_u32(code) else {
            continue;
        };
        let Some(name) = unicode_names2::name(ch) else {
            continue;
        };
        chars_indexed += 1;
        for word in tokenize(&name.to_string()) {
            postings.entry(word).or_default().insert(code);
        }
    }

    Partial {
        postings,
        chars_indexed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(CharIndex::build(100, 50).is_err());
    }

    #[test]
    fn test_rejects_empty_range() {
        assert!(CharIndex::build(65, 65).is_err());
    }

    #[test]
    fn test_rejects_out_of_bounds_end() {
        assert!(CharIndex::build(32, MAX_CODE_POINT + 2).is_err());
    }

    #[test]
    fn test_full_scalar_range_is_accepted() {
        // One past the last scalar value is the exclusive default bound.
        let index = CharIndex::build(MAX_CODE_POINT - 0x100, MAX_CODE_POINT + 1).unwrap();
        assert_eq!(index.range(), (MAX_CODE_POINT - 0x100, MAX_CODE_POINT + 1));
    }

    #[test]
    fn test_counts_named_code_points_only() {
        // 48..58 is exactly the ten ASCII digits, all named.
        let index = CharIndex::build(48, 58).unwrap();
        assert_eq!(index.char_count(), 10);
    }

    #[test]
    fn test_range_bounds_are_honored() {
        // '8' is U+0038 = 56; an end bound of 56 excludes it.
        let index = CharIndex::build(48, 56).unwrap();
        assert!(index.search("eight").is_empty());
        assert_eq!(index.search("seven"), vec!['7']);
        // And a start bound of 49 excludes '0'.
        let index = CharIndex::build(49, 58).unwrap();
        assert!(index.search("zero").is_empty());
    }

    #[test]
    fn test_chunked_build_matches_small_chunks() {
        // A range spanning several chunks merges into one coherent index.
        let wide = CharIndex::build(32, CHUNK_SIZE * 2 + 37).unwrap();
        let narrow = CharIndex::build(32, 128).unwrap();
        assert_eq!(
            wide.get("DIGIT").unwrap() & narrow.get("DIGIT").unwrap(),
            narrow.get("DIGIT").unwrap().clone()
        );
    }
}
