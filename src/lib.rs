//! # cix - Unicode Character Search
//!
//! cix indexes every assigned Unicode code point by the words in its
//! official character name, then answers multi-word queries by intersecting
//! per-word posting bitmaps. "eight digit" finds the one character whose
//! name contains both words: DIGIT EIGHT.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tokenize`] - Word tokenization shared by names and queries
//! - [`index`] - Index construction and search
//! - [`server`] - HTTP front end (JSON results / HTML form) and clock demo
//! - [`output`] - Terminal result formatting
//!
//! ## Quick Start
//!
//! ```ignore
//! use cix::index::CharIndex;
//!
//! // Build once (expensive), search many times (cheap).
//! let index = CharIndex::build(32, 128)?;
//!
//! assert_eq!(index.search("eight digit"), vec!['8']);
//! for hit in index.search_hits("capital letter a") {
//!     println!("{}\tU+{:04X}\t{}", hit.ch, hit.ch as u32, hit.name);
//! }
//! ```
//!
//! Posting sets are roaring bitmaps of code points, so multi-word AND
//! queries are bitmap intersections and results come out sorted by code
//! point with no extra sort. The built index is immutable; share it behind
//! an `Arc` and search from as many threads as you like.

pub mod index;
pub mod output;
pub mod server;
pub mod tokenize;
