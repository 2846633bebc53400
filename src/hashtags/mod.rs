//! Hashtag Extraction Module
//!
//! Pure text processing that turns video metadata into canonical hashtags.
//!
//! ## Canonical Form
//! A canonical hashtag is lowercase, starts with `#`, carries no surrounding
//! whitespace, is between 2 and 40 characters long (the `#` included) and is
//! not one of the low-signal tags in [`extractor::BLOCKLIST`].
//!
//! ## Submodules
//! - **`extractor`**: Pulls hashtags out of free text and explicit tag lists and
//!   normalizes them into canonical form.
//! - **`tokenizer`**: Splits a search query into words for the synthetic fallback
//!   result used when no video yields a hashtag.

pub mod extractor;
pub mod tokenizer;
