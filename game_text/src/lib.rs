//! # Game Text
//!
//! Translatable text as it appears in game content: a source string with an
//! optional translation context and plural form.
//!
//! This crate only stores text and knows how to present it. It has no
//! knowledge of where the text is used or how it is grouped.

pub mod translation;

pub use translation::*;
