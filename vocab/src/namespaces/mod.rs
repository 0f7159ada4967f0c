//! Vocabulary namespace modules.
//!
//! Each sub-module encodes one namespace as Rust static data. Modules are
//! listed in assembly order; see [`crate::Vocabulary::full`].

pub mod activitystreams;
pub mod keywords;
pub mod toot;
