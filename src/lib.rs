// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorBuffer)
    clippy::module_name_repetitions
)]

//! # Rewrap
//!
//! Reflow the comment or text paragraph under the cursor to a fixed width.
//!
//! A paragraph is the run of lines around the cursor that share the same
//! prefix (comment markers and indentation drawn from `#`, `/`, `*`, space
//! and tab) and have text after it. Rewrapping strips the prefix, collapses
//! spaces, greedily packs the words into lines of at most `max_width` chars,
//! and puts the prefix back on every line.
//!
//! ```
//! use rewrap::prelude::*;
//!
//! let mut buf = EditorBuffer::from_text("# one two\n# three four");
//! RewrapCommand::new(WrapOptions::with_max_width(15)).run(&mut buf).unwrap();
//! assert_eq!(buf.text(), "# one two three\n# four");
//! ```
//!
//! ## Modules
//!
//! - [`prefix`]: prefix extraction
//! - [`paragraph`]: paragraph location around the cursor
//! - [`reflow`]: greedy word packing
//! - [`command`]: the rewrap command against a host
//! - [`editor`]: host traits and a rope-backed buffer
//! - [`config`]: rc-file and flag configuration

pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod paragraph;
pub mod perf;
pub mod prefix;
pub mod reflow;

pub use error::RewrapError;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::command::{Edit, RewrapCommand, RewrapOutcome, plan_rewrap};
    pub use crate::editor::{EditorBuffer, LineEnding, Selection, Span, TextHost, TextView};
    pub use crate::error::RewrapError;
    pub use crate::paragraph::{Paragraph, locate_paragraph};
    pub use crate::prefix::compute_prefix;
    pub use crate::reflow::{WrapOptions, wrap_lines, wrap_paragraph};
}
