//! Lightweight editor model the rewrap command runs against.
//!
//! [`TextView`] and [`TextHost`] are the seams to a host editor;
//! [`EditorBuffer`] is a rope-backed implementation used by the CLI and tests.

mod buffer;
mod view;

pub use buffer::{EditorBuffer, Selection};
pub use view::{LineEnding, Span, TextHost, TextView};
