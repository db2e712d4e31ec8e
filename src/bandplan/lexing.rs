//! Line-level preprocessing of bandplan documents
//!
//! Turns raw text into the stripped, non-empty lines the parser folds, and
//! provides the indentation fold itself.

pub mod comments;
pub mod folding;

pub use comments::{split_note, strip_comments, strip_lines, INLINE_COMMENT, NOTE_MARKER};
pub use folding::{dedent_once, fold_by_indentation, global_attributes, Fold};
