//! Purpose: Define the stable public Rust API boundary for confix.
//! Exports: Comment stripping, document I/O, pointer edits, and errors.
//! Role: Public, additive-only surface; hides internal core modules.
//! Invariants: This module is the only public path to core primitives.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::document::{
    normalized, parse_text, read_document, read_source, write_document, write_source,
};
pub use crate::core::edit::{SetOutcome, get, remove, set};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::strip::strip_comments;
