// Core modules implementing comment stripping, document I/O, pointer edits,
// and error modeling.
pub mod document;
pub mod edit;
pub mod error;
pub mod strip;
