//! Purpose: Shared library crate used by the `confix` CLI and tests.
//! Exports: `api` (comment stripping, document I/O, pointer edits, errors).
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
mod core;
pub mod notice;
