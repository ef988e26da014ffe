//! CLI integration tests for fastdown.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (convert, blocks)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Error handling

mod blocks;
mod common;
mod convert;
