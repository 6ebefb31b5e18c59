//! Student Directory Service Library
//!
//! An in-memory directory of student records served over HTTP. The binary (`main.rs`)
//! wires these modules together.
//!
//! ## Modules
//! - **`config`**: Startup configuration from command-line flags and environment variables.
//! - **`directory`**: The record types, the `StudentStore` interface with its in-memory
//!   implementation, the `DirectoryService` operations and their HTTP handlers.

pub mod config;
pub mod directory;
