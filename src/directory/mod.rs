//! Student Directory Module
//!
//! An in-memory record store of student records, exposed over HTTP.
//!
//! ## Core Concepts
//! - **Value objects**: `Student` can only be built through its validating constructor,
//!   so an invalid record never reaches the store (deserialization goes through it too).
//! - **Store**: `StudentStore` is the storage interface; `MemoryStore` implements it on top
//!   of a `DashMap`, with per-key locking around every read-modify-write.
//! - **Service**: `DirectoryService` exposes the five directory operations and returns one
//!   typed outcome (`Result<_, DirectoryError>`) per call.
//! - **Boundary**: `handlers` translate outcomes into status codes and the sentinel bodies
//!   clients already depend on.
//!
//! ## Submodules
//! - **`types`**: `StudentId`, `Student`, `StudentPatch` and validation errors.
//! - **`error`**: The `DirectoryError` outcome type.
//! - **`memory`**: `StudentStore` trait and the `MemoryStore` implementation.
//! - **`service`**: `DirectoryService` and the id range used by the viewing endpoint.
//! - **`protocol`**: Endpoint paths, query parameters and sentinel bodies.
//! - **`handlers`**: Axum handlers and the router.

pub mod error;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod service;
pub mod types;
