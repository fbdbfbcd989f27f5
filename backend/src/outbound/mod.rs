//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: MySQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories for development and tests
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
