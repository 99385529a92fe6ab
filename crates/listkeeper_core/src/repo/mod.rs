//! Storage port and collection persistence.
//!
//! # Responsibility
//! - Define the key-value storage contract widgets persist through.
//! - Keep serialization of collections out of the transition tables.
//!
//! # Invariants
//! - Each collection lives under one fixed key as one JSON string.

pub mod collection_store;
pub mod kv_store;
