//! In-Memory Store
//!
//! DashMap-backed implementation of the CRUD service contract.

mod store;

pub use store::InMemoryStore;
