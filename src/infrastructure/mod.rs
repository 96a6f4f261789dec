//! Infrastructure Layer
//!
//! Concrete implementations behind the application-layer contracts.
//! The only engine shipped here is the in-memory store; persistence
//! belongs to external collaborators.

pub mod memory;
