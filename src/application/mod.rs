//! Application Layer
//!
//! Contains the service contracts and data transfer objects (DTOs).
//! This layer defines what the presentation layer can ask of a resource
//! slice without fixing how the data is stored.

pub mod dto;
pub mod services;
