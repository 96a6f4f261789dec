//! # Brewery Server Library
//!
//! This crate provides a versioned CRUD REST API for beer and customer
//! resources:
//! - `/api/v1/beer` - beers with a free-text style field
//! - `/api/v2/beer` - beers with an enumerated style, product code and audit fields
//! - `/api/v1/customer` - customers
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Application Layer**: DTOs and the `CrudService` contract
//! - **Infrastructure Layer**: In-memory store implementation
//! - **Presentation Layer**: HTTP handlers and routes
//!
//! All three resource slices share one generic handler set parameterized
//! over the DTO type and the service implementation.
//!
//! ## Module Structure
//!
//! ```text
//! brewery_server/
//! +-- config/        Configuration management
//! +-- application/   DTOs and service contracts
//! +-- infrastructure/ In-memory store implementation
//! +-- presentation/  HTTP routes and handlers
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Application layer - DTOs and service contracts
pub mod application;

// Infrastructure layer - Concrete service implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
