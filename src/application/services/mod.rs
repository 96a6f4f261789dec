//! Application Services
//!
//! Service contracts the presentation layer dispatches to.
//!
//! All three resource slices (beer v1, beer v2, customer) share the single
//! generic [`CrudService`] contract; they differ only in the DTO type the
//! trait is instantiated with.

pub mod crud;

pub use crud::{CrudService, ServiceError};

#[cfg(test)]
pub use crud::MockCrudService;
