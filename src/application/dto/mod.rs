//! Data Transfer Objects
//!
//! DTOs for API request/response serialization. Each resource slice owns one
//! DTO type that serves both directions: it is validated on the way in and
//! serialized unchanged on the way out.

use uuid::Uuid;
use validator::ValidationError;

pub mod beer;
pub mod beer_v2;
pub mod customer;

pub use beer::BeerDto;
pub use beer_v2::{BeerDtoV2, BeerStyle};
pub use customer::CustomerDto;

/// A DTO that can live in a resource store.
///
/// The store owns identifier assignment: whatever id a caller supplies on
/// create is overwritten via `assign_id`. The stamp hooks default to no-ops;
/// DTOs carrying audit fields override them.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Current identifier, if one has been assigned.
    fn id(&self) -> Option<Uuid>;

    /// Overwrite the identifier. Called by the store on create and update.
    fn assign_id(&mut self, id: Uuid);

    /// Hook invoked by the store when the resource is first created.
    fn stamp_created(&mut self) {}

    /// Hook invoked by the store when this value replaces `previous`.
    ///
    /// Audit fields are derived from the stored `previous` value, so
    /// whatever audit data a caller submits is discarded here.
    fn stamp_modified(&mut self, _previous: &Self) {}
}

/// Reject strings that are empty or whitespace-only.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("non_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
