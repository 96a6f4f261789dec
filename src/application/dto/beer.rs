//! Beer DTO (API v1)
//!
//! The v1 shape keeps the beer style as free text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{non_blank, Resource};

/// Beer resource as exposed by `/api/v1/beer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    /// Assigned by the service on create; caller-supplied values are ignored.
    pub id: Option<Uuid>,

    #[validate(
        required(message = "beerName is required"),
        custom(function = non_blank)
    )]
    pub beer_name: Option<String>,

    /// Free-text style; constrained to an enumeration in v2.
    pub beer_style: Option<String>,

    pub upc: Option<i64>,
}

impl Resource for BeerDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
