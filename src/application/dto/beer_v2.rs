//! Beer DTO (API v2)
//!
//! The v2 shape closes the style field to an enumeration, makes the UPC
//! mandatory and carries audit fields stamped by the service layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Resource;

/// Closed set of recognized beer styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

/// Beer resource as exposed by `/api/v2/beer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerDtoV2 {
    /// Assigned by the service on create; caller-supplied values are ignored.
    pub id: Option<Uuid>,

    #[validate(
        required(message = "beerName is required"),
        length(min = 3, max = 100, message = "beerName must be 3-100 characters")
    )]
    pub beer_name: Option<String>,

    #[validate(required(message = "beerStyle is required"))]
    pub beer_style: Option<BeerStyle>,

    #[validate(
        required(message = "upc is required"),
        range(min = 1, message = "upc must be positive")
    )]
    pub upc: Option<i64>,

    /// Optimistic-lock counter; stamped by the service, never enforced here.
    pub version: Option<i32>,

    pub created_date: Option<DateTime<Utc>>,

    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Resource for BeerDtoV2 {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }

    fn stamp_created(&mut self) {
        let now = Utc::now();
        self.version = Some(0);
        self.created_date = Some(now);
        self.last_modified_date = Some(now);
    }

    fn stamp_modified(&mut self, previous: &Self) {
        self.version = Some(previous.version.unwrap_or(0) + 1);
        self.created_date = previous.created_date;
        self.last_modified_date = Some(Utc::now());
    }
}
