//! Customer DTO (API v1 only)

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{non_blank, Resource};

/// Customer resource as exposed by `/api/v1/customer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    /// Assigned by the service on create; caller-supplied values are ignored.
    pub id: Option<Uuid>,

    #[validate(
        required(message = "name is required"),
        length(min = 3, max = 100, message = "name must be 3-100 characters"),
        custom(function = non_blank)
    )]
    pub name: Option<String>,
}

impl Resource for CustomerDto {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}
