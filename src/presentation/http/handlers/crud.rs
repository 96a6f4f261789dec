//! Generic CRUD Handlers
//!
//! One handler set serves every resource slice. The handlers are
//! parameterized over the DTO type and the service implementation, so the
//! beer v1, beer v2 and customer routers are three instantiations of the
//! same code.
//!
//! Contract per operation:
//! - `POST /` validates the body, then calls `save` once; 201 with the
//!   created DTO.
//! - `GET /{id}` calls `get_by_id` once; 200 with the DTO as returned.
//! - `PUT /{id}` validates the body, then calls `update` once; 204, empty.
//! - `DELETE /{id}` calls `delete` once; 204, empty.
//!
//! Validation failures short-circuit with 400 before any service call.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::services::CrudService;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// Build the four-route CRUD router for one resource slice.
///
/// The service handle becomes the router's state, so tests can pass a mock
/// where production passes an in-memory store.
pub fn crud_router<D, S>(service: Arc<S>) -> Router
where
    D: Serialize + DeserializeOwned + Validate + Send + Sync + 'static,
    S: CrudService<D> + 'static,
{
    Router::new()
        .route("/", post(create::<D, S>))
        .route(
            "/{id}",
            get(get_by_id::<D, S>)
                .put(update::<D, S>)
                .delete(delete_by_id::<D, S>),
        )
        .with_state(service)
}

/// Fetch one resource by id.
pub async fn get_by_id<D, S>(
    State(service): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<D>, AppError>
where
    D: Serialize + DeserializeOwned + Validate + Send + Sync + 'static,
    S: CrudService<D> + 'static,
{
    let dto = service.get_by_id(id).await?;
    Ok(Json(dto))
}

/// Create a resource. The service assigns the id.
pub async fn create<D, S>(
    State(service): State<Arc<S>>,
    Json(body): Json<D>,
) -> Result<(StatusCode, Json<D>), AppError>
where
    D: Serialize + DeserializeOwned + Validate + Send + Sync + 'static,
    S: CrudService<D> + 'static,
{
    // Validate request
    body.validate().map_err(validation_error)?;

    let created = service.save(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the resource stored under the path id.
pub async fn update<D, S>(
    State(service): State<Arc<S>>,
    Path(id): Path<Uuid>,
    Json(body): Json<D>,
) -> Result<StatusCode, AppError>
where
    D: Serialize + DeserializeOwned + Validate + Send + Sync + 'static,
    S: CrudService<D> + 'static,
{
    // Validate request
    body.validate().map_err(validation_error)?;

    service.update(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete the resource stored under the path id.
pub async fn delete_by_id<D, S>(
    State(service): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    D: Serialize + DeserializeOwned + Validate + Send + Sync + 'static,
    S: CrudService<D> + 'static,
{
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
