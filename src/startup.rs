//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::dto::{BeerDto, BeerDtoV2, CustomerDto};
use crate::config::Settings;
use crate::infrastructure::memory::InMemoryStore;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state: one store handle per resource slice.
///
/// Stores are constructed here and handed to the router explicitly; tests
/// substitute mocks by building a slice router directly.
#[derive(Clone)]
pub struct AppState {
    pub beers_v1: Arc<InMemoryStore<BeerDto>>,
    pub beers_v2: Arc<InMemoryStore<BeerDtoV2>>,
    pub customers: Arc<InMemoryStore<CustomerDto>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            beers_v1: Arc::new(InMemoryStore::new()),
            beers_v2: Arc::new(InMemoryStore::new()),
            customers: Arc::new(InMemoryStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = AppState::new();
        let router = build_router(&settings, state);

        let addr = settings.server_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Assemble the router with its middleware stack.
pub fn build_router(settings: &Settings, state: AppState) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}
