//! Products Domain
//!
//! Product catalog: CRUD, filtered and paginated listing, name search and
//! aggregate statistics over an in-process store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, API key gate on mutations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, query rules, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum_helpers::ApiKeyAuth;
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::with_seed_data();
//! let service = ProductService::new(repository);
//!
//! let router = handlers::router(service, ApiKeyAuth::new("secret"));
//! # let _: axum::Router = router;
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod stats;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductInput, seed_products};
pub use query::{PageMeta, ProductPage, ProductQuery, SearchQuery};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use stats::ProductStats;
