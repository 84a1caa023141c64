//! HTTP handlers for Products API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
        ValidationErrorResponse,
    },
    require_api_key, ApiKeyAuth, JsonBody,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{Product, ProductInput};
use crate::query::{PageMeta, ProductPage, ProductQuery, SearchQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::stats::ProductStats;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        search_products,
        product_stats,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductInput, ProductPage, PageMeta, ProductStats),
        responses(
            NotFoundResponse,
            ValidationErrorResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    modifiers(&ApiKeySecurity),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Registers the `x-api-key` header scheme used by mutating routes.
struct ApiKeySecurity;

impl utoipa::Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                axum_helpers::API_KEY_HEADER,
            ))),
        );
    }
}

/// Create the products router with all HTTP endpoints
///
/// Literal sub-paths are registered before `/{id}`. Create, update and
/// delete sit behind the API key gate.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: ApiKeyAuth,
) -> Router {
    let shared_service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/stats", get(product_stats))
        .route("/{id}", get(get_product));

    let protected = Router::new()
        .route("/", post(create_product))
        .route("/{id}", put(update_product).delete(delete_product))
        .route_layer(middleware::from_fn_with_state(auth, require_api_key));

    public.merge(protected).with_state(shared_service)
}

/// List products with optional filters and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ProductQuery>,
) -> ProductResult<Json<ProductPage>> {
    let page = service.list_products(query).await?;
    Ok(Json(page))
}

/// Search products by name
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<SearchQuery>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.search_products(query.q.as_deref()).await?;
    Ok(Json(products))
}

/// Catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Counts by category and stock status", body = ProductStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductStats>> {
    let stats = service.stats().await?;
    Ok(Json(stats))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    security(("api_key" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Json<Product>> {
    let product = service.update_product(&id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    security(("api_key" = [])),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> ProductResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
