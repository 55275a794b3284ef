use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use axum_helpers::errors::responses::{
    ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
};

use crate::error::ProductError;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::{CreateOutcome, ProductService};

const TAG: &str = "products";

#[derive(OpenApi)]
#[openapi(
    paths(
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(
            Product,
            CreateProduct,
            UpdateProduct,
            MessageResponse,
            ProductResponse,
            ProductListResponse,
        ),
        responses(NotFoundResponse, ConflictResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Envelope for confirmation messages
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: String,
}

/// Envelope wrapping a single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub success: Product,
}

/// Envelope wrapping the full product list
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub success: Vec<Product>,
}

pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let state = Arc::new(service);
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/product/{id}",
            get(get_product).patch(update_product).delete(delete_product),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/products",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = MessageResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(input): Json<CreateProduct>,
) -> Result<impl IntoResponse, ProductError> {
    match service.create(input).await? {
        CreateOutcome::Created(_) => Ok((
            StatusCode::CREATED,
            Json(MessageResponse {
                success: "Product successfully created".to_string(),
            }),
        )),
        CreateOutcome::DuplicateName(name) => Err(ProductError::DuplicateName(name)),
    }
}

#[utoipa::path(
    get,
    path = "/products",
    tag = TAG,
    responses(
        (status = 200, description = "All products", body = ProductListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<impl IntoResponse, ProductError> {
    let products = service.get_all().await?;
    Ok(Json(ProductListResponse { success: products }))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ProductError> {
    let product = service
        .get_by_id(id)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(ProductResponse { success: product }))
}

#[utoipa::path(
    patch,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "The updated product", body = ProductResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateProduct>,
) -> Result<impl IntoResponse, ProductError> {
    let product = service
        .update(id, update)
        .await?
        .ok_or(ProductError::NotFound(id))?;
    Ok(Json(ProductResponse { success: product }))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ProductError> {
    if !service.delete(id).await? {
        return Err(ProductError::NotFound(id));
    }
    Ok(Json(MessageResponse {
        success: "Product successfully deleted".to_string(),
    }))
}
