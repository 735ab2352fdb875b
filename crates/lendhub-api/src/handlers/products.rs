//! Product handlers, including product images

use axum::{extract::State, http::StatusCode, Json};
use lendhub_service::dto::{
    CreateProductRequest, FileResponse, ProductResponse, UpdateProductRequest,
};
use lendhub_service::ProductService;

use crate::extractors::{FileNameQuery, IdQuery, SearchQuery, UploadedFile, ValidatedJson};
use crate::response::{ApiResult, Created, CreatedId, NoContent};
use crate::state::AppState;

/// Product search, shared by the admin and public listings
///
/// GET /product?q=, GET /public/product?q=
pub async fn search_products(
    State(state): State<AppState>,
    SearchQuery(q): SearchQuery,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = ProductService::new(state.service_context()).search(&q).await?;
    Ok(Json(products))
}

/// POST /product
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<CreatedId>>> {
    let id = ProductService::new(state.service_context())
        .create(request)
        .await?;
    Ok(Created(Json(CreatedId { id })))
}

/// PATCH /product
pub async fn update_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<StatusCode> {
    ProductService::new(state.service_context())
        .update(request)
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /product?id=
pub async fn delete_product(
    State(state): State<AppState>,
    IdQuery(id): IdQuery,
) -> ApiResult<NoContent> {
    ProductService::new(state.service_context()).delete(id).await?;
    Ok(NoContent)
}

/// POST /product/image?id=
pub async fn upload_product_image(
    State(state): State<AppState>,
    IdQuery(product_id): IdQuery,
    file: UploadedFile,
) -> ApiResult<Created<Json<FileResponse>>> {
    let stored = ProductService::new(state.service_context())
        .upload_image(
            product_id,
            &file.file_name,
            file.content_type.as_deref(),
            file.bytes,
        )
        .await?;
    Ok(Created(Json(stored)))
}

/// DELETE /product/image?filename=
pub async fn delete_product_image(
    State(state): State<AppState>,
    FileNameQuery(file_name): FileNameQuery,
) -> ApiResult<NoContent> {
    ProductService::new(state.service_context())
        .delete_image(&file_name)
        .await?;
    Ok(NoContent)
}
