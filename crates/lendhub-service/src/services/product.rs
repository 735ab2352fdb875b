//! Product catalog service, including product images kept in the blob store

use lendhub_core::{DomainError, Product, ProductImage};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateProductRequest, FileResponse, ProductResponse, UpdateProductRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Products whose name contains `query`, with business name and images
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().search(query).await?;
        if products.is_empty() {
            return Err(DomainError::NoResults("product").into());
        }
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(business_id = %request.business_id))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<Uuid> {
        let product = Product::new(
            Uuid::new_v4(),
            request.name,
            request.description,
            request.business_id,
            request.price,
        );
        self.ctx.product_repo().create(&product).await?;

        info!(product_id = %product.id, "Product created");
        Ok(product.id)
    }

    #[instrument(skip(self, request), fields(product_id = %request.id))]
    pub async fn update(&self, request: UpdateProductRequest) -> ServiceResult<()> {
        let product = Product::new(
            request.id,
            request.name,
            request.description,
            request.business_id,
            request.price,
        );
        self.ctx.product_repo().update(&product).await?;

        info!("Product updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.product_repo().delete(id).await?;
        info!("Product deleted");
        Ok(())
    }

    /// Store an image and attach it to a product
    ///
    /// When the row cannot be written the uploaded blob is removed again.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload_image(
        &self,
        product_id: Uuid,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> ServiceResult<FileResponse> {
        let stored = self
            .ctx
            .blob_store()
            .upload(file_name, content_type, bytes)
            .await?;

        let image = ProductImage::new(Uuid::new_v4(), product_id, stored.clone());
        if let Err(e) = self.ctx.product_repo().add_image(&image).await {
            if let Err(cleanup) = self.ctx.blob_store().delete(&stored).await {
                warn!(file_name = %stored, error = %cleanup, "Orphaned product image blob");
            }
            return Err(e.into());
        }

        info!(file_name = %stored, "Product image stored");
        Ok(FileResponse { filename: stored })
    }

    /// Remove an image from the blob store and from its product
    #[instrument(skip(self))]
    pub async fn delete_image(&self, file_name: &str) -> ServiceResult<()> {
        self.ctx
            .product_repo()
            .find_image(file_name)
            .await?
            .ok_or(DomainError::NotFound("image"))?;

        self.ctx.blob_store().delete(file_name).await?;
        self.ctx.product_repo().delete_image(file_name).await?;

        info!("Product image deleted");
        Ok(())
    }
}
