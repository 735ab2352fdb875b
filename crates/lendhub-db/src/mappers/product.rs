//! Product model -> entity mappers

use lendhub_core::entities::{Product, ProductImage, ProductListing};

use crate::models::{ProductImageModel, ProductListingModel, ProductModel};

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            description: model.description,
            business_id: model.business_id,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ProductListingModel> for ProductListing {
    fn from(model: ProductListingModel) -> Self {
        ProductListing {
            product: Product::from(model.product),
            business_name: model.business_name,
            images: model.images,
        }
    }
}

impl From<ProductImageModel> for ProductImage {
    fn from(model: ProductImageModel) -> Self {
        ProductImage {
            id: model.id,
            product_id: model.product_id,
            file_name: model.file_name,
            created_at: model.created_at,
        }
    }
}
