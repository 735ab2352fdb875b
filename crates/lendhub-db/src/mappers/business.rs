//! Business model -> entity mapper

use lendhub_core::entities::Business;

use crate::models::BusinessModel;

impl From<BusinessModel> for Business {
    fn from(model: BusinessModel) -> Self {
        Business {
            id: model.id,
            name: model.name,
            address: model.address,
            phone_number: model.phone_number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
