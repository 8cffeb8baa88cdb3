use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::Link;

/// Entry point of the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexDto {
    pub message: String,
    pub links: Vec<Link>,
}
