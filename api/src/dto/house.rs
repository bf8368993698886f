//! Listing DTOs

use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use hh_core::domain::entities::house::HouseFields;
use hh_core::domain::house_filter::HouseFilter;
use hh_shared::types::pagination::PageRequest;

/// Request body for POST /addhouse and PUT /updatehouse/{id}.
///
/// Updates are full-field replaces, so the same payload serves both.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HouseRequest {
    #[validate(length(min = 1, max = 255, message = "must not be empty"))]
    pub house_name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,

    pub bedrooms: u32,
    pub bathrooms: u32,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub room_size: String,

    #[validate(range(min = 0, message = "must not be negative"))]
    pub rent_per_month: i64,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub availability_date: String,

    pub picture: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone_number: String,

    pub description: Option<String>,
}

impl From<HouseRequest> for HouseFields {
    fn from(request: HouseRequest) -> Self {
        Self {
            house_name: request.house_name,
            address: request.address,
            city: request.city,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            room_size: request.room_size,
            rent_per_month: request.rent_per_month,
            availability_date: request.availability_date,
            picture: request.picture,
            phone_number: request.phone_number,
            description: request.description,
        }
    }
}

/// Parsed query string of GET /houses.
///
/// The raw parameter map is handed to the lenient domain parser: unrecognized
/// parameters are ignored and non-numeric values relax their criterion
/// instead of rejecting the request.
pub struct HouseSearchQuery {
    pub filter: HouseFilter,
    pub page: PageRequest,
}

impl HouseSearchQuery {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        Self {
            filter: HouseFilter::from_query(
                get("city"),
                get("bedrooms"),
                get("bathrooms"),
                get("room_size"),
                get("availability_date"),
                get("minRent"),
                get("maxRent"),
            ),
            page: PageRequest::from_param(get("page")),
        }
    }
}
