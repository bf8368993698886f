//! House entity representing a rentable listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable housing unit listed on the marketplace.
///
/// `owner_email` is a back-reference to the owning [`super::user::User`] by
/// email rather than a foreign key; many listings may reference one owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// Unique identifier for the listing
    pub id: Uuid,

    /// Email of the owner who listed the house
    pub owner_email: String,

    /// Listing title used by the free-text search
    pub house_name: String,

    /// Street address
    pub address: String,

    /// City, matched exactly by the filtered search
    pub city: String,

    /// Number of bedrooms
    pub bedrooms: u32,

    /// Number of bathrooms
    pub bathrooms: u32,

    /// Room size label (e.g. "1200 sqft"), matched exactly
    pub room_size: String,

    /// Monthly rent
    pub rent_per_month: i64,

    /// Date from which the house is available, matched exactly
    pub availability_date: String,

    /// Picture URL
    pub picture: Option<String>,

    /// Contact phone number for the listing
    pub phone_number: String,

    /// Free-form description
    pub description: Option<String>,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,
}

/// The replaceable field set of a listing.
///
/// Updates are full-field replaces: every field is written, mirroring the
/// create payload minus identity and ownership.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseFields {
    pub house_name: String,
    pub address: String,
    pub city: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub room_size: String,
    pub rent_per_month: i64,
    pub availability_date: String,
    pub picture: Option<String>,
    pub phone_number: String,
    pub description: Option<String>,
}

impl House {
    /// Creates a new listing owned by `owner_email`
    pub fn new(owner_email: String, fields: HouseFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_email,
            house_name: fields.house_name,
            address: fields.address,
            city: fields.city,
            bedrooms: fields.bedrooms,
            bathrooms: fields.bathrooms,
            room_size: fields.room_size,
            rent_per_month: fields.rent_per_month,
            availability_date: fields.availability_date,
            picture: fields.picture,
            phone_number: fields.phone_number,
            description: fields.description,
            created_at: Utc::now(),
        }
    }

    /// Replaces every mutable field with the supplied set
    pub fn replace_fields(&mut self, fields: HouseFields) {
        self.house_name = fields.house_name;
        self.address = fields.address;
        self.city = fields.city;
        self.bedrooms = fields.bedrooms;
        self.bathrooms = fields.bathrooms;
        self.room_size = fields.room_size;
        self.rent_per_month = fields.rent_per_month;
        self.availability_date = fields.availability_date;
        self.picture = fields.picture;
        self.phone_number = fields.phone_number;
        self.description = fields.description;
    }
}
