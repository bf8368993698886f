//! Listing query builder: composable search criteria for the house catalog.
//!
//! A [`HouseFilter`] is assembled from an arbitrary subset of recognized
//! criteria, combined with implicit AND. The same filter value drives both
//! the match count and the windowed fetch, so pagination metadata can never
//! drift from the page slice. Parsing is deliberately permissive: a numeric
//! criterion that does not parse is treated as unconstrained rather than
//! rejected.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entities::house::House;

/// Optional search criteria for the filtered listing query.
///
/// `matches` defines the canonical semantics; the SQL repository renders the
/// same constraints as a dynamic `WHERE` clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseFilter {
    /// Exact city match
    pub city: Option<String>,
    /// Exact bedroom count
    pub bedrooms: Option<u32>,
    /// Exact bathroom count
    pub bathrooms: Option<u32>,
    /// Exact room size label match
    pub room_size: Option<String>,
    /// Exact availability date match
    pub availability_date: Option<String>,
    /// Inclusive lower bound on rent per month
    pub min_rent: Option<i64>,
    /// Inclusive upper bound on rent per month
    pub max_rent: Option<i64>,
}

impl HouseFilter {
    /// Builds a filter from raw query parameters.
    ///
    /// Every argument is the raw string value of the corresponding query
    /// parameter, if present. Numeric criteria are parsed leniently: values
    /// that fail to parse leave that criterion unconstrained. Supplying only
    /// one rent bound leaves the other side open.
    #[allow(clippy::too_many_arguments)]
    pub fn from_query(
        city: Option<&str>,
        bedrooms: Option<&str>,
        bathrooms: Option<&str>,
        room_size: Option<&str>,
        availability_date: Option<&str>,
        min_rent: Option<&str>,
        max_rent: Option<&str>,
    ) -> Self {
        Self {
            city: non_empty(city),
            bedrooms: parse_lenient(bedrooms),
            bathrooms: parse_lenient(bathrooms),
            room_size: non_empty(room_size),
            availability_date: non_empty(availability_date),
            min_rent: parse_lenient(min_rent),
            max_rent: parse_lenient(max_rent),
        }
    }

    /// Returns true when no criterion constrains the result set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Canonical match semantics: every supplied criterion must hold.
    pub fn matches(&self, house: &House) -> bool {
        if let Some(city) = &self.city {
            if &house.city != city {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if house.bedrooms != bedrooms {
                return false;
            }
        }
        if let Some(bathrooms) = self.bathrooms {
            if house.bathrooms != bathrooms {
                return false;
            }
        }
        if let Some(room_size) = &self.room_size {
            if &house.room_size != room_size {
                return false;
            }
        }
        if let Some(date) = &self.availability_date {
            if &house.availability_date != date {
                return false;
            }
        }
        if let Some(min) = self.min_rent {
            if house.rent_per_month < min {
                return false;
            }
        }
        if let Some(max) = self.max_rent {
            if house.rent_per_month > max {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive, unanchored substring match on the listing title.
///
/// An empty fragment matches every listing. This is the in-memory counterpart
/// of the `LIKE`-based title search and the semantics tests are written
/// against.
pub fn title_matches(house: &House, fragment: &str) -> bool {
    if fragment.is_empty() {
        return true;
    }
    house
        .house_name
        .to_lowercase()
        .contains(&fragment.to_lowercase())
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_lenient<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| s.trim().parse::<T>().ok())
}
