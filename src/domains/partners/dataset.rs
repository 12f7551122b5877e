//! In-memory business partner dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single business partner record.
///
/// Field names on the wire follow the SAP Business Partner API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessPartner {
    /// Unique partner ID.
    #[serde(rename = "BusinessPartner")]
    pub id: String,

    /// Display name.
    #[serde(rename = "BusinessPartnerName")]
    pub name: String,

    /// ISO country code.
    #[serde(rename = "Country")]
    pub country: String,

    #[serde(rename = "City")]
    pub city: String,

    #[serde(rename = "CreatedOn")]
    pub created_on: NaiveDate,
}

/// Seed rows: id, name, country, city, created on.
const SEED: [(&str, &str, &str, &str, NaiveDate); 3] = [
    ("1000001", "Acme Corporation", "IN", "Bengaluru", seed_date(2023, 6, 1)),
    ("1000002", "Globex India Ltd", "IN", "Mumbai", seed_date(2023, 7, 15)),
    ("1000003", "Infosys Pvt Ltd", "IN", "Pune", seed_date(2023, 8, 20)),
];

/// Evaluated at compile time, so a bad seed date fails the build.
const fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

/// Equality filters for a partner search.
///
/// `None` means "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerFilter {
    pub country: Option<String>,
    pub city: Option<String>,
}

/// Immutable collection of business partners.
#[derive(Debug, Clone)]
pub struct Dataset {
    partners: Vec<BusinessPartner>,
}

impl Dataset {
    /// Build a dataset from an explicit list of records.
    pub fn new(partners: Vec<BusinessPartner>) -> Self {
        Self { partners }
    }

    /// The demo dataset served by the running server.
    pub fn seeded() -> Self {
        let partners = SEED
            .iter()
            .map(|&(id, name, country, city, created_on)| BusinessPartner {
                id: id.to_string(),
                name: name.to_string(),
                country: country.to_string(),
                city: city.to_string(),
                created_on,
            })
            .collect();

        Self::new(partners)
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// All records in seed order.
    pub fn all(&self) -> &[BusinessPartner] {
        &self.partners
    }

    /// Exact-match lookup by partner ID.
    pub fn find(&self, id: &str) -> Option<&BusinessPartner> {
        self.partners.iter().find(|bp| bp.id == id)
    }

    /// Narrow the dataset by country, then by city.
    ///
    /// Both filters are case-sensitive exact matches. Seed order is preserved.
    pub fn search(&self, filter: &PartnerFilter) -> Vec<&BusinessPartner> {
        let mut results: Vec<&BusinessPartner> = self.partners.iter().collect();

        if let Some(country) = filter.country.as_deref() {
            results.retain(|bp| bp.country == country);
        }

        if let Some(city) = filter.city.as_deref() {
            results.retain(|bp| bp.city == city);
        }

        results
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::seeded()
    }
}
