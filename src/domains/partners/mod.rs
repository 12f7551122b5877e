//! Business partner domain.
//!
//! A small, read-only reference dataset of SAP-style business partners.
//! It is seeded once at startup and shared by the lookup and search tools.

mod dataset;

pub use dataset::{BusinessPartner, Dataset, PartnerFilter};
