//! SAP Business Partner tools backed by the in-memory dataset.

pub mod get;
pub mod search;

pub use get::GetBusinessPartnerTool;
pub use search::SearchBusinessPartnersTool;
