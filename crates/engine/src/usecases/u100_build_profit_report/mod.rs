pub mod executor;
pub mod record_source;

pub use executor::{RefreshError, ReportExecutor};
pub use record_source::{OrderLineSource, SupplierOfferSource};
