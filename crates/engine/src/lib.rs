pub mod dashboards;
pub mod projections;
pub mod shared;
pub mod usecases;

pub use usecases::u100_build_profit_report::executor::{RefreshError, ReportExecutor};
pub use usecases::u100_build_profit_report::record_source::{OrderLineSource, SupplierOfferSource};
