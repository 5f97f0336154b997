pub mod classification;
pub mod fetch_policy;
pub mod sort;

pub use classification::{AbcClass, StockRisk};
pub use fetch_policy::FetchFailurePolicy;
pub use sort::{SortKey, SortOrder};
