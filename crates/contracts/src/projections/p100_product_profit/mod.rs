pub mod dto;

pub use dto::ProductProfitRow;
