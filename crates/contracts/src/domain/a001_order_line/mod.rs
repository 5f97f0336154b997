pub mod record;

pub use record::{AdSpendKey, OrderProductKey, ProductKey, RawOrderLine};
