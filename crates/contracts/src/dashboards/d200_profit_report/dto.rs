use serde::{Deserialize, Serialize};

use crate::domain::a002_supplier_offer::SupplierOffer;
use crate::enums::{AbcClass, SortKey, SortOrder, StockRisk};
use crate::projections::p100_product_profit::ProductProfitRow;

/// Filter set for the profitability report. All predicates combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitReportFilters {
    /// Exact publication status ("active", "paused", ...)
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive substring match on title or product code
    #[serde(default)]
    pub search: Option<String>,
    /// Inclusive margin% range
    #[serde(default)]
    pub margin_from: Option<f64>,
    #[serde(default)]
    pub margin_to: Option<f64>,
    /// Inclusive ROI% range
    #[serde(default)]
    pub roi_from: Option<f64>,
    #[serde(default)]
    pub roi_to: Option<f64>,
    /// Exact stock risk class
    #[serde(default)]
    pub stock_risk: Option<StockRisk>,
    /// Exact ABC class
    #[serde(default)]
    pub abc_class: Option<AbcClass>,
    /// Only rows with elevated (non-Low) stock risk
    #[serde(default)]
    pub only_stock_risk: bool,
    /// Only rows sold at more than one distinct unit price
    #[serde(default)]
    pub only_variable_price: bool,
}

/// Request for one page of the profitability report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitReportRequest {
    #[serde(default)]
    pub filters: ProfitReportFilters,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// 0-indexed page number
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    50
}

impl Default for ProfitReportRequest {
    fn default() -> Self {
        Self {
            filters: ProfitReportFilters::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: 0,
            page_size: default_page_size(),
        }
    }
}

/// One page of the profitability report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitReportResponse {
    pub rows: Vec<ProductProfitRow>,
    /// Always >= 1, even for an empty filtered set
    pub page_count: u64,
    /// Row count after filtering, before pagination
    pub total_filtered: u64,
}

/// Flattened, presentation-normalized row handed to the external
/// spreadsheet/document generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitExportRow {
    pub product_code: String,
    pub title: String,
    pub status: String,
    pub units_sold: i64,
    pub unit_price: f64,
    pub unit_cost: f64,
    pub unit_fee: f64,
    pub unit_shipping: f64,
    pub unit_ads: f64,
    pub unit_profit: f64,
    pub revenue_total: f64,
    pub total_profit: f64,
    pub margin_percent: f64,
    pub roi_percent: f64,
    pub variable_price: bool,
    pub stock_risk: String,
    pub abc_class: String,
    pub available_stock: i64,
}

/// One supplier offer compared against the product's current unit cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcingOption {
    pub offer: SupplierOffer,
    /// offer.unit_cost - current unit cost (negative = cheaper sourcing)
    pub unit_cost_delta: f64,
}

/// Sourcing comparison for a single product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcingComparison {
    pub product_code: String,
    pub current_unit_cost: f64,
    /// Offers sorted by unit cost, cheapest first
    pub options: Vec<SourcingOption>,
}
