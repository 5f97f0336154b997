use serde::{Deserialize, Serialize};

use crate::domain::a001_order_line::ProductKey;
use crate::enums::{AbcClass, StockRisk};

/// Строка отчёта прибыльности по товару (P100)
///
/// Замороженный результат прохода агрегации: после сборки строка
/// не мутируется, слой запросов работает только на чтение.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductProfitRow {
    // Dimensions
    pub item_id: String,
    pub variation_id: i64,

    // Info fields
    pub title: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub available_stock: i64,

    // Accumulated totals
    pub units_sold: i64,
    pub revenue_total: f64,
    pub cost_total: f64,
    pub fee_total: f64,
    pub shipping_total: f64,
    pub ads_total: f64,

    // Unit economics
    pub unit_price: f64,
    pub unit_cost: f64,
    pub unit_fee: f64,
    pub unit_shipping: f64,
    pub unit_ads: f64,

    // Derived profitability
    pub unit_profit: f64,
    pub total_profit: f64,
    pub margin_percent: f64,
    pub roi_percent: f64,

    // Classifications
    pub variable_price: bool,
    pub stock_risk: StockRisk,
    pub abc_class: AbcClass,
}

impl ProductProfitRow {
    pub fn product_key(&self) -> ProductKey {
        ProductKey {
            item_id: self.item_id.clone(),
            variation_id: self.variation_id,
        }
    }

    /// Код товара для отображения и поиска
    pub fn product_code(&self) -> String {
        self.product_key().as_string()
    }
}
