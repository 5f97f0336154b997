use serde::{Deserialize, Serialize};

/// Предложение поставщика по коду товара (A002)
///
/// Используется только слоем запросов для сравнения альтернативных
/// закупочных цен; агрегация от него не зависит.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// ID поставщика
    pub supplier_id: String,
    /// Название поставщика
    pub name: String,
    /// Закупочная цена за единицу
    #[serde(default)]
    pub unit_cost: f64,
    /// Доступное количество
    #[serde(default)]
    pub available_units: i64,
    /// Модель
    #[serde(default)]
    pub model: Option<String>,
    /// Артикул поставщика
    #[serde(default)]
    pub sku: Option<String>,
}
