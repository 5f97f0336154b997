use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Сырая строка заказа маркетплейса (A001)
///
/// Одна строка = один товар в заказе. Строка неизменяема после загрузки;
/// отсутствующие числовые поля приводятся к нулю при десериализации.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrderLine {
    /// ID заказа
    pub order_id: String,
    /// ID публикации (листинга)
    pub item_id: String,
    /// ID вариации (0 если вариаций нет)
    #[serde(default)]
    pub variation_id: i64,
    /// Количество
    #[serde(default)]
    pub qty: i64,
    /// Цена за единицу
    #[serde(default)]
    pub unit_price: f64,
    /// Сумма за строку
    #[serde(default)]
    pub amount_line: f64,
    /// Себестоимость за единицу
    #[serde(default)]
    pub unit_cost: f64,
    /// Комиссия маркетплейса по строке
    #[serde(default)]
    pub sale_fee: f64,
    /// Стоимость доставки отправления (заполнена только на одной строке отправления)
    #[serde(default)]
    pub shipping_cost: Option<f64>,
    /// Рекламные расходы по строке
    #[serde(default)]
    pub ads_cost: Option<f64>,
    /// ID отправления (pack)
    #[serde(default)]
    pub pack_id: Option<String>,
    /// ID доставки — запасной ключ отправления при отсутствии pack_id
    #[serde(default)]
    pub shipping_id: Option<String>,
    /// Дата/время продажи
    #[serde(default)]
    pub sold_at: Option<DateTime<Utc>>,
    /// Статус публикации (active/paused/closed)
    #[serde(default)]
    pub status: String,
    /// Название товара
    #[serde(default)]
    pub title: String,
    /// Ссылка на миниатюру
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Доступный остаток на складе
    #[serde(default)]
    pub available_stock: i64,
}

impl RawOrderLine {
    /// Ключ отправления: pack_id, иначе shipping_id, иначе сам заказ
    /// (одиночное отправление) — каждая строка попадает ровно в одну группу
    pub fn shipment_key(&self) -> String {
        self.pack_id
            .clone()
            .or_else(|| self.shipping_id.clone())
            .unwrap_or_else(|| self.order_id.clone())
    }

    /// Календарный день продажи; если метка времени отсутствует — сегодня
    pub fn sale_day(&self) -> NaiveDate {
        self.sold_at
            .map(|dt| dt.date_naive())
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Составной ключ товара: публикация + вариация
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductKey {
    pub item_id: String,
    pub variation_id: i64,
}

impl ProductKey {
    pub fn of_line(line: &RawOrderLine) -> Self {
        Self {
            item_id: line.item_id.clone(),
            variation_id: line.variation_id,
        }
    }

    pub fn as_string(&self) -> String {
        format!("{}_{}", self.item_id, self.variation_id)
    }
}

/// Ключ дедупликации затрат уровня заказа: (заказ, товар).
/// Типизированный ключ вместо конкатенации строк — исключает коллизии
/// вида "12_3" / "1_23"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderProductKey {
    pub order_id: String,
    pub product: ProductKey,
}

impl OrderProductKey {
    pub fn of_line(line: &RawOrderLine) -> Self {
        Self {
            order_id: line.order_id.clone(),
            product: ProductKey::of_line(line),
        }
    }
}

/// Ключ дедупликации рекламных расходов: (товар, календарный день)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdSpendKey {
    pub product: ProductKey,
    pub day: NaiveDate,
}

impl AdSpendKey {
    pub fn of_line(line: &RawOrderLine) -> Self {
        Self {
            product: ProductKey::of_line(line),
            day: line.sale_day(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_numeric_fields_deserialize_as_zero() {
        let json = r#"{"order_id": "ORD1", "item_id": "ITEM1"}"#;
        let line: RawOrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.variation_id, 0);
        assert_eq!(line.qty, 0);
        assert_eq!(line.unit_price, 0.0);
        assert_eq!(line.sale_fee, 0.0);
        assert!(line.shipping_cost.is_none());
        assert!(line.ads_cost.is_none());
        assert_eq!(line.available_stock, 0);
    }

    #[test]
    fn test_shipment_key_fallback_chain() {
        let json = r#"{"order_id": "ORD1", "item_id": "ITEM1"}"#;
        let mut line: RawOrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.shipment_key(), "ORD1");

        line.shipping_id = Some("SHP1".to_string());
        assert_eq!(line.shipment_key(), "SHP1");

        line.pack_id = Some("PACK1".to_string());
        assert_eq!(line.shipment_key(), "PACK1");
    }

    #[test]
    fn test_product_key_orders_by_item_then_variation() {
        let a = ProductKey { item_id: "ITEM1".to_string(), variation_id: 9 };
        let b = ProductKey { item_id: "ITEM2".to_string(), variation_id: 1 };
        let c = ProductKey { item_id: "ITEM2".to_string(), variation_id: 5 };
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.as_string(), "ITEM2_1");
    }
}
