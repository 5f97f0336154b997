use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use contracts::domain::a001_order_line::RawOrderLine;
use contracts::domain::a002_supplier_offer::SupplierOffer;

/// Источник сырых строк заказов (внешний коллаборатор)
///
/// Транспорт вне зоны ответственности движка: реализация может ходить
/// в API маркетплейса, читать файл или отдавать фикстуры в тестах.
#[async_trait]
pub trait OrderLineSource: Send + Sync {
    /// Загрузить строки заказов магазина за период (обе даты включительно)
    async fn fetch_order_lines(
        &self,
        store_id: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<RawOrderLine>>;
}

/// Справочник предложений поставщиков по коду товара
///
/// Используется только слоем запросов для сравнения закупочных цен.
#[async_trait]
pub trait SupplierOfferSource: Send + Sync {
    async fn offers_for(&self, product_code: &str) -> Result<Vec<SupplierOffer>>;
}
