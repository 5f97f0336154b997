use contracts::domain::a001_order_line::{AdSpendKey, OrderProductKey, ProductKey, RawOrderLine};
use std::collections::{HashMap, HashSet};

/// Накопитель итогов по одному товару
///
/// Мутируется только внутри прохода агрегации; наружу уходит уже
/// замороженная строка P100 (см. metrics::derive_row).
#[derive(Debug, Clone)]
pub struct ProductAccumulator {
    pub product: ProductKey,
    pub title: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub available_stock: i64,

    /// Продано единиц — накапливается на каждой строке
    pub units_sold: i64,
    /// Выручка — накапливается на каждой строке
    pub revenue_total: f64,
    /// Себестоимость — один раз на (заказ, товар)
    pub cost_total: f64,
    /// Комиссия — один раз на (заказ, товар)
    pub fee_total: f64,
    /// Доставка (прорейтированная) — один раз на (заказ, товар)
    pub shipping_total: f64,
    /// Реклама — один раз на (товар, день)
    pub ads_total: f64,

    /// Последняя наблюдавшаяся цена за единицу
    pub unit_price: f64,
    /// Различные наблюдавшиеся цены (признак переменной цены)
    distinct_prices: Vec<f64>,
}

impl ProductAccumulator {
    fn new(line: &RawOrderLine) -> Self {
        Self {
            product: ProductKey::of_line(line),
            title: line.title.clone(),
            status: line.status.clone(),
            thumbnail: line.thumbnail.clone(),
            available_stock: line.available_stock,
            units_sold: 0,
            revenue_total: 0.0,
            cost_total: 0.0,
            fee_total: 0.0,
            shipping_total: 0.0,
            ads_total: 0.0,
            unit_price: 0.0,
            distinct_prices: Vec::new(),
        }
    }

    /// Товар продавался более чем по одной цене за окно запроса
    pub fn variable_price(&self) -> bool {
        self.distinct_prices.len() > 1
    }
}

/// Набор накопителей прохода агрегации с дедупликацией затрат
#[derive(Debug, Default)]
pub struct AccumulatorSet {
    discovery_order: Vec<ProductKey>,
    by_product: HashMap<ProductKey, ProductAccumulator>,
    seen_order_costs: HashSet<OrderProductKey>,
    seen_ad_days: HashSet<AdSpendKey>,
}

impl AccumulatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Свернуть одну строку (с уже назначенной удельной доставкой)
    pub fn fold_line(&mut self, line: &RawOrderLine, prorated_shipping: f64) {
        let product = ProductKey::of_line(line);
        if !self.by_product.contains_key(&product) {
            self.discovery_order.push(product.clone());
            self.by_product
                .insert(product.clone(), ProductAccumulator::new(line));
        }
        let acc = match self.by_product.get_mut(&product) {
            Some(acc) => acc,
            None => return,
        };

        // Количество и выручка — безусловно, на каждой строке
        acc.units_sold += line.qty;
        acc.revenue_total += line.amount_line;

        // Затраты уровня заказа — ровно один раз на (заказ, товар),
        // сколько бы раз пара ни повторялась во входном наборе
        if self.seen_order_costs.insert(OrderProductKey::of_line(line)) {
            acc.cost_total += line.unit_cost * line.qty as f64;
            acc.fee_total += line.sale_fee;
            acc.shipping_total += prorated_shipping;
        }

        // Реклама — ровно один раз на (товар, календарный день)
        if self.seen_ad_days.insert(AdSpendKey::of_line(line)) {
            acc.ads_total += line.ads_cost.unwrap_or(0.0);
        }

        acc.unit_price = line.unit_price;
        if !acc.distinct_prices.contains(&line.unit_price) {
            acc.distinct_prices.push(line.unit_price);
        }
        if !line.title.is_empty() {
            acc.title = line.title.clone();
        }
        if !line.status.is_empty() {
            acc.status = line.status.clone();
        }
        if line.available_stock > 0 {
            acc.available_stock = line.available_stock;
        }
    }

    /// Забрать накопители в порядке обнаружения товаров
    pub fn into_accumulators(mut self) -> Vec<ProductAccumulator> {
        self.discovery_order
            .drain(..)
            .filter_map(|key| self.by_product.remove(&key))
            .collect()
    }
}
