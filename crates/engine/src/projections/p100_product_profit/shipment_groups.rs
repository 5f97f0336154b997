use contracts::domain::a001_order_line::{ProductKey, RawOrderLine};
use std::collections::HashMap;

use crate::shared::format::trunc2;

/// Группа строк одного отправления
///
/// Отправление определяется по RawOrderLine::shipment_key — каждая
/// строка попадает ровно в одну группу, включая одиночные отправления.
#[derive(Debug, Clone)]
pub struct ShipmentGroup {
    /// Ключ отправления
    pub shipment_key: String,
    /// Стоимость доставки группы: максимум ненулевых значений по строкам
    /// (обычно заполнена только одна строка отправления)
    pub total_shipping: f64,
    /// Ключи товаров в порядке обнаружения
    pub products: Vec<ProductKey>,
    /// Количество по товару внутри группы
    pub qty_by_product: HashMap<ProductKey, i64>,
    /// Индексы строк-участников во входном наборе
    pub line_indexes: Vec<usize>,
}

impl ShipmentGroup {
    fn new(shipment_key: String) -> Self {
        Self {
            shipment_key,
            total_shipping: 0.0,
            products: Vec::new(),
            qty_by_product: HashMap::new(),
            line_indexes: Vec::new(),
        }
    }

    /// Доли доставки по товарам группы в порядке обнаружения.
    ///
    /// Равная доля trunc2(S/k) первым k-1 товарам, остаток — последнему.
    /// Сумма долей равна total_shipping точно, без потери копеек на
    /// делении.
    pub fn product_shares(&self) -> Vec<(ProductKey, f64)> {
        let k = self.products.len();
        if k == 0 || self.total_shipping == 0.0 {
            return self
                .products
                .iter()
                .map(|p| (p.clone(), 0.0))
                .collect();
        }

        let share = trunc2(self.total_shipping / k as f64);
        self.products
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let assigned = if i + 1 == k {
                    // Остаток последнему товару
                    self.total_shipping - share * (k as f64 - 1.0)
                } else {
                    share
                };
                (product.clone(), assigned)
            })
            .collect()
    }
}

/// Сгруппировать сырые строки по отправлениям
pub fn group_shipments(lines: &[RawOrderLine]) -> Vec<ShipmentGroup> {
    let mut discovery_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, ShipmentGroup> = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let key = line.shipment_key();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            discovery_order.push(key.clone());
            ShipmentGroup::new(key)
        });

        let shipping = line.shipping_cost.unwrap_or(0.0);
        if shipping > group.total_shipping {
            group.total_shipping = shipping;
        }

        let product = ProductKey::of_line(line);
        if !group.products.contains(&product) {
            group.products.push(product.clone());
        }
        if line.qty > 0 {
            *group.qty_by_product.entry(product).or_insert(0) += line.qty;
        }
        group.line_indexes.push(idx);
    }

    discovery_order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .collect()
}

/// Прорейтировать доставку отправлений на строки входного набора
///
/// Каждой строке назначается удельная доставка: доля её товара,
/// делённая на количество этого товара внутри группы (при qty > 0),
/// иначе доля целиком.
pub fn prorate_shipping(lines: &[RawOrderLine], groups: &[ShipmentGroup]) -> Vec<f64> {
    let mut prorated = vec![0.0; lines.len()];

    for group in groups {
        if group.products.is_empty() || group.total_shipping == 0.0 {
            continue;
        }

        let shares: HashMap<ProductKey, f64> = group.product_shares().into_iter().collect();

        for &idx in &group.line_indexes {
            let line = &lines[idx];
            let product = ProductKey::of_line(line);
            let assigned = shares.get(&product).copied().unwrap_or(0.0);
            let qty_in_group = group.qty_by_product.get(&product).copied().unwrap_or(0);

            prorated[idx] = if line.qty > 0 && qty_in_group > 0 {
                assigned / qty_in_group as f64
            } else {
                assigned
            };
        }
    }

    prorated
}
