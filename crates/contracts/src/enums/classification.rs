use serde::{Deserialize, Serialize};

/// Классификация риска по остаткам
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockRisk {
    Low,
    Medium,
    High,
}

impl StockRisk {
    /// Получить код классификации
    pub fn code(&self) -> &'static str {
        match self {
            StockRisk::Low => "low",
            StockRisk::Medium => "medium",
            StockRisk::High => "high",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            StockRisk::Low => "Низкий",
            StockRisk::Medium => "Средний",
            StockRisk::High => "Высокий",
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "low" => Some(StockRisk::Low),
            "medium" => Some(StockRisk::Medium),
            "high" => Some(StockRisk::High),
            _ => None,
        }
    }

    /// Базовый уровень — всё, что выше, считается «рисковым»
    pub fn is_elevated(&self) -> bool {
        !matches!(self, StockRisk::Low)
    }
}

/// ABC-классификация товара по доле в выручке
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
}

impl AbcClass {
    pub fn code(&self) -> &'static str {
        match self {
            AbcClass::A => "A",
            AbcClass::B => "B",
            AbcClass::C => "C",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" | "a" => Some(AbcClass::A),
            "B" | "b" => Some(AbcClass::B),
            "C" | "c" => Some(AbcClass::C),
            _ => None,
        }
    }
}
