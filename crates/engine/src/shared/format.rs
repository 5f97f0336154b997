/// Усекает значение до 2 знаков после запятой (в сторону нуля)
///
/// Политика расчёта прибыли — усечение, не округление.
///
/// # Примеры
/// ```
/// use engine::shared::format::trunc2;
/// assert_eq!(trunc2(9.999), 9.99);
/// assert_eq!(trunc2(-9.999), -9.99);
/// assert_eq!(trunc2(15.0), 15.0);
/// ```
pub fn trunc2(value: f64) -> f64 {
    (value * 100.0).trunc() / 100.0
}

/// Деление с защитой от нуля и нечисловых результатов:
/// при нулевом знаменателе возвращает 0
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

/// Доля в процентах с защитой знаменателя
pub fn percent_of(part: f64, whole: f64) -> f64 {
    safe_div(part, whole) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trunc2_never_rounds_up() {
        assert_eq!(trunc2(9.999), 9.99);
        assert_eq!(trunc2(3.3333333), 3.33);
        assert_eq!(trunc2(15.0), 15.0);
        assert_eq!(trunc2(0.0), 0.0);
    }

    #[test]
    fn test_trunc2_negative_toward_zero() {
        assert_eq!(trunc2(-9.999), -9.99);
        assert_eq!(trunc2(-0.001), 0.0);
    }

    #[test]
    fn test_safe_div_zero_denominator() {
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
        assert_eq!(safe_div(10.0, -0.0), 0.0);
    }

    #[test]
    fn test_safe_div_regular() {
        assert_eq!(safe_div(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(25.0, 100.0), 25.0);
        assert_eq!(percent_of(25.0, 0.0), 0.0);
    }
}
