use crate::domain::model::Service;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "NT$";

/// 加上千分位，例如 1234567 -> "1,234,567"
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_price_with(symbol: &str, amount: i64) -> String {
    format!("{}{}", symbol, group_thousands(amount))
}

/// 各服務底價加總，沒有標價的服務以 0 計
pub fn estimated_price<'a, I>(services: I) -> i64
where
    I: IntoIterator<Item = &'a Service>,
{
    services
        .into_iter()
        .filter_map(|service| service.price.as_ref())
        .fold(0i64, |total, price| total.saturating_add(price.base_price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Catalog, ServicePrice};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(280_000), "280,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price_with(DEFAULT_CURRENCY_SYMBOL, 150_000), "NT$150,000");
    }

    #[test]
    fn test_estimated_price_skips_missing_prices() {
        let mut services = Catalog::sample().services;
        services.truncate(3);
        services[0].price = Some(ServicePrice::new(100_000));
        services[1].price = None;
        services[2].price = Some(ServicePrice::new(50_000));

        assert_eq!(estimated_price(&services), 150_000);
        assert_eq!(estimated_price(std::iter::empty::<&Service>()), 0);
    }

    #[test]
    fn test_estimated_price_saturates_instead_of_overflowing() {
        let mut services = Catalog::sample().services;
        services.truncate(2);
        services[0].price = Some(ServicePrice::new(i64::MAX - 1));
        services[1].price = Some(ServicePrice::new(10));

        assert_eq!(estimated_price(&services), i64::MAX);
    }
}
