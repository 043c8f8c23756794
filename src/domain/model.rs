use crate::core::pricing::{format_price_with, DEFAULT_CURRENCY_SYMBOL};
use crate::domain::category::{ContactItemType, FaqCategory, ServiceCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ServiceId = String;
pub type PackageId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub price: Option<ServicePrice>,
    pub icon: String,
    pub category: ServiceCategory,
    pub is_popular: bool,
    pub estimated_duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn contains(&self, amount: i64) -> bool {
        self.min <= amount && amount <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrice {
    pub base_price: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default = "default_negotiable")]
    pub is_negotiable: bool,
    #[serde(default)]
    pub included_items: Vec<String>,
    #[serde(default)]
    pub additional_items: Vec<AdditionalItem>,
    #[serde(default)]
    pub note: String,
}

fn default_currency() -> String {
    "TWD".to_string()
}

fn default_negotiable() -> bool {
    true
}

impl ServicePrice {
    /// 以底價建立，其餘欄位採預設值（TWD、可議價）
    pub fn new(base_price: i64) -> Self {
        Self {
            base_price,
            currency: default_currency(),
            price_range: None,
            is_negotiable: true,
            included_items: Vec::new(),
            additional_items: Vec::new(),
            note: String::new(),
        }
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.price_range = Some(PriceRange { min, max });
        self
    }

    pub fn formatted_base_price(&self) -> String {
        format_price_with(DEFAULT_CURRENCY_SYMBOL, self.base_price)
    }

    pub fn formatted_price_range(&self) -> String {
        match self.price_range {
            Some(range) => format!(
                "{} - {}",
                format_price_with(DEFAULT_CURRENCY_SYMBOL, range.min),
                format_price_with(DEFAULT_CURRENCY_SYMBOL, range.max)
            ),
            None => self.formatted_base_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalItem {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub is_optional: bool,
}

impl AdditionalItem {
    pub fn formatted_price(&self) -> String {
        format_price_with(DEFAULT_CURRENCY_SYMBOL, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePackage {
    pub id: PackageId,
    pub title: String,
    pub description: String,
    /// 服務名稱（自由文字，不是 Service 的 id）
    pub included_services: Vec<String>,
    pub total_price: i64,
    pub original_price: i64,
    pub is_recommended: bool,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
}

impl ServicePackage {
    pub fn savings(&self) -> i64 {
        self.original_price.saturating_sub(self.total_price)
    }

    /// 折扣百分比，無條件捨去
    pub fn discount_percentage(&self) -> i64 {
        if self.original_price <= 0 {
            return 0;
        }
        let percentage = i128::from(self.savings()) * 100 / i128::from(self.original_price);
        i64::try_from(percentage).unwrap_or(i64::MAX)
    }

    pub fn formatted_price(&self) -> String {
        format_price_with(DEFAULT_CURRENCY_SYMBOL, self.total_price)
    }

    pub fn formatted_original_price(&self) -> String {
        format_price_with(DEFAULT_CURRENCY_SYMBOL, self.original_price)
    }

    pub fn formatted_savings(&self) -> String {
        format!("節省 {}", format_price_with(DEFAULT_CURRENCY_SYMBOL, self.savings()))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|until| until < now)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub phone: String,
    pub emergency_phone: String,
    pub line_id: String,
    pub email: String,
    pub address: String,
    pub website: String,
    pub business_hours: BusinessHours,
    pub location: LocationCoordinate,
    pub transportation_info: Vec<String>,
}

impl ContactInfo {
    pub fn value(&self, item: ContactItemType) -> &str {
        match item {
            ContactItemType::Phone => &self.phone,
            ContactItemType::Emergency => &self.emergency_phone,
            ContactItemType::Line => &self.line_id,
            ContactItemType::Email => &self.email,
            ContactItemType::Address => &self.address,
            ContactItemType::Website => &self.website,
        }
    }

    /// 依固定順序列出各聯絡方式
    pub fn items(&self) -> Vec<(ContactItemType, &str)> {
        ContactItemType::VARIANTS
            .into_iter()
            .map(|item| (item, self.value(item)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub office: String,
    pub weekend: String,
    pub holiday: String,
    pub emergency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    #[serde(default)]
    pub priority: i32,
}

/// 服務目錄：服務、套餐、常見問題與聯絡資訊
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub services: Vec<Service>,
    #[serde(default)]
    pub packages: Vec<ServicePackage>,
    #[serde(default)]
    pub faq_items: Vec<FaqItem>,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn package(total: i64, original: i64) -> ServicePackage {
        ServicePackage {
            id: "pkg".to_string(),
            title: "方案".to_string(),
            description: String::new(),
            included_services: vec![],
            total_price: total,
            original_price: original,
            is_recommended: false,
            valid_until: None,
        }
    }

    #[test]
    fn test_package_savings_and_discount() {
        let pkg = package(250_000, 320_000);
        assert_eq!(pkg.savings(), 70_000);
        assert_eq!(pkg.discount_percentage(), 21);
        assert_eq!(pkg.formatted_savings(), "節省 NT$70,000");
        assert_eq!(pkg.formatted_original_price(), "NT$320,000");
    }

    #[test]
    fn test_contact_items_follow_item_order() {
        let info = ContactInfo::default();
        let items = info.items();
        assert_eq!(items.len(), ContactItemType::VARIANTS.len());
        assert_eq!(items[0], (ContactItemType::Phone, info.phone.as_str()));
        assert_eq!(
            items[1],
            (ContactItemType::Emergency, info.emergency_phone.as_str())
        );
        assert_eq!(info.value(ContactItemType::Website), info.website);
    }

    #[test]
    fn test_discount_with_zero_original_price() {
        assert_eq!(package(0, 0).discount_percentage(), 0);
    }

    #[test]
    fn test_package_expiry() {
        let mut pkg = package(1, 2);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(!pkg.is_expired(now));

        pkg.valid_until = Some(Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
        assert!(pkg.is_expired(now));
    }

    #[test]
    fn test_price_range_formatting() {
        let price = ServicePrice::new(280_000).with_range(180_000, 380_000);
        assert_eq!(price.formatted_base_price(), "NT$280,000");
        assert_eq!(price.formatted_price_range(), "NT$180,000 - NT$380,000");

        let no_range = ServicePrice::new(5_000);
        assert_eq!(no_range.formatted_price_range(), "NT$5,000");
    }

    #[test]
    fn test_service_price_deserialize_defaults() {
        let price: ServicePrice = serde_json::from_str(r#"{"basePrice": 1000}"#).unwrap();
        assert_eq!(price.currency, "TWD");
        assert!(price.is_negotiable);
        assert!(price.price_range.is_none());
    }
}
