use crate::domain::category::{FaqCategory, ServiceCategory};
use crate::domain::model::{FaqItem, Service, ServicePackage};

pub const POPULAR_LIMIT: usize = 3;

/// 熱門服務，依目錄順序取前幾筆
pub fn popular_services(services: &[Service], limit: usize) -> Vec<&Service> {
    services.iter().filter(|s| s.is_popular).take(limit).collect()
}

pub fn services_by_category(services: &[Service], category: ServiceCategory) -> Vec<&Service> {
    match category {
        ServiceCategory::All => services.iter().collect(),
        _ => services.iter().filter(|s| s.category == category).collect(),
    }
}

/// 推薦套餐排在前面，同組內維持原順序
pub fn recommended_first(packages: &[ServicePackage]) -> Vec<&ServicePackage> {
    let (mut recommended, rest): (Vec<_>, Vec<_>) =
        packages.iter().partition(|p| p.is_recommended);
    recommended.extend(rest);
    recommended
}

/// 不分大小寫的包含比對，不做斷詞也不排序
pub fn matches_query(service: &Service, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(&service.title)
        || contains(&service.subtitle)
        || contains(&service.description)
        || service.features.iter().any(|f| contains(f))
}

pub fn search_services<'a, I>(services: I, query: &str) -> Vec<&'a Service>
where
    I: IntoIterator<Item = &'a Service>,
{
    if query.is_empty() {
        return services.into_iter().collect();
    }
    let needle = query.to_lowercase();
    services
        .into_iter()
        .filter(|s| matches_query(s, &needle))
        .collect()
}

/// 依 priority 由小到大排序（穩定排序）
pub fn faqs_by_priority(items: &[FaqItem]) -> Vec<&FaqItem> {
    let mut sorted: Vec<&FaqItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.priority);
    sorted
}

pub fn faqs_in_category(items: &[FaqItem], category: FaqCategory) -> Vec<&FaqItem> {
    faqs_by_priority(items)
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}
