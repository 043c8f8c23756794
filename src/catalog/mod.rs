//! 冬山生命禮儀的預設服務目錄
//!
//! 內容固定，載入後不會被修改。外部來源的目錄在採用前必須通過 [`Catalog::validate`]。

mod seed;

use crate::domain::model::Catalog;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use std::collections::HashSet;

impl Catalog {
    pub fn sample() -> Self {
        Self {
            services: seed::sample_services(),
            packages: seed::sample_packages(),
            faq_items: seed::sample_faqs(),
            contact_info: seed::default_contact_info(),
        }
    }
}

fn reject(message: String) -> AppError {
    AppError::CatalogValidation { message }
}

impl Validate for Catalog {
    /// 檢查價格區間、套餐價格與 id 是否重複
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id.as_str()) {
                return Err(reject(format!("duplicate service id '{}'", service.id)));
            }
            let Some(price) = &service.price else {
                continue;
            };
            if let Some(range) = price.price_range {
                if range.min > range.max {
                    return Err(reject(format!(
                        "service '{}' has price range {}..{} with min above max",
                        service.id, range.min, range.max
                    )));
                }
                if !range.contains(price.base_price) {
                    return Err(reject(format!(
                        "service '{}' base price {} lies outside {}..{}",
                        service.id, price.base_price, range.min, range.max
                    )));
                }
            }
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            if !seen.insert(package.id.as_str()) {
                return Err(reject(format!("duplicate package id '{}'", package.id)));
            }
            if package.total_price < 0 {
                return Err(reject(format!(
                    "package '{}' has negative total price {}",
                    package.id, package.total_price
                )));
            }
            if package.total_price > package.original_price {
                return Err(reject(format!(
                    "package '{}' total price {} exceeds original price {}",
                    package.id, package.total_price, package.original_price
                )));
            }
        }

        Ok(())
    }
}
