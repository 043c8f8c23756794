use crate::domain::form::{ContactForm, Inquiry, InquiryRecord};
use crate::domain::model::{Catalog, ServiceId};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

pub const DRAFT_KEY: &str = "contactFormDraft";
pub const FAVORITES_KEY: &str = "favoriteServices";

/// 接收諮詢表單的外部系統
#[async_trait]
pub trait InquiryGateway: Send + Sync {
    async fn submit(&self, inquiry: &Inquiry) -> Result<()>;
}

/// 後台查詢已送出的諮詢，新的在前
#[async_trait]
pub trait InquiryLog: Send + Sync {
    async fn list_inquiries(&self) -> Result<Vec<InquiryRecord>>;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Catalog>;
}

/// 本機 key-value 儲存
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>>;
    fn set(&self, key: &str, value: serde_json::Value) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// 表單草稿與收藏清單
pub trait LocalStore: Send + Sync {
    fn save_draft(&self, form: &ContactForm) -> Result<()>;
    fn load_draft(&self) -> Result<Option<ContactForm>>;
    fn clear_draft(&self) -> Result<()>;
    fn save_favorites(&self, ids: &[ServiceId]) -> Result<()>;
    fn load_favorites(&self) -> Result<Vec<ServiceId>>;
}

impl<T: KeyValueStore> LocalStore for T {
    fn save_draft(&self, form: &ContactForm) -> Result<()> {
        self.set(DRAFT_KEY, serde_json::to_value(form)?)
    }

    fn load_draft(&self) -> Result<Option<ContactForm>> {
        let Some(value) = self.get(DRAFT_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(form) => Ok(Some(form)),
            Err(e) => {
                tracing::warn!("Discarding unreadable contact form draft: {}", e);
                Ok(None)
            }
        }
    }

    fn clear_draft(&self) -> Result<()> {
        self.remove(DRAFT_KEY)
    }

    fn save_favorites(&self, ids: &[ServiceId]) -> Result<()> {
        self.set(FAVORITES_KEY, serde_json::to_value(ids)?)
    }

    fn load_favorites(&self) -> Result<Vec<ServiceId>> {
        let Some(value) = self.get(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        serde_json::from_value(value).map_err(|e| AppError::StoreError {
            key: FAVORITES_KEY.to_string(),
            message: e.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ServiceViewed { service_id: ServiceId, title: String },
    FormSubmitted { subject: String, is_urgent: bool },
    EmergencyCall,
}

/// 使用行為紀錄，不回傳結果也不回報錯誤
pub trait EventSink: Send + Sync {
    fn record(&self, event: AppEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// 多久後提醒；`Duration::ZERO` 表示立即
    pub delay: Duration,
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// 時間來源；等待也經過這裡，測試用時鐘可以直接推進
#[async_trait]
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
