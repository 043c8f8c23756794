//! 應用程式狀態：服務目錄、搜尋篩選、聯絡表單與送出流程
//!
//! 由呼叫端建立並持有，所有修改都經過 `&mut self`。非同步操作在呼叫端的 task 上執行；
//! 若 future 在完成前被丟棄，載入或送出中的旗標會被還原。

use crate::adapters::{StaticCatalog, SystemClock, TracingEventSink, TracingNotifier};
use crate::config::UiConfig;
use crate::core::debounce::{Debouncer, DEFAULT_SEARCH_DEBOUNCE};
use crate::core::pricing::{self, DEFAULT_CURRENCY_SYMBOL};
use crate::core::search;
use crate::domain::category::{FaqCategory, ServiceCategory};
use crate::domain::form::{ContactForm, Inquiry};
use crate::domain::model::{Catalog, ContactInfo, FaqItem, Service, ServiceId, ServicePackage};
use crate::domain::ports::{
    AppEvent, CatalogSource, Clock, EventSink, InquiryGateway, LocalStore, Notification, Notifier,
};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use std::sync::Arc;
use std::time::Duration;

pub const INVALID_FORM_MESSAGE: &str = "請填寫所有必要欄位";
pub const EMERGENCY_REMINDER_DELAY: Duration = Duration::from_secs(60);
const COMPANY_NAME: &str = "冬山生命禮儀公司";

/// 顯示相關設定
#[derive(Debug, Clone)]
pub struct UiSettings {
    pub search_debounce: Duration,
    pub currency_symbol: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl From<&UiConfig> for UiSettings {
    fn from(config: &UiConfig) -> Self {
        Self {
            search_debounce: config.search_debounce(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}

pub struct AppState<G: InquiryGateway, S: LocalStore> {
    gateway: G,
    store: S,
    catalog_source: Box<dyn CatalogSource>,
    events: Box<dyn EventSink>,
    notifier: Box<dyn Notifier>,
    clock: Arc<dyn Clock>,
    settings: UiSettings,

    services: Vec<Service>,
    packages: Vec<ServicePackage>,
    contact_info: ContactInfo,
    faq_items: Vec<FaqItem>,
    is_loading: bool,
    error_message: Option<String>,
    persistence_warning: Option<String>,

    search_text: String,
    applied_search: String,
    search_debouncer: Debouncer<String>,
    selected_category: ServiceCategory,

    contact_form: ContactForm,
    is_submitting: bool,
    favorites: Vec<ServiceId>,
}

impl<G: InquiryGateway, S: LocalStore> AppState<G, S> {
    pub fn new(gateway: G, store: S) -> Self {
        Self::with_settings(gateway, store, UiSettings::default())
    }

    pub fn with_settings(gateway: G, store: S, settings: UiSettings) -> Self {
        let mut state = Self {
            gateway,
            store,
            catalog_source: Box::new(StaticCatalog::new()),
            events: Box::new(TracingEventSink),
            notifier: Box::new(TracingNotifier),
            clock: Arc::new(SystemClock),
            search_debouncer: Debouncer::new(settings.search_debounce),
            settings,
            services: Vec::new(),
            packages: Vec::new(),
            contact_info: ContactInfo::default(),
            faq_items: Vec::new(),
            is_loading: false,
            error_message: None,
            persistence_warning: None,
            search_text: String::new(),
            applied_search: String::new(),
            selected_category: ServiceCategory::All,
            contact_form: ContactForm::default(),
            is_submitting: false,
            favorites: Vec::new(),
        };
        let favorites = state.store.load_favorites();
        state.favorites = state.persisted("load favorites", favorites).unwrap_or_default();
        state
    }

    pub fn with_catalog_source(mut self, source: impl CatalogSource + 'static) -> Self {
        self.catalog_source = Box::new(source);
        self
    }

    pub fn with_event_sink(mut self, events: impl EventSink + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    // ---- 讀取 ----

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn packages(&self) -> &[ServicePackage] {
        &self.packages
    }

    pub fn contact_info(&self) -> &ContactInfo {
        &self.contact_info
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// 本機儲存失敗時的提示，不影響其他操作
    pub fn persistence_warning(&self) -> Option<&str> {
        self.persistence_warning.as_deref()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---- 目錄載入 ----

    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    /// 成功時替換目錄；失敗時保留舊資料並設定錯誤訊息
    pub fn complete_load(&mut self, result: Result<Catalog>) -> Result<()> {
        self.is_loading = false;
        match result {
            Ok(catalog) => {
                tracing::info!(
                    "📚 Catalog loaded: {} services, {} packages, {} FAQs",
                    catalog.services.len(),
                    catalog.packages.len(),
                    catalog.faq_items.len()
                );
                self.services = catalog.services;
                self.packages = catalog.packages;
                self.faq_items = catalog.faq_items;
                self.contact_info = catalog.contact_info;
                Ok(())
            }
            Err(e) => {
                tracing::error!("❌ Catalog load failed: {}", e);
                self.error_message = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }

    pub async fn load_catalog(&mut self) -> Result<()> {
        self.begin_load();
        let mut guard = LoadGuard {
            state: self,
            settled: false,
        };
        let result = guard.state.catalog_source.fetch().await;
        guard.settled = true;
        guard.state.complete_load(result)
    }

    pub async fn refresh_data(&mut self) -> Result<()> {
        self.load_catalog().await
    }

    pub fn refresh_contact_info(&mut self) {
        self.contact_info = ContactInfo::default();
    }

    // ---- 服務查詢 ----

    pub fn popular_services(&self) -> Vec<&Service> {
        search::popular_services(&self.services, search::POPULAR_LIMIT)
    }

    pub fn services_by_category(&self, category: ServiceCategory) -> Vec<&Service> {
        search::services_by_category(&self.services, category)
    }

    pub fn service_packages(&self) -> Vec<&ServicePackage> {
        search::recommended_first(&self.packages)
    }

    pub fn search_services(&self, query: &str) -> Vec<&Service> {
        search::search_services(&self.services, query)
    }

    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn faq_items(&self) -> Vec<&FaqItem> {
        search::faqs_by_priority(&self.faq_items)
    }

    pub fn faqs_by_category(&self, category: FaqCategory) -> Vec<&FaqItem> {
        search::faqs_in_category(&self.faq_items, category)
    }

    // ---- 搜尋與篩選 ----

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// 目前生效（已過 debounce）的搜尋字串
    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    pub fn selected_category(&self) -> ServiceCategory {
        self.selected_category
    }

    pub fn set_selected_category(&mut self, category: ServiceCategory) {
        self.selected_category = category;
    }

    /// 記錄輸入並重新計時，尚不套用
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search_text = text.clone();
        self.search_debouncer.push(text, self.clock.now());
    }

    /// 輸入閒置超過 debounce 時間才套用；有套用時回傳 true
    pub fn poll_search(&mut self) -> bool {
        match self.search_debouncer.poll(self.clock.now()) {
            Some(text) => {
                tracing::debug!("Applying search text '{}'", text);
                self.applied_search = text;
                true
            }
            None => false,
        }
    }

    pub async fn settle_search(&mut self) -> bool {
        match self.search_debouncer.settle(self.clock.as_ref()).await {
            Some(text) => {
                self.applied_search = text;
                true
            }
            None => false,
        }
    }

    /// 依目前類別與已套用的搜尋字串篩選
    pub fn filtered_services(&self) -> Vec<&Service> {
        let by_category = search::services_by_category(&self.services, self.selected_category);
        search::search_services(by_category, &self.applied_search)
    }

    // ---- 聯絡表單 ----

    pub fn contact_form(&self) -> &ContactForm {
        &self.contact_form
    }

    pub fn contact_form_mut(&mut self) -> &mut ContactForm {
        &mut self.contact_form
    }

    pub fn reset_contact_form(&mut self) {
        self.contact_form.reset();
    }

    /// 驗證並進入送出中狀態，回傳要送出的紀錄
    pub fn begin_submission(&mut self) -> Result<Inquiry> {
        if self.is_submitting {
            tracing::warn!("Ignoring contact form submission while another is in flight");
            return Err(AppError::SubmissionInProgress);
        }
        if let Err(e) = self.contact_form.validate() {
            tracing::debug!("Contact form rejected: {}", e);
            self.error_message = Some(INVALID_FORM_MESSAGE.to_string());
            return Err(e);
        }
        self.is_submitting = true;
        self.error_message = None;
        Ok(self.contact_form.to_inquiry(self.clock.utc_now()))
    }

    pub fn complete_submission(&mut self, result: Result<()>) -> Result<()> {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                self.track_form_submission(&self.contact_form);
                self.contact_form.reset();
                let cleared = self.store.clear_draft();
                self.persisted("clear draft", cleared);
                self.notifier.notify(Notification {
                    title: "表單已送出".to_string(),
                    body: "我們會盡快與您聯絡".to_string(),
                    delay: Duration::ZERO,
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    "❌ Inquiry submission failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                self.error_message = Some(e.user_friendly_message());
                Err(e)
            }
        }
    }

    pub async fn submit_contact_form(&mut self) -> Result<()> {
        let inquiry = self.begin_submission()?;
        let mut guard = SubmissionGuard {
            state: self,
            settled: false,
        };
        let result = guard.state.gateway.submit(&inquiry).await;
        guard.settled = true;
        guard.state.complete_submission(result)
    }

    // ---- 草稿 ----

    pub fn save_draft(&mut self) {
        let saved = self.store.save_draft(&self.contact_form);
        self.persisted("save draft", saved);
    }

    /// 有草稿就載入表單，回傳是否載入
    pub fn restore_draft(&mut self) -> bool {
        let loaded = self.store.load_draft();
        match self.persisted("load draft", loaded).flatten() {
            Some(form) => {
                self.contact_form = form;
                true
            }
            None => false,
        }
    }

    pub fn clear_draft(&mut self) {
        let cleared = self.store.clear_draft();
        self.persisted("clear draft", cleared);
    }

    // ---- 收藏 ----

    pub fn favorites(&self) -> &[ServiceId] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn add_favorite(&mut self, id: &str) {
        if !self.is_favorite(id) {
            self.favorites.push(id.to_string());
            self.persist_favorites();
        }
    }

    pub fn remove_favorite(&mut self, id: &str) {
        let before = self.favorites.len();
        self.favorites.retain(|f| f != id);
        if self.favorites.len() != before {
            self.persist_favorites();
        }
    }

    /// 切換收藏，回傳切換後是否為收藏
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.is_favorite(id) {
            self.remove_favorite(id);
            false
        } else {
            self.add_favorite(id);
            true
        }
    }

    pub fn favorite_services(&self) -> Vec<&Service> {
        self.favorites
            .iter()
            .filter_map(|id| self.find_service(id))
            .collect()
    }

    fn persist_favorites(&mut self) {
        let saved = self.store.save_favorites(&self.favorites);
        self.persisted("save favorites", saved);
    }

    /// 本機儲存失敗只記錄，不中斷流程
    fn persisted<T>(&mut self, action: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("⚠️ Local store failed to {}: {}", action, e);
                self.persistence_warning = Some(e.user_friendly_message());
                None
            }
        }
    }

    // ---- 行為追蹤 ----

    pub fn track_service_view(&self, service: &Service) {
        self.events.record(AppEvent::ServiceViewed {
            service_id: service.id.clone(),
            title: service.title.clone(),
        });
    }

    pub fn track_form_submission(&self, form: &ContactForm) {
        self.events.record(AppEvent::FormSubmitted {
            subject: form.subject.display_name().to_string(),
            is_urgent: form.is_urgent,
        });
    }

    pub fn track_emergency_call(&self) {
        self.events.record(AppEvent::EmergencyCall);
    }

    /// 一分鐘後提醒緊急專線
    pub fn schedule_emergency_reminder(&self) {
        self.notifier.notify(Notification {
            title: COMPANY_NAME.to_string(),
            body: format!(
                "24小時緊急專線：{}，我們隨時為您服務",
                self.contact_info.emergency_phone
            ),
            delay: EMERGENCY_REMINDER_DELAY,
        });
    }

    // ---- 價格 ----

    pub fn format_price(&self, amount: i64) -> String {
        pricing::format_price_with(&self.settings.currency_symbol, amount)
    }

    pub fn estimated_price<'a, I>(&self, services: I) -> i64
    where
        I: IntoIterator<Item = &'a Service>,
    {
        pricing::estimated_price(services)
    }
}

struct LoadGuard<'a, G: InquiryGateway, S: LocalStore> {
    state: &'a mut AppState<G, S>,
    settled: bool,
}

impl<G: InquiryGateway, S: LocalStore> Drop for LoadGuard<'_, G, S> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Catalog load cancelled");
            self.state.is_loading = false;
        }
    }
}

struct SubmissionGuard<'a, G: InquiryGateway, S: LocalStore> {
    state: &'a mut AppState<G, S>,
    settled: bool,
}

impl<G: InquiryGateway, S: LocalStore> Drop for SubmissionGuard<'_, G, S> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!("Inquiry submission cancelled");
            self.state.is_submitting = false;
        }
    }
}
