use crate::domain::category::{ContactSubject, PreferredTime};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// 手機 09 開頭共十碼；市話為區碼 2-8 加 7 到 8 碼，前面的 0 可省略
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:09[0-9]{8}|0?[2-8][0-9]{7,8})$").expect("phone pattern is a valid regex")
});

pub const INQUIRY_STATUS_PENDING: &str = "pending";

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// 聯絡表單
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
    pub is_urgent: bool,
    pub preferred_contact_time: PreferredTime,
    pub agreed_to_terms: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// 轉成送往雲端文件庫的諮詢紀錄
    pub fn to_inquiry(&self, timestamp: DateTime<Utc>) -> Inquiry {
        Inquiry {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            inquiry_type: self.subject.display_name().to_string(),
            message: self.message.clone(),
            timestamp,
            status: INQUIRY_STATUS_PENDING.to_string(),
        }
    }
}

fn invalid(field: &str, reason: &str) -> AppError {
    AppError::InvalidForm {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(invalid("name", "name is required"));
        }
        if self.phone.is_empty() {
            return Err(invalid("phone", "phone is required"));
        }
        if self.message.is_empty() {
            return Err(invalid("message", "message is required"));
        }
        if !self.agreed_to_terms {
            return Err(invalid("agreedToTerms", "terms must be accepted"));
        }
        if !is_valid_phone(&self.phone) {
            return Err(invalid("phone", "not a valid local phone number"));
        }
        Ok(())
    }
}

/// 送出的諮詢紀錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub inquiry_type: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
}

/// 從文件庫讀回的諮詢紀錄，欄位可能缺漏
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "type", default)]
    pub inquiry_type: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(phone: &str) -> ContactForm {
        ContactForm {
            name: "王小明".to_string(),
            phone: phone.to_string(),
            message: "想了解告別式規劃".to_string(),
            agreed_to_terms: true,
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_phone_numbers() {
        assert!(!filled_form("123").is_valid());
        assert!(filled_form("0912345678").is_valid());
        assert!(filled_form("0312345678").is_valid());
        assert!(!filled_form("02-12345").is_valid());
    }

    #[test]
    fn test_landline_without_leading_zero() {
        assert!(is_valid_phone("39561234"));
        assert!(is_valid_phone("0227001234"));
        assert!(!is_valid_phone("0127001234"));
        assert!(!is_valid_phone("09123456789"));
        assert!(!is_valid_phone(" 0912345678"));
    }

    #[test]
    fn test_required_fields_and_terms() {
        let mut form = filled_form("0912345678");
        form.agreed_to_terms = false;
        assert!(!form.is_valid());

        let mut form = filled_form("0912345678");
        form.name.clear();
        match form.validate() {
            Err(AppError::InvalidForm { field, .. }) => assert_eq!(field, "name"),
            other => panic!("unexpected result: {:?}", other),
        }

        let mut form = filled_form("0912345678");
        form.message.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let mut form = filled_form("0912345678");
        form.subject = ContactSubject::Emergency;
        form.preferred_contact_time = PreferredTime::Evening;
        form.is_urgent = true;

        form.reset();

        assert!(form.is_empty());
        assert_eq!(form.subject, ContactSubject::General);
        assert_eq!(form.preferred_contact_time, PreferredTime::Anytime);
        assert!(!form.agreed_to_terms);
    }

    #[test]
    fn test_inquiry_record_shape() {
        let mut form = filled_form("0912345678");
        form.subject = ContactSubject::Appointment;
        let inquiry = form.to_inquiry(Utc::now());

        let json = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(json["type"], "預約服務");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["name"], "王小明");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_draft_serialization_uses_camel_case() {
        let form = filled_form("0912345678");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["agreedToTerms"], true);
        assert_eq!(json["preferredContactTime"], "anytime");
    }
}
