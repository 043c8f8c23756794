//! 列舉型別與其顯示屬性對照表
//!
//! 每個列舉都以 `match` 對應到一組屬性，新增成員時編譯器會要求補上對照。

use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顯示用屬性：名稱與圖示代號
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub display_name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    #[default]
    All,
    Funeral,
    Ceremony,
    Cemetery,
    Memorial,
    Support,
}

impl ServiceCategory {
    pub const VARIANTS: [ServiceCategory; 6] = [
        ServiceCategory::All,
        ServiceCategory::Funeral,
        ServiceCategory::Ceremony,
        ServiceCategory::Cemetery,
        ServiceCategory::Memorial,
        ServiceCategory::Support,
    ];

    pub const fn attributes(self) -> Presentation {
        match self {
            ServiceCategory::All => Presentation {
                display_name: "全部服務",
                icon: "square.grid.2x2",
            },
            ServiceCategory::Funeral => Presentation {
                display_name: "殯葬服務",
                icon: "heart.fill",
            },
            ServiceCategory::Ceremony => Presentation {
                display_name: "告別式",
                icon: "person.3.fill",
            },
            ServiceCategory::Cemetery => Presentation {
                display_name: "墓園服務",
                icon: "house.fill",
            },
            ServiceCategory::Memorial => Presentation {
                display_name: "紀念服務",
                icon: "star.fill",
            },
            ServiceCategory::Support => Presentation {
                display_name: "支援服務",
                icon: "hands.sparkles.fill",
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::All => "all",
            ServiceCategory::Funeral => "funeral",
            ServiceCategory::Ceremony => "ceremony",
            ServiceCategory::Cemetery => "cemetery",
            ServiceCategory::Memorial => "memorial",
            ServiceCategory::Support => "support",
        }
    }

    pub fn display_name(self) -> &'static str {
        self.attributes().display_name
    }

    pub fn icon(self) -> &'static str {
        self.attributes().icon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    #[default]
    General,
    Inquiry,
    Emergency,
    Appointment,
    Complaint,
    Suggestion,
}

impl ContactSubject {
    pub const VARIANTS: [ContactSubject; 6] = [
        ContactSubject::General,
        ContactSubject::Inquiry,
        ContactSubject::Emergency,
        ContactSubject::Appointment,
        ContactSubject::Complaint,
        ContactSubject::Suggestion,
    ];

    pub const fn attributes(self) -> Presentation {
        match self {
            ContactSubject::General => Presentation {
                display_name: "一般諮詢",
                icon: "questionmark.circle",
            },
            ContactSubject::Inquiry => Presentation {
                display_name: "服務詢問",
                icon: "info.circle",
            },
            ContactSubject::Emergency => Presentation {
                display_name: "緊急需求",
                icon: "exclamationmark.triangle",
            },
            ContactSubject::Appointment => Presentation {
                display_name: "預約服務",
                icon: "calendar",
            },
            ContactSubject::Complaint => Presentation {
                display_name: "客訴反映",
                icon: "hand.raised",
            },
            ContactSubject::Suggestion => Presentation {
                display_name: "建議回饋",
                icon: "lightbulb",
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ContactSubject::General => "general",
            ContactSubject::Inquiry => "inquiry",
            ContactSubject::Emergency => "emergency",
            ContactSubject::Appointment => "appointment",
            ContactSubject::Complaint => "complaint",
            ContactSubject::Suggestion => "suggestion",
        }
    }

    pub fn display_name(self) -> &'static str {
        self.attributes().display_name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Anytime,
}

impl PreferredTime {
    pub const VARIANTS: [PreferredTime; 4] = [
        PreferredTime::Morning,
        PreferredTime::Afternoon,
        PreferredTime::Evening,
        PreferredTime::Anytime,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            PreferredTime::Morning => "上午 (9:00-12:00)",
            PreferredTime::Afternoon => "下午 (13:00-17:00)",
            PreferredTime::Evening => "晚上 (18:00-21:00)",
            PreferredTime::Anytime => "任何時間",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PreferredTime::Morning => "morning",
            PreferredTime::Afternoon => "afternoon",
            PreferredTime::Evening => "evening",
            PreferredTime::Anytime => "anytime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    General,
    Service,
    Pricing,
    Process,
    Emergency,
}

impl FaqCategory {
    pub const VARIANTS: [FaqCategory; 5] = [
        FaqCategory::General,
        FaqCategory::Service,
        FaqCategory::Pricing,
        FaqCategory::Process,
        FaqCategory::Emergency,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            FaqCategory::General => "一般問題",
            FaqCategory::Service => "服務相關",
            FaqCategory::Pricing => "價格資訊",
            FaqCategory::Process => "流程說明",
            FaqCategory::Emergency => "緊急狀況",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Service => "service",
            FaqCategory::Pricing => "pricing",
            FaqCategory::Process => "process",
            FaqCategory::Emergency => "emergency",
        }
    }
}

/// 聯絡方式項目（電話、LINE、信箱…）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactItemType {
    Phone,
    Emergency,
    Line,
    Email,
    Address,
    Website,
}

impl ContactItemType {
    pub const VARIANTS: [ContactItemType; 6] = [
        ContactItemType::Phone,
        ContactItemType::Emergency,
        ContactItemType::Line,
        ContactItemType::Email,
        ContactItemType::Address,
        ContactItemType::Website,
    ];

    pub const fn attributes(self) -> Presentation {
        match self {
            ContactItemType::Phone => Presentation {
                display_name: "服務專線",
                icon: "phone.fill",
            },
            ContactItemType::Emergency => Presentation {
                display_name: "24小時緊急專線",
                icon: "phone.badge.plus",
            },
            ContactItemType::Line => Presentation {
                display_name: "LINE官方帳號",
                icon: "message.fill",
            },
            ContactItemType::Email => Presentation {
                display_name: "電子信箱",
                icon: "envelope.fill",
            },
            ContactItemType::Address => Presentation {
                display_name: "公司地址",
                icon: "location.fill",
            },
            ContactItemType::Website => Presentation {
                display_name: "官方網站",
                icon: "globe",
            },
        }
    }

    pub const fn display_name(self) -> &'static str {
        self.attributes().display_name
    }

    /// 可直接撥打或開啟的項目
    pub const fn is_actionable(self) -> bool {
        match self {
            ContactItemType::Phone
            | ContactItemType::Emergency
            | ContactItemType::Line
            | ContactItemType::Email => true,
            ContactItemType::Address | ContactItemType::Website => false,
        }
    }
}

/// 依 `as_str` 比對，不分大小寫
fn parse_variant<T: Copy>(
    kind: &str,
    value: &str,
    variants: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T> {
    let needle = value.trim().to_lowercase();
    variants
        .iter()
        .copied()
        .find(|v| as_str(*v) == needle)
        .ok_or_else(|| {
            let expected: Vec<&str> = variants.iter().map(|v| as_str(*v)).collect();
            AppError::ValidationError {
                message: format!(
                    "Unknown {} '{}'. Expected one of: {}",
                    kind,
                    value,
                    expected.join(", ")
                ),
            }
        })
}

impl FromStr for ServiceCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("service category", s, &Self::VARIANTS, Self::as_str)
    }
}

impl FromStr for ContactSubject {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("contact subject", s, &Self::VARIANTS, Self::as_str)
    }
}

impl FromStr for PreferredTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("preferred time", s, &Self::VARIANTS, Self::as_str)
    }
}

impl FromStr for FaqCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant("FAQ category", s, &Self::VARIANTS, Self::as_str)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_category_parse() {
        assert_eq!("funeral".parse::<ServiceCategory>().unwrap(), ServiceCategory::Funeral);
        assert_eq!(" ALL ".parse::<ServiceCategory>().unwrap(), ServiceCategory::All);
        assert!("wedding".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_preferred_time_parse() {
        for time in PreferredTime::VARIANTS {
            assert_eq!(time.as_str().parse::<PreferredTime>().unwrap(), time);
        }
        assert_eq!("Evening".parse::<PreferredTime>().unwrap(), PreferredTime::Evening);
        assert!(matches!(
            "midnight".parse::<PreferredTime>(),
            Err(AppError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_every_variant_has_display_name_and_icon() {
        for category in ServiceCategory::VARIANTS {
            assert!(!category.display_name().is_empty());
            assert!(!category.icon().is_empty());
        }
        for subject in ContactSubject::VARIANTS {
            assert!(!subject.attributes().icon.is_empty());
        }
        for item in ContactItemType::VARIANTS {
            assert!(!item.attributes().display_name.is_empty());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_raw_values() {
        let json = serde_json::to_string(&ServiceCategory::Cemetery).unwrap();
        assert_eq!(json, "\"cemetery\"");
        let subject: ContactSubject = serde_json::from_str("\"appointment\"").unwrap();
        assert_eq!(subject, ContactSubject::Appointment);
    }

    #[test]
    fn test_contact_item_actionable() {
        assert!(ContactItemType::Line.is_actionable());
        assert!(!ContactItemType::Website.is_actionable());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ContactSubject::default(), ContactSubject::General);
        assert_eq!(PreferredTime::default(), PreferredTime::Anytime);
        assert_eq!(ServiceCategory::default(), ServiceCategory::All);
    }
}
