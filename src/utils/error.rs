use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Gateway request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Gateway rejected inquiry (status {status}): {message}")]
    GatewayRejected { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid contact form field '{field}': {reason}")]
    InvalidForm { field: String, reason: String },

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Catalog validation failed: {message}")]
    CatalogValidation { message: String },

    #[error("Local store error for key '{key}': {message}")]
    StoreError { key: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Persistence,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::InvalidForm { .. }
            | AppError::SubmissionInProgress
            | AppError::ValidationError { .. } => ErrorCategory::Validation,
            AppError::HttpError(_) | AppError::GatewayRejected { .. } => ErrorCategory::Network,
            AppError::IoError(_) | AppError::StoreError { .. } => ErrorCategory::Persistence,
            AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::SerializationError(_) | AppError::CatalogValidation { .. } => {
                ErrorCategory::Data
            }
        }
    }

    /// 錯誤嚴重程度；沒有任何錯誤會讓程式終止
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Persistence => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::InvalidForm { .. } => "請填寫所有必要欄位".to_string(),
            AppError::SubmissionInProgress => "表單正在送出中，請稍候".to_string(),
            AppError::HttpError(_) => "網路連線發生問題，請稍後再試".to_string(),
            AppError::GatewayRejected { status, .. } => {
                format!("伺服器無法受理您的諮詢（代碼 {}），請稍後再試", status)
            }
            AppError::IoError(_) | AppError::StoreError { .. } => {
                "本機資料儲存失敗，草稿或收藏可能未保存".to_string()
            }
            AppError::SerializationError(_) | AppError::CatalogValidation { .. } => {
                "找不到相關資料".to_string()
            }
            AppError::TomlError(_)
            | AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. } => format!("設定檔有誤：{}", self),
            AppError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "請檢查姓名、電話、訊息是否填寫，並勾選同意條款",
            ErrorCategory::Network => "請確認網路連線後重新送出",
            ErrorCategory::Persistence => "請確認儲存路徑可寫入",
            ErrorCategory::Configuration => "請檢查 lifeui.toml 與相關環境變數",
            ErrorCategory::Data => "請確認服務目錄資料格式正確",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors_are_low_severity_validation() {
        let err = AppError::InvalidForm {
            field: "phone".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "請填寫所有必要欄位");
    }

    #[test]
    fn test_gateway_rejection_is_network_error() {
        let err = AppError::GatewayRejected {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.user_friendly_message().contains("503"));
        assert!(err.to_string().contains("unavailable"));
    }
}
