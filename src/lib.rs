pub mod adapters;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::{HttpInquiryGateway, JsonFileStore, MemoryStore, StaticCatalog};
pub use config::AppConfig;
pub use core::state::{AppState, UiSettings};
pub use domain::category::{ContactSubject, FaqCategory, PreferredTime, ServiceCategory};
pub use domain::form::{ContactForm, Inquiry};
pub use domain::model::{Catalog, Service, ServicePackage};
pub use utils::error::{AppError, Result};
