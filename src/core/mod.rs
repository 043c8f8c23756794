pub mod debounce;
pub mod pricing;
pub mod search;
pub mod state;

pub use crate::domain::model::{Catalog, Service, ServicePackage};
pub use crate::domain::ports::{InquiryGateway, LocalStore};
pub use crate::utils::error::Result;
