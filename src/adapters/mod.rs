// Adapters layer: concrete implementations of the domain ports.

pub mod catalog;
pub mod clock;
pub mod events;
pub mod gateway;
pub mod store;

pub use catalog::{JsonFileCatalog, StaticCatalog};
pub use clock::{ManualClock, SystemClock};
pub use events::{TracingEventSink, TracingNotifier};
pub use gateway::HttpInquiryGateway;
pub use store::{JsonFileStore, MemoryStore};
