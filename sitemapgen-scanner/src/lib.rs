pub mod cancel;
pub mod crawler;
pub mod domain;
pub mod error;
pub mod link;
pub mod page;
pub mod registry;

pub use cancel::CancellationFlag;
pub use crawler::{CrawlEvent, Crawler, EventCallback};
pub use domain::{DomainRule, DomainSignature};
pub use error::ScanError;
pub use registry::{LinkRecord, LinkRegistry};
