//! The document catalog engine and its injected collaborators.

mod clock;
mod engine;
mod error;
mod notify;
mod raw;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::CatalogEngine;
pub use error::CatalogError;
pub use notify::{CollectingSink, Notification, NotificationLevel, NotificationSink, TracingSink};
pub use raw::RawFile;
