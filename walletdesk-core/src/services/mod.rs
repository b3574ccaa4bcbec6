//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

pub mod logging;
mod presenter;
mod profile;

pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use presenter::{BalancePresenter, BalanceView};
pub use profile::{footer_line, ProfileService};
