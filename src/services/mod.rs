pub mod allocator;
pub mod analytics;
pub mod resolver;

pub use allocator::{LinkCreateResult, LinkService, ShortenRequest};
pub use analytics::{AnalyticsService, LinkFilter, LinkSort, LinkSummary};
pub use resolver::{ClickContext, RedirectService, Resolution};
