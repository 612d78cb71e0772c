pub use error::ApiError;

/// Main architecture layers (dependency flow: Core → API → Wagtail)
pub mod core; // Typed accessors and singleton resolution
pub mod api; // Wagtail v2 API client

/// Support modules (used across layers)
pub mod config; // Base-URL resolution
pub mod error; // Error handling

pub use api::Lookup;
pub use api::client::ApiClient;
pub use crate::core::resolve::{Criterion, ResolutionChain};
pub use crate::core::services::content::ContentService;
pub use crate::core::services::site::SiteService;

pub type Result<T> = std::result::Result<T, ApiError>;
