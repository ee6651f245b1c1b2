pub mod error;
pub mod filter;
pub mod navigation;
pub mod page;
pub mod service;
pub mod session;
pub mod sort;
pub mod statistics;
pub mod suggestions;

pub use error::DomainError;
pub use filter::{FilteredResult, apply_filters, apply_filters_at};
pub use navigation::{NavKey, NavState, SuggestionNavigator};
pub use page::{Page, PageInfo, paginate};
pub use service::UserConsoleService;
pub use session::{ConsoleSession, ConsoleView};
pub use sort::sort_users;
pub use statistics::compute_statistics;
pub use suggestions::{SuggestionLimits, SuggestionSet, update_suggestions, update_suggestions_with};
