pub mod banner;
pub mod chat;
pub mod summarize;
pub mod toggle;

pub use banner::ErrorBanner;
pub use chat::{ChatHandoff, ChatLauncher};
pub use summarize::{Outcome, SummaryRequester};
pub use toggle::VisibilityToggle;
