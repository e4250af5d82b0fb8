pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpTransport, MemoryContactView, MemoryPlannerView};
pub use config::ClientConfig;
pub use self::core::{
    api::FormsApi,
    contact::ContactController,
    outcome::{PreviewOutcome, SubmitOutcome},
    page::{Page, PageEvent, PageOutcome},
    planner::PlannerController,
};
pub use utils::error::{FormError, Result};
