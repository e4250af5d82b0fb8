// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod memory;

pub use http::HttpTransport;
pub use memory::{MemoryContactView, MemoryPlannerView, Message, PlannerSnapshot};
