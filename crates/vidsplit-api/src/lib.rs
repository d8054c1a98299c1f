//! Vidsplit API Library
//!
//! HTTP surface of the splitter: a single task endpoint dispatching on `action`,
//! plus health and OpenAPI routes.

mod api_doc;
pub mod constants;
mod handlers;
pub mod setup;
pub mod telemetry;

pub mod error;
pub mod state;

pub use api_doc::ApiDoc;
pub use error::{ErrorResponse, HttpAppError};
pub use handlers::tasks::{CleanupResponse, SplitResponse, TaskAction, TaskRequest};
pub use state::AppState;
