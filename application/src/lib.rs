//! Application layer for casewalk
//!
//! This crate contains the session façade, use cases, and port
//! definitions. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    catalog_source::{CatalogError, CatalogSource},
    content_source::{ContentError, ContentSource},
    secret_source::SecretSource,
};
pub use session::{ModuleSession, NavigationMode, SessionState};
pub use use_cases::export_session::{export_session, export_session_json};
pub use use_cases::load_module::{LoadModuleError, LoadModuleUseCase};
