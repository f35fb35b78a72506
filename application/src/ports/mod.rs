//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must
//! implement. All I/O behind these ports is synchronous local-file
//! reading, performed once and memoized by the adapter.

pub mod catalog_source;
pub mod content_source;
pub mod secret_source;
