//! REST API Driving Adapter
//!
//! Exposes the CRUD use cases through a RESTful HTTP API (JSON)

pub mod handlers;
pub mod router;
pub mod server;

pub use router::build_router;
pub use server::serve_on_tcp;
