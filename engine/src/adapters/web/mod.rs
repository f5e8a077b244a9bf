//! Web Driving Adapter
//!
//! Server-rendered pages: a plain record listing, a creation form, and two
//! Plotly views fed by server-built figure JSON.

pub mod charts;
pub mod router;
pub mod views;

pub use router::build_router;
