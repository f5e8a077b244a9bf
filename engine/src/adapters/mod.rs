//! Driving adapters
//!
//! Expose the use cases over HTTP:
//! - rest: the JSON API
//! - web: server-rendered visualization pages

pub mod rest;
pub mod web;
