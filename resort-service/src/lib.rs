//! resort-service: backend for the resort website.
//!
//! Records status-check heartbeats plus event and contact enquiries in
//! MongoDB, and lists them back, under the `/api` prefix.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

pub use startup::{build_router, AppState, Application};
