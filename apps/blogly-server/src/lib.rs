//! # Blogly Server
//!
//! Actix-web application serving the Blogly pages. The binary in `main.rs`
//! wires configuration, telemetry and the database pool around
//! [`handlers::configure_routes`].

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod views;
