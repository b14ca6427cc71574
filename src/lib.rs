//! Inventory backend for the Smart Kitchen Assistant.
//!
//! Exposes HTTP endpoints to create and list kitchen inventory items,
//! backed by a single SQLite table.

pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod models;
pub mod routes;
