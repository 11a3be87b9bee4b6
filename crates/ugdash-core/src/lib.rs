//! Core ugdash library (config, auth context, API client, views).

pub mod api;
pub mod auth;
pub mod config;
pub mod format;
pub mod logging;
pub mod views;
