//! HTTP request handlers

pub mod analyze;
pub mod health;
