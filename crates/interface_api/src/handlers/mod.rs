//! Request handlers

pub mod claims;
pub mod content;
pub mod dashboard;
pub mod health;
