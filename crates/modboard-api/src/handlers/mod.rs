//! Route handlers
//!
//! HTTP request handlers organized by area.

pub mod config;
pub mod health;
pub mod infractions;
pub mod pages;
pub mod stats;
pub mod users;
