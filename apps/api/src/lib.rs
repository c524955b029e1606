//! Playlist API Library
//!
//! In-memory user and playlist service over a fixed track catalog,
//! including domain rules, repositories, and the HTTP layer.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
