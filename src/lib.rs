//! Shift Rules Engine for Brazilian labour rules
//!
//! This crate validates employee shift schedules against three work rules
//! (consecutive working days, consecutive Sundays worked and the 11-hour
//! interjornada rest) and exposes them both as pure functions and over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
