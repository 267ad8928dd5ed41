//! Activity Roster - Extracurricular activity sign-ups for Mergington High School
//!
//! This crate keeps the roster of every activity in memory and exposes
//! listing, signup, and unregister operations over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
