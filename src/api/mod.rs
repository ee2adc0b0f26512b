//! API module
//!
//! Contains HTTP request handlers for the triggerable actions

pub mod actions;
