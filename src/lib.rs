//! Compensation Calculation Engine
//!
//! This crate turns a configured salary structure, a month's attendance
//! record, an organization's weekly-off/holiday policy, and a configurable
//! fine policy into a final payable amount. A companion loan amortizer
//! converts loan terms into a fixed monthly installment and schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
