//! Derivation engine for an employee self-service dashboard.
//!
//! This crate turns the raw attendance, leave, payroll and project records
//! served by an HR backend into the statuses, durations, day counts and
//! display rows shown to an employee. Everything in [`calculation`] is pure;
//! [`api`] exposes the same derivations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod views;
