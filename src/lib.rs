//! exprlens: client for an arithmetic expression optimizer service.
//!
//! Tokenizes the input for display, sends it to the optimizer, and turns the
//! returned per-line ASTs into laid-out tree figures alongside the
//! optimization steps and final variable values.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
pub mod view;
