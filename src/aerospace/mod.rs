//! AeroSpace-specific implementations.
//!
//! This module provides the concrete
//! [`WindowManager`](crate::traits::WindowManager) backend, which spawns the
//! `aerospace` CLI, and typed wrappers for the queries the script filter
//! issues through it.
//!
//! Nothing outside this module should know AeroSpace's query syntax.

pub mod cli;
pub mod query;
