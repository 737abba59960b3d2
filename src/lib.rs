//! **aerospace-alfred**: an Alfred workflow backend for AeroSpace.
//!
//! The crate has two halves that share one vocabulary of actions:
//!
//! * The **dispatcher** ([`dispatcher::Dispatcher`]) turns a single Alfred
//!   action (`focus-workspace`, `swap-focused-direction`, …) into exactly one
//!   invocation of the `aerospace` CLI and hands back its exit code.
//! * The **script filter** ([`filter`]) lists workspaces, windows, arrange
//!   actions and hotkeys as Alfred Script Filter JSON.  Every item carries the
//!   variables the dispatcher reads on the next workflow step.
//!
//! # Architecture
//!
//! [`traits::WindowManager`] abstracts "run the external tool" so neither
//! half is coupled to process spawning, and [`traits::AppLocator`]
//! abstracts bundle-id lookups for item icons.  Concrete implementations
//! live in [`aerospace`] and [`icons`].

pub mod action;
pub mod aerospace;
pub mod alfred;
pub mod config;
pub mod dispatcher;
pub mod filter;
pub mod icons;
pub mod traits;
