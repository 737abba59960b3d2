//! Alfred Script Filter output.
//!
//! A script filter prints one JSON document, `{"items": [...]}`, on stdout.
//! Each item's `variables` become environment variables of the next
//! workflow step, which is how the dispatcher learns its `action`,
//! `workspace`, `window_id` and `direction`.

pub mod item;
