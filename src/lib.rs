//! Trinidad & Tobago tax estimates for individuals, sole traders and companies.
//!
//! The calculations in [`core`] are pure functions over a flattened input
//! record; forms and JSON documents are converted to those records first.

pub mod core;
