//! Plain data types shared by the BodySculpt crates.
//!
//! This crate holds only serde-serializable records: the tracked series
//! (measurements, body composition, nutrition), the derived record shapes
//! (KPIs, zone comparisons), the anthropometric profile, and the YAML file
//! wrappers the app loads user data from. No formulas live here.

pub mod comparison;
pub mod file_formats;
pub mod kpi;
pub mod measurement;
pub mod profile;
