//! Application services.
//!
//! Logic shared by the HTTP handlers that sits above the SRS engine.

pub mod backup;
pub mod quiz;
pub mod study_sets;
