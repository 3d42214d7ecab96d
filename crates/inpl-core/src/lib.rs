//! inpl-core
//!
//! Shared vocabulary of the inPL scoring engine: the typed answer record
//! collected by the questionnaire forms and the tri-state test result the
//! scoring functions produce. No scoring logic lives here.

pub mod error;
pub mod lenient;
pub mod models;
