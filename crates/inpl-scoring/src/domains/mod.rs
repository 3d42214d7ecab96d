//! Domain tests, one module per section of the health check.
//!
//! Every test is a pure function of the answer record (plus the normative
//! table for the neuropsychological battery). Missing inputs give an
//! unknown result, never an error.

pub mod audition;
pub mod cardio;
pub mod densitometry;
pub mod motor;
pub mod neuropsy;
pub mod nutrition;
pub mod spirometry;
pub mod survey;
