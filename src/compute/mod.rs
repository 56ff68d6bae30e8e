//! Compute layer: the numerical core of the analysis.
//!
//! Everything here is pure and synchronous. Inputs are borrowed immutably and
//! every function returns a freshly built result, so the pipeline can be
//! sequenced in any driver without shared state.

pub mod spatial;
pub mod validation;
