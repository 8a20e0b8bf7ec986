//! Test harness for the page-curl transition kernel.
//!
//! Provides programmatic tools for scripting transitions frame by frame,
//! verifying the curl invariants at every step, and generating diagnostic
//! output.
//!
//! # Key Components
//!
//! - [`TransitionScript`] — Fluent API for driving a transition in discrete
//!   steps and recording per-frame snapshots
//! - [`oracle`] — Verification functions returning pass/fail verdicts
//! - [`helpers`] — Corner samples, UV grids, evaluator constructors
//! - [`assertions`] — Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use workflow::TransitionScript;
