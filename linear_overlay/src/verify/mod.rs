//! Verification of linear/linear intersection operations against accepted results.
mod accepted;
mod diagnostics;
mod mismatch;
mod verifier;

pub use accepted::*;
pub use diagnostics::*;
pub use mismatch::*;
pub use verifier::*;
