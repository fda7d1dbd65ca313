#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

//! Stela consensus rules for importance-weighted block scoring (v0).
//!
//! This crate is responsible for:
//! - generation-hash analysis (leading-zero run + 32-bit mantissa)
//! - the fixed-point "hit" value derived from a generation hash
//! - the importance/difficulty/time-weighted block target
//! - the block-hit predicate combining hit and target
//!
//! Every function here is pure and deterministic: full nodes must compute
//! byte-identical results from identical inputs. It intentionally does
//! **not** include block storage, the importance ledger, fork choice, or
//! networking.

pub mod config;
pub mod error;
pub mod generation;
pub mod hit;
pub mod predicate;
pub mod score;
pub mod target;
pub mod validate;

pub use config::*;
pub use error::*;
pub use generation::*;
pub use hit::*;
pub use predicate::*;
pub use score::*;
pub use target::*;
pub use validate::*;
