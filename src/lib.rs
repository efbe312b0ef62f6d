//! urn-rs: Monte Carlo draw-without-replacement estimation
//!
//! Goals:
//! - A depletable [`urn::Urn`] multiset with uniform draws without replacement
//! - Repeated-trial probability estimation against per-label minimum counts
//! - No panics for invalid input; use `Result` for contract violations
//! - Injectable, seedable randomness so runs are reproducible
//!
//! ## Quick start: estimate a draw probability
//! ```
//! use urn_rs::estimate::{estimate_seeded, Target};
//! use urn_rs::urn::Urn;
//!
//! let urn = Urn::try_from_counts([("black", 6), ("red", 4), ("green", 3)]).unwrap();
//! let target = Target::try_from_counts([("red", 2), ("green", 1)]).unwrap();
//!
//! // Chance that drawing 5 items yields at least 2 red and 1 green.
//! let est = estimate_seeded(&urn, &target, 5, 2000, 42).unwrap();
//! assert!(est.probability() > 0.0 && est.probability() < 1.0);
//! ```
//!
//! ## CLI
//! Run a one-off estimate from the command line:
//! ```sh
//! cargo run --bin urn-rs -- --pool black=6,red=4,green=3 --want red=2,green=1 --draw 5
//! ```

pub mod estimate;
pub mod urn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
