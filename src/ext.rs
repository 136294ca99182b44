//! Public extension contracts for delivering signed headers over real transports.
//!
//! The signing core never performs I/O; these seams let downstream services attach
//! a [`SignedRequest`](crate::signer::SignedRequest) to whatever HTTP client they
//! already use. A concrete adapter for `reqwest` ships behind the `reqwest`
//! feature.

pub mod attach;

pub use attach::*;
