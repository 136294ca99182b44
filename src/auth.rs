//! Auth-domain credential models for the signing engine.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
