//! Little Lemon client library
//!
//! Bootstrap for the client core: configuration, logging and wiring of the
//! adapters into the controllers handed to the presentation layer.

pub mod bootstrap;
pub mod client;

pub use bootstrap::run;
pub use client::LittleLemonClient;
