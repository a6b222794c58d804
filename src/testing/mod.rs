//! Headless testing support: an in-memory platform and snapshot helpers.
//!
//! Use [`HeadlessPlatform`] to drive a [`Context`](crate::context::Context)
//! without a windowing system, and [`commands_to_string`] to capture a frame's
//! commands as plain text for snapshot-style assertions.

pub mod headless;
pub mod snapshot;

pub use headless::HeadlessPlatform;
pub use snapshot::{commands_to_string, texts};
