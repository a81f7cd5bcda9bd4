//! Shared test support for Moon Bid integration tests.

pub mod logging;
