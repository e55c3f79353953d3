//! Library components for the NCR to ShopKeep converter.

pub mod logging;
pub mod pipeline;
pub mod types;
