//! Bitstamp REST API client.

mod client;
pub mod endpoints;
pub mod private;
pub mod public;

pub use client::{BitstampRestClient, BitstampRestClientBuilder};
