//! This module is responsible for decoding the directions provider payload
//! into route candidates the rest of the engine works with.
//!
//! Transport of the payload (HTTP, caching, retries) belongs to the caller;
//! the engine only consumes the decoded body. Provider failure — no routes,
//! malformed geometry — surfaces as [`crate::Error::Unavailable`] and is
//! not retried here.

mod directions;
mod parser;

pub use directions::{
    DirectionsResponse, ProviderLatLng, ProviderLeg, ProviderRoute, ProviderStep, TextValue,
};
pub use parser::{routes_from_json, routes_from_response};
