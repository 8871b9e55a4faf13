//! Route data model
//!
//! Value types describing one candidate walking route as delivered by the
//! directions provider. Candidates are immutable after construction: the
//! selector keeps its copies untouched and a navigation session receives a
//! clone at commit time.

pub mod route;
mod to_geojson;

pub use route::{RouteCandidate, Step};
