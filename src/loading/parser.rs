use geo::Point;
use log::{info, warn};

use super::directions::{DirectionsResponse, ProviderRoute};
use crate::Error;
use crate::model::{RouteCandidate, Step};

/// Decode a raw provider JSON body into route candidates.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] when the body is not valid JSON or yields
/// no usable routes.
pub fn routes_from_json(body: &str) -> Result<Vec<RouteCandidate>, Error> {
    let response: DirectionsResponse = serde_json::from_str(body)
        .map_err(|e| Error::Unavailable(format!("malformed directions payload: {e}")))?;
    routes_from_response(response)
}

/// Convert a decoded directions response into route candidates, preserving
/// provider ordering.
///
/// Routes that decode but carry unusable geometry are skipped with a
/// warning; the call only fails when nothing usable remains.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] when the response holds no routes or no
/// route yields at least one valid step.
pub fn routes_from_response(response: DirectionsResponse) -> Result<Vec<RouteCandidate>, Error> {
    if response.routes.is_empty() {
        return Err(Error::Unavailable(format!(
            "provider returned no routes (status: {})",
            response.status
        )));
    }

    let mut candidates = Vec::with_capacity(response.routes.len());
    for (idx, route) in response.routes.into_iter().enumerate() {
        match candidate_from_route(route) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => warn!("Skipping unusable route {idx}: {e}"),
        }
    }

    if candidates.is_empty() {
        return Err(Error::Unavailable(
            "no route in the payload had usable geometry".to_string(),
        ));
    }

    info!("Decoded {} route candidate(s)", candidates.len());
    Ok(candidates)
}

fn candidate_from_route(route: ProviderRoute) -> Result<RouteCandidate, Error> {
    // A walking route commonly has exactly one leg; flattening keeps the
    // step order intact either way.
    let steps: Vec<Step> = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .filter_map(|step| {
            if step.end_location.lat.is_finite() && step.end_location.lng.is_finite() {
                Some(Step {
                    endpoint: Point::new(step.end_location.lng, step.end_location.lat),
                    instruction: step.html_instructions,
                    distance_m: step.distance.value,
                    duration_s: step.duration.value,
                })
            } else {
                warn!(
                    "Dropping step with invalid end_location ({}, {})",
                    step.end_location.lat, step.end_location.lng
                );
                None
            }
        })
        .collect();

    RouteCandidate::new(steps, route.summary)
}
