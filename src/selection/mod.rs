//! Candidate route selection
//!
//! Holds the candidates returned by the directions provider for one
//! origin/destination pair and attaches a safety profile to each on first
//! selection. Profiles are cached for the selector's lifetime so the rating
//! shown at selection time is the rating in force at commit time.
//!
//! Provider ordering is preserved and never re-ranked by safety score: a
//! lower-scored but faster route must remain selectable.

use hashbrown::HashMap;
use log::debug;

use crate::Error;
use crate::model::RouteCandidate;
use crate::safety::{SafetyAssessor, SafetyProfile};

pub struct RouteSelector<A: SafetyAssessor> {
    candidates: Vec<RouteCandidate>,
    profiles: HashMap<usize, SafetyProfile>,
    assessor: A,
}

impl<A: SafetyAssessor> RouteSelector<A> {
    /// Create a selector over the provider's candidates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] when the provider produced no
    /// candidates at all.
    pub fn new(candidates: Vec<RouteCandidate>, assessor: A) -> Result<Self, Error> {
        if candidates.is_empty() {
            return Err(Error::Unavailable(
                "directions provider returned no routes".to_string(),
            ));
        }

        Ok(Self {
            candidates,
            profiles: HashMap::new(),
            assessor,
        })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidate(&self, index: usize) -> Option<&RouteCandidate> {
        self.candidates.get(index)
    }

    /// Safety profile for an already-selected candidate, if any.
    pub fn profile(&self, index: usize) -> Option<&SafetyProfile> {
        self.profiles.get(&index)
    }

    /// Select a candidate and retrieve its safety profile.
    ///
    /// The profile is assessed lazily on the first selection of `index` and
    /// the cached value is returned on every later selection, so repeated UI
    /// interactions never show a different rating for the same route.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid index.
    pub fn select(&mut self, index: usize) -> Result<&SafetyProfile, Error> {
        let candidate = self
            .candidates
            .get(index)
            .ok_or(Error::OutOfRange(index))?;

        if !self.profiles.contains_key(&index) {
            let profile = self.assessor.assess(candidate);
            debug!(
                "Assessed route {index} ({}): score {}",
                candidate.summary(),
                profile.score
            );
            self.profiles.insert(index, profile);
        }

        Ok(&self.profiles[&index])
    }

    /// Hand a selected candidate off for a navigation session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for an invalid index and
    /// [`Error::NotSelected`] when `select` was never called for `index`.
    pub fn commit(&self, index: usize) -> Result<RouteCandidate, Error> {
        if index >= self.candidates.len() {
            return Err(Error::OutOfRange(index));
        }
        if !self.profiles.contains_key(&index) {
            return Err(Error::NotSelected(index));
        }

        Ok(self.candidates[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use geo::Point;

    use super::*;
    use crate::model::Step;
    use crate::safety::{ActivityLevel, Construction, CrimeLevel, Lighting, SafetyFactors};

    /// Assessor that counts calls, to prove the cache prevents reassessment.
    struct CountingAssessor {
        calls: Cell<u32>,
    }

    impl SafetyAssessor for CountingAssessor {
        fn assess(&self, _route: &RouteCandidate) -> SafetyProfile {
            self.calls.set(self.calls.get() + 1);
            SafetyProfile::new(
                SafetyFactors {
                    crime: CrimeLevel::Low,
                    lighting: Lighting::WellLit,
                    activity: ActivityLevel::Busy,
                    construction: Construction::None,
                },
                self.calls.get(),
            )
        }
    }

    fn candidate(lng: f64) -> RouteCandidate {
        RouteCandidate::new(
            vec![Step {
                endpoint: Point::new(lng, 30.2850),
                instruction: "Head north".to_string(),
                distance_m: 100.0,
                duration_s: 80.0,
            }],
            "",
        )
        .unwrap()
    }

    fn selector() -> RouteSelector<CountingAssessor> {
        RouteSelector::new(
            vec![candidate(-97.74), candidate(-97.75), candidate(-97.76)],
            CountingAssessor {
                calls: Cell::new(0),
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_candidate_set_is_unavailable() {
        let result = RouteSelector::new(
            vec![],
            CountingAssessor {
                calls: Cell::new(0),
            },
        );
        assert!(matches!(result, Err(Error::Unavailable(_))));
    }

    #[test]
    fn select_out_of_range_fails() {
        let mut sel = selector();
        assert!(matches!(sel.select(3), Err(Error::OutOfRange(3))));
    }

    #[test]
    fn select_twice_returns_cached_profile() {
        let mut sel = selector();

        let first = sel.select(1).unwrap().clone();
        let second = sel.select(1).unwrap().clone();

        // The counting assessor embeds its call count in review_count, so an
        // equal profile proves no reassessment happened.
        assert_eq!(first, second);
        assert_eq!(sel.assessor.calls.get(), 1);
    }

    #[test]
    fn profiles_are_cached_per_candidate() {
        let mut sel = selector();
        sel.select(0).unwrap();
        sel.select(2).unwrap();
        assert_eq!(sel.assessor.calls.get(), 2);
        assert!(sel.profile(1).is_none());
    }

    #[test]
    fn commit_before_select_fails() {
        let sel = selector();
        assert!(matches!(sel.commit(0), Err(Error::NotSelected(0))));
    }

    #[test]
    fn commit_out_of_range_fails() {
        let sel = selector();
        assert!(matches!(sel.commit(9), Err(Error::OutOfRange(9))));
    }

    #[test]
    fn commit_returns_the_selected_candidate() {
        let mut sel = selector();
        sel.select(1).unwrap();
        let route = sel.commit(1).unwrap();
        assert_eq!(route.final_endpoint(), Point::new(-97.75, 30.2850));
    }
}
