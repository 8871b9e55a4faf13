use serde::Deserialize;

/// Top-level directions payload as returned by the provider.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct DirectionsResponse {
    pub status: String,
    pub routes: Vec<ProviderRoute>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProviderRoute {
    pub summary: String,
    pub legs: Vec<ProviderLeg>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProviderLeg {
    pub steps: Vec<ProviderStep>,
    pub distance: TextValue,
    pub duration: TextValue,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ProviderStep {
    pub html_instructions: String,
    pub end_location: ProviderLatLng,
    pub distance: TextValue,
    pub duration: TextValue,
}

/// Human-readable figure plus its numeric value, e.g. `"0.2 km"` / `160`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ProviderLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl Default for ProviderLatLng {
    // Serde fills missing coordinates with the default; NaN makes that
    // visible to validation instead of silently snapping to (0, 0).
    fn default() -> Self {
        Self {
            lat: f64::NAN,
            lng: f64::NAN,
        }
    }
}
