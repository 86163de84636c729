use serde::Deserialize;

// --- Places API response, only the fields we read ---

#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub place_name: String,
    /// `[lng, lat]`
    pub center: [f64; 2],
}
