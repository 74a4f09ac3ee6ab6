//! Static country → coordinate lookup used to pin recommended markets on a map.

use serde::Serialize;

use crate::report::ScalingReport;

/// (country, latitude, longitude), in lookup priority order.
const COUNTRY_COORDINATES: [(&str, f64, f64); 15] = [
    ("United States", 39.8283, -98.5795),
    ("Germany", 51.1657, 10.4515),
    ("United Kingdom", 55.3781, -3.4360),
    ("Australia", -25.2744, 133.7751),
    ("Japan", 36.2048, 138.2529),
    ("France", 46.6033, 1.8883),
    ("Mexico", 23.6345, -102.5528),
    ("Netherlands", 52.1326, 5.2913),
    ("China", 35.8617, 104.1954),
    ("Brazil", -14.2350, -51.9253),
    ("India", 20.5937, 78.9629),
    ("South Korea", 35.9078, 127.7669),
    ("Sweden", 60.1282, 18.6435),
    ("Norway", 60.4720, 8.4689),
    ("Singapore", 1.3521, 103.8198),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// A market that resolved to a map position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPin {
    pub country: String,
    pub coordinates: Coordinates,
}

/// First table entry whose name contains `country` or is contained in it,
/// so "United States of America" resolves to "United States".
pub fn lookup(country: &str) -> Option<Coordinates> {
    let country = country.trim();
    if country.is_empty() {
        return None;
    }
    COUNTRY_COORDINATES
        .iter()
        .find(|(key, _, _)| key.contains(country) || country.contains(key))
        .map(|&(_, lat, lon)| Coordinates { lat, lon })
}

/// Pins for the markets whose country resolves, in market order.
pub fn market_pins(report: &ScalingReport) -> Vec<MarketPin> {
    report
        .markets
        .iter()
        .filter_map(|m| {
            lookup(&m.country).map(|coordinates| MarketPin {
                country: m.country.clone(),
                coordinates,
            })
        })
        .collect()
}
