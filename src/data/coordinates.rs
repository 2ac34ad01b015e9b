// ABOUTME: Geographic coordinates for each itinerary destination.
// ABOUTME: Static table keyed by destination id; trusted constants.

/// Geographic position in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Destination id to coordinates mapping.
pub const DESTINATION_COORDINATES: &[(&str, Coordinates)] = &[
    (
        "taiwan",
        Coordinates {
            latitude: 23.6978,
            longitude: 120.9605,
        },
    ),
    (
        "yogyakarta",
        Coordinates {
            latitude: -7.7956,
            longitude: 110.3695,
        },
    ),
    (
        "kuala-lumpur",
        Coordinates {
            latitude: 3.139,
            longitude: 101.6869,
        },
    ),
    (
        "komodo",
        Coordinates {
            latitude: -8.52,
            longitude: 119.55,
        },
    ),
    (
        "kinabatangan",
        Coordinates {
            latitude: 5.3,
            longitude: 118.3,
        },
    ),
    (
        "bromo",
        Coordinates {
            latitude: -7.9425,
            longitude: 112.953,
        },
    ),
    (
        "bali",
        Coordinates {
            latitude: -8.7075,
            longitude: 115.2625,
        },
    ),
];

/// Look up coordinates for a destination id.
pub fn coordinates_for(id: &str) -> Option<Coordinates> {
    DESTINATION_COORDINATES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, coords)| *coords)
}
