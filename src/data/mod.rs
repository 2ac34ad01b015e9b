// ABOUTME: Static content tables consumed by the site front end.
// ABOUTME: Trusted constants; no validation beyond structural shape.

mod coordinates;
mod itinerary;

pub use coordinates::{Coordinates, DESTINATION_COORDINATES, coordinates_for};
pub use itinerary::{ITINERARY, ItineraryEntry, entry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_destination_card_has_coordinates() {
        for e in ITINERARY.iter().filter(|e| !e.is_summary) {
            // The combined Yogyakarta & Kuala Lumpur card maps by its own id.
            assert!(
                coordinates_for(e.id).is_some(),
                "{} has no coordinates",
                e.id
            );
        }
    }
}
