// ABOUTME: Ordered itinerary entries rendered by the site front end.
// ABOUTME: Display order is the array order; layout hints drive the grid.

/// One card on the itinerary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Human-readable date range; empty for cards without one.
    pub dates: &'static str,
    /// Site-relative image path; empty for cards without an image.
    pub image: &'static str,
    /// Grid columns this card spans.
    pub column_span: u8,
    /// Closing summary card rather than a destination.
    pub is_summary: bool,
    pub is_tall: bool,
    pub is_wide: bool,
}

impl ItineraryEntry {
    const fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        dates: &'static str,
        image: &'static str,
        column_span: u8,
    ) -> Self {
        Self {
            id,
            title,
            description,
            dates,
            image,
            column_span,
            is_summary: false,
            is_tall: false,
            is_wide: false,
        }
    }

    const fn tall(mut self) -> Self {
        self.is_tall = true;
        self
    }

    const fn wide(mut self) -> Self {
        self.is_wide = true;
        self
    }

    const fn summary(mut self) -> Self {
        self.is_summary = true;
        self
    }
}

/// The itinerary, in display order.
pub const ITINERARY: &[ItineraryEntry] = &[
    ItineraryEntry::new(
        "taiwan",
        "Taiwan",
        "Mountain hikes, old mining towns, and dramatic coastline\u{2014}Yangmingshan, \
         Jiufen, Jinguashi, and Yehliu.",
        "May 2nd - May 6th",
        "/images/taiwan.jpg",
        6,
    ),
    ItineraryEntry::new(
        "yogyakarta",
        "Yogyakarta & Kuala Lumpur",
        "Urban Asia meets Javanese culture\u{2014}food, temples, art.",
        "May 11th - May 15th",
        "/images/yogyakarta.jpg",
        6,
    )
    .tall(),
    ItineraryEntry::new(
        "komodo",
        "Komodo National Park",
        "Luxury boat journey to pink beaches, island hikes, and Komodo dragons in the wild.",
        "May 17th - May 20th",
        "/images/komodo.jpg",
        10,
    )
    .wide(),
    ItineraryEntry::new(
        "kinabatangan",
        "Kinabatangan Safari",
        "River safaris through dense rainforest to spot orangutans, proboscis monkeys, \
         birds, and crocodiles.",
        "May 7th - May 10th",
        "/images/kinabatangan.jpg",
        4,
    )
    .tall(),
    ItineraryEntry::new(
        "bromo",
        "Mount Bromo",
        "Sunrise hike across an active volcano",
        "May 15th - May 16th",
        "/images/bromo.jpg",
        4,
    ),
    ItineraryEntry::new(
        "bali",
        "Bali",
        "Deliberate downtime by the sea\u{2014}runs, yoga, caf\u{e9}s.",
        "May 20th - May 25th",
        "/images/bali.jpg",
        6,
    ),
    ItineraryEntry::new(
        "summary",
        "That's all.",
        "Rest of the time in north India with family. Back in London, June 8th.",
        "",
        "",
        4,
    )
    .summary(),
];

/// Look up an itinerary entry by id.
pub fn entry(id: &str) -> Option<&'static ItineraryEntry> {
    ITINERARY.iter().find(|e| e.id == id)
}
