// Client-side listing filters
//
// Applied to collections the client already fetched. Filtering is pure:
// it never issues a request and applying the same filter twice yields the
// same result as applying it once.

use crate::concert::ConcertEvent;
use crate::sports::SportsEvent;
use crate::theatre_art::{TheatreArtEvent, TheatreArtKind};

/// Fields a listing filter can inspect.
pub trait Listing {
    /// Free-text location matched by the location filter.
    fn location(&self) -> &str;

    /// Calendar date string matched by the date filter.
    fn date(&self) -> &str;

    /// Theatre/arts kind, for records that have one.
    fn kind(&self) -> Option<TheatreArtKind> {
        None
    }
}

impl Listing for ConcertEvent {
    // Concerts have no `location`; the city is what users filter on.
    fn location(&self) -> &str {
        &self.city
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl Listing for SportsEvent {
    fn location(&self) -> &str {
        &self.location
    }

    fn date(&self) -> &str {
        &self.date
    }
}

impl Listing for TheatreArtEvent {
    fn location(&self) -> &str {
        &self.location
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn kind(&self) -> Option<TheatreArtKind> {
        Some(self.kind)
    }
}

/// Location / date / kind filter. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Case-insensitive substring of the record's location.
    pub location: Option<String>,
    /// Exact date string.
    pub date: Option<String>,
    /// Theatre/arts kind. Records without a kind never match a kind filter.
    pub kind: Option<TheatreArtKind>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_kind(mut self, kind: TheatreArtKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// True when no criterion would exclude anything.
    pub fn is_empty(&self) -> bool {
        self.location.as_deref().map_or(true, str::is_empty)
            && self.date.as_deref().map_or(true, str::is_empty)
            && self.kind.is_none()
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        let location_ok = match self.location.as_deref() {
            Some(needle) if !needle.is_empty() => item
                .location()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };
        let date_ok = match self.date.as_deref() {
            Some(date) if !date.is_empty() => item.date() == date,
            _ => true,
        };
        let kind_ok = match self.kind {
            Some(kind) => item.kind() == Some(kind),
            None => true,
        };

        location_ok && date_ok && kind_ok
    }

    /// Borrowing filter over a fetched collection, preserving order.
    pub fn apply<'a, T: Listing>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_empty_filter_matches_all() {
        let sports = seed::sports();
        let filter = EventFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sports).len(), sports.len());

        let blank = EventFilter::new().with_location("").with_date("");
        assert!(blank.is_empty());
        assert_eq!(blank.apply(&sports).len(), sports.len());
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let sports = seed::sports();
        let filter = EventFilter::new().with_location("hYDer");
        let result = filter.apply(&sports);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Pro Kabaddi League");
    }

    #[test]
    fn test_concert_location_uses_city() {
        let concerts = seed::concerts();
        let result = EventFilter::new().with_location("bengal").apply(&concerts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Prateek Kuhad India Tour");
    }

    #[test]
    fn test_date_requires_exact_match() {
        let theatre = seed::theatre_arts();
        assert_eq!(EventFilter::new().with_date("2025-09-05").apply(&theatre).len(), 1);
        assert!(EventFilter::new().with_date("2025-09").apply(&theatre).is_empty());
    }

    #[test]
    fn test_non_matching_location_yields_empty() {
        let theatre = seed::theatre_arts();
        let result = EventFilter::new().with_location("Atlantis").apply(&theatre);
        assert!(result.is_empty());
    }

    #[test]
    fn test_combined_criteria() {
        let theatre = seed::theatre_arts();
        let filter = EventFilter::new()
            .with_location("delhi")
            .with_kind(TheatreArtKind::Art);
        let result = filter.apply(&theatre);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "3");

        let filter = EventFilter::new()
            .with_location("delhi")
            .with_kind(TheatreArtKind::Theatre);
        assert!(filter.apply(&theatre).is_empty());
    }

    #[test]
    fn test_kind_filter_excludes_records_without_kind() {
        let sports = seed::sports();
        let filter = EventFilter::new().with_kind(TheatreArtKind::Theatre);
        assert!(filter.apply(&sports).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let theatre = seed::theatre_arts();
        let filter = EventFilter::new().with_location("a");
        let once: Vec<TheatreArtEvent> = filter.apply(&theatre).into_iter().cloned().collect();
        let twice: Vec<TheatreArtEvent> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }
}
