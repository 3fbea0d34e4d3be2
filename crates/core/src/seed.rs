// Seed catalog data
//
// The records the service starts with. Order here is the order every list
// endpoint returns.

use crate::concert::ConcertEvent;
use crate::sports::SportsEvent;
use crate::theatre_art::{TheatreArtEvent, TheatreArtKind};

pub fn concerts() -> Vec<ConcertEvent> {
    vec![
        concert(
            "1",
            "Arijit Singh Live",
            "2025-08-10",
            "19:30",
            "Gachibowli Stadium",
            "Hyderabad",
            "/images/arijit.jpg",
            1499,
        ),
        concert(
            "2",
            "Prateek Kuhad India Tour",
            "2025-09-02",
            "20:00",
            "Phoenix Arena",
            "Bengaluru",
            "/images/prateek.jpg",
            1199,
        ),
    ]
}

pub fn sports() -> Vec<SportsEvent> {
    vec![
        sport(
            "1",
            "IPL Final 2025",
            "2025-05-28",
            "Ahmedabad",
            "https://th.bing.com/th/id/OIP.m47FmnxFZsbPVArqMP8LDwHaD4?w=342&h=180&c=7&r=0&o=7&dpr=1.4&pid=1.7&rm=3",
        ),
        sport(
            "2",
            "Pro Kabaddi League",
            "2025-07-15",
            "Hyderabad",
            "https://bsmedia.business-standard.com/_media/bs/img/article/2024-03/01/full/1709308983-723.jpg?im=FeatureCrop,size=(803,452)",
        ),
        sport(
            "3",
            "Indian Super League",
            "2025-10-10",
            "Goa",
            "https://th.bing.com/th/id/OIP.oEWtYY30Wa821BpA8Nu32QHaEK?w=295&h=180&c=7&r=0&o=7&dpr=1.4&pid=1.7&rm=3",
        ),
    ]
}

pub fn theatre_arts() -> Vec<TheatreArtEvent> {
    vec![
        theatre_art(
            "1",
            "Shakespeare's Hamlet - Live Play",
            "2025-08-28",
            "Mumbai",
            "https://th.bing.com/th/id/OIP.gOEMNyUr5IGHdotrrywUhQHaDQ?w=342&h=154&c=7&r=0&o=5&dpr=1.4&pid=1.7",
            TheatreArtKind::Theatre,
        ),
        theatre_art(
            "2",
            "Indian Classical Dance Show",
            "2025-09-05",
            "Chennai",
            "https://th.bing.com/th/id/OIP.NxzX5rl30wqLCt8SKaTNIAHaE8?w=270&h=180&c=7&r=0&o=7&dpr=1.4&pid=1.7&rm=3",
            TheatreArtKind::Art,
        ),
        theatre_art(
            "3",
            "Modern Art Exhibition - Colours of Mind",
            "2025-09-15",
            "Delhi",
            "https://static.theprint.in/wp-content/uploads/2023/05/ANI-20230514095742.jpg",
            TheatreArtKind::Art,
        ),
        theatre_art(
            "4",
            "Stand-up Comedy Night",
            "2025-09-20",
            "Bangalore",
            "https://tse2.mm.bing.net/th/id/OIP.hjTXYQg8cfU7nmXJ0QsGNgHaED?r=0&rs=1&pid=ImgDetMain&o=7&rm=3",
            TheatreArtKind::Theatre,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn concert(
    id: &str,
    name: &str,
    date: &str,
    time: &str,
    venue: &str,
    city: &str,
    image: &str,
    price: u32,
) -> ConcertEvent {
    ConcertEvent {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        venue: venue.to_string(),
        city: city.to_string(),
        image: image.to_string(),
        price,
    }
}

fn sport(id: &str, title: &str, date: &str, location: &str, image: &str) -> SportsEvent {
    SportsEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        image: image.to_string(),
    }
}

fn theatre_art(
    id: &str,
    title: &str,
    date: &str,
    location: &str,
    image: &str,
    kind: TheatreArtKind,
) -> TheatreArtEvent {
    TheatreArtEvent {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        image: image.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(concerts().len(), 2);
        assert_eq!(sports().len(), 3);
        assert_eq!(theatre_arts().len(), 4);
    }

    #[test]
    fn test_seed_ids_unique_per_collection() {
        let ids: HashSet<_> = concerts().into_iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), concerts().len());
        let ids: HashSet<_> = sports().into_iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), sports().len());
        let ids: HashSet<_> = theatre_arts().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), theatre_arts().len());
    }
}
