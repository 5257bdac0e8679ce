// Event classification
// Decides which events show as upcoming and which go through colorization

use crate::models::event::{Event, EventStatus, EventWithColors};

/// Events split by how they are presented.
///
/// The two lists overlap: `Active` events are both upcoming and colorizable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub upcoming: Vec<Event>,
    pub colorizable: Vec<Event>,
}

pub fn is_upcoming(status: &EventStatus) -> bool {
    matches!(status, EventStatus::Upcoming | EventStatus::Active)
}

pub fn is_colorizable(status: &EventStatus) -> bool {
    *status != EventStatus::Upcoming
}

pub fn is_recent(status: &EventStatus) -> bool {
    *status == EventStatus::Complete
}

pub fn classify(events: Vec<Event>) -> Classified {
    let mut classified = Classified::default();
    for event in events {
        if is_upcoming(&event.status) {
            classified.upcoming.push(event.clone());
        }
        if is_colorizable(&event.status) {
            classified.colorizable.push(event);
        }
    }
    classified
}

/// Keep only completed events, preserving order
pub fn filter_recent(events: &[EventWithColors]) -> Vec<EventWithColors> {
    events
        .iter()
        .filter(|colored| is_recent(&colored.event.status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn event(id: &str, status: EventStatus) -> Event {
        Event::new(id, id, status, "photo.png")
    }

    #[test_case(EventStatus::Upcoming, true, false; "upcoming only")]
    #[test_case(EventStatus::Active, true, true; "active in both")]
    #[test_case(EventStatus::Complete, false, true; "complete colorizable")]
    #[test_case(EventStatus::Other("Cancelled".into()), false, true; "other colorizable")]
    fn test_membership(status: EventStatus, upcoming: bool, colorizable: bool) {
        let classified = classify(vec![event("rec1", status)]);
        assert_eq!(classified.upcoming.len() == 1, upcoming);
        assert_eq!(classified.colorizable.len() == 1, colorizable);
    }

    #[test]
    fn test_order_is_preserved() {
        let classified = classify(vec![
            event("a", EventStatus::Complete),
            event("b", EventStatus::Upcoming),
            event("c", EventStatus::Active),
            event("d", EventStatus::Complete),
        ]);

        let upcoming: Vec<_> = classified.upcoming.iter().map(|e| e.id.as_str()).collect();
        let colorizable: Vec<_> = classified
            .colorizable
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(upcoming, vec!["b", "c"]);
        assert_eq!(colorizable, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_recent_keeps_only_complete() {
        let colored = |id: &str, status| EventWithColors {
            event: event(id, status),
            tag_color: "#000000".to_string(),
            logo_preview_background_color: "#ffffff".to_string(),
        };

        let recent = filter_recent(&[
            colored("a", EventStatus::Active),
            colored("b", EventStatus::Complete),
            colored("c", EventStatus::Other("Postponed".into())),
        ]);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].event.id, "b");
    }
}
