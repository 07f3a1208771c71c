//! Detail popup state
//!
//! Each request is tagged with a ticket from a generation counter. Only the
//! ticket of the latest request can open the popup, so a slow response for
//! an earlier click never replaces the detail the user asked for last.

use poketeam_domain::{CreatureDetail, CreatureId};

use crate::application::ServiceError;

/// Tag handed out by [`DetailTracker::request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Closed,
    Loading(DetailTicket),
    Open(CreatureDetail),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailTracker {
    generation: u64,
    phase: DetailPhase,
}

impl DetailTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `id`. Any earlier outstanding ticket becomes stale.
    pub fn request(&mut self, id: CreatureId) -> DetailTicket {
        self.generation += 1;
        let ticket = DetailTicket(self.generation);
        tracing::debug!("Requesting detail for {} as {:?}", id, ticket);
        self.phase = DetailPhase::Loading(ticket);
        ticket
    }

    /// Apply a fetch result. Returns `false` when `ticket` is stale.
    pub fn resolve(
        &mut self,
        ticket: DetailTicket,
        result: Result<CreatureDetail, ServiceError>,
    ) -> bool {
        let current = matches!(
            self.phase,
            DetailPhase::Loading(pending) if pending == ticket
        );
        if !current {
            tracing::debug!("Discarding stale detail response {:?}", ticket);
            return false;
        }

        self.phase = match result {
            Ok(detail) => DetailPhase::Open(detail),
            Err(e) => {
                tracing::error!("Failed to fetch creature detail: {}", e);
                DetailPhase::Closed
            }
        };
        true
    }

    pub fn close(&mut self) {
        self.phase = DetailPhase::Closed;
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    /// The detail to show, if the popup is open.
    pub fn detail(&self) -> Option<&CreatureDetail> {
        match &self.phase {
            DetailPhase::Open(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailPhase::Loading(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use poketeam_domain::Stat;

    fn id(raw: u32) -> CreatureId {
        CreatureId::new(raw).expect("valid id")
    }

    fn detail(name: &str) -> CreatureDetail {
        CreatureDetail {
            name: name.to_string(),
            sprite_url: format!("https://img/{name}.png"),
            height_meters: 0.4,
            weight_kg: 6.0,
            types: vec!["electric".to_string()],
            stats: vec![Stat {
                name: "hp".to_string(),
                value: 35,
            }],
        }
    }

    #[test]
    fn test_request_then_resolve_opens_popup() {
        let mut tracker = DetailTracker::new();
        let ticket = tracker.request(id(25));
        assert_eq!(tracker.phase(), &DetailPhase::Loading(ticket));

        assert!(tracker.resolve(ticket, Ok(detail("pikachu"))));

        assert_eq!(tracker.detail().map(|d| d.name.as_str()), Some("pikachu"));
    }

    #[test]
    fn test_failed_fetch_keeps_popup_closed() {
        let mut tracker = DetailTracker::new();
        let ticket = tracker.request(id(25));

        tracker.resolve(
            ticket,
            Err(ServiceError::Api(fixtures::api_request_failed("offline"))),
        );

        assert_eq!(tracker.phase(), &DetailPhase::Closed);
    }

    #[test]
    fn test_last_requested_wins_over_last_resolved() {
        let mut tracker = DetailTracker::new();
        let slow = tracker.request(id(1));
        let fast = tracker.request(id(4));

        assert!(tracker.resolve(fast, Ok(detail("charmander"))));
        assert!(!tracker.resolve(slow, Ok(detail("bulbasaur"))));

        assert_eq!(
            tracker.detail().map(|d| d.name.as_str()),
            Some("charmander")
        );
    }

    #[test]
    fn test_close_while_loading_discards_response() {
        let mut tracker = DetailTracker::new();
        let ticket = tracker.request(id(7));
        tracker.close();

        assert!(!tracker.resolve(ticket, Ok(detail("squirtle"))));
        assert_eq!(tracker.detail(), None);
    }

    #[test]
    fn test_resolving_twice_is_ignored() {
        let mut tracker = DetailTracker::new();
        let ticket = tracker.request(id(25));
        tracker.resolve(ticket, Ok(detail("pikachu")));

        assert!(!tracker.resolve(ticket, Ok(detail("raichu"))));
        assert_eq!(tracker.detail().map(|d| d.name.as_str()), Some("pikachu"));
    }
}
