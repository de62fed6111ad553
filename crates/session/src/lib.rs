//! # CareerFit Session
//!
//! The linear screen flow of an assessment:
//!
//! ```text
//! welcome → domain → career → instructions → questions → loading
//!         → result → insights → next-steps
//! ```
//!
//! [`SessionState`] is an immutable snapshot with pure transitions.
//! [`Session`] owns the current snapshot, drives an
//! [`careerfit_core::AssessmentProcessor`] while on `loading`, and
//! publishes [`careerfit_core::DomainEvent`]s.

pub mod report;
pub mod screen;
pub mod session;
pub mod state;

pub use report::ReportSnapshot;
pub use screen::{Action, Screen};
pub use session::{Session, SubmitOutcome};
pub use state::{SessionState, TransitionError};

use careerfit_config::SessionConfig;
use careerfit_core::{AssessmentProcessor, EventBus};
use std::sync::Arc;

/// Build a session from config, with an event bus when publishing is on.
pub fn session_from_config(
    processor: Arc<dyn AssessmentProcessor>,
    config: &SessionConfig,
) -> (Session, Option<Arc<EventBus>>) {
    let session = Session::new(processor);
    if config.publish_events {
        let bus = Arc::new(EventBus::new(config.event_capacity));
        (session.with_events(bus.clone()), Some(bus))
    } else {
        (session, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerfit_catalog::StaticCatalog;
    use careerfit_scoring::Orchestrator;

    fn processor() -> Arc<dyn AssessmentProcessor> {
        Arc::new(Orchestrator::new(Arc::new(StaticCatalog::builtin().unwrap())))
    }

    #[test]
    fn events_follow_config() {
        let (mut session, bus) = session_from_config(processor(), &SessionConfig::default());
        let mut rx = bus.expect("publishing is on by default").subscribe();
        session.start().unwrap();
        assert!(rx.try_recv().is_ok());

        let quiet = SessionConfig { publish_events: false, ..SessionConfig::default() };
        let (session, bus) = session_from_config(processor(), &quiet);
        assert!(bus.is_none());
        assert_eq!(session.screen(), Screen::Welcome);
        assert!(!session.id().is_empty());
    }
}
