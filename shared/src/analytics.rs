use serde::{Serialize, Deserialize};
use crate::wheel_layout::Label;

pub const SPIN_START: &str = "spin_start";
pub const SPIN_WIN: &str = "win";
pub const HEADER_JOIN_CLICK: &str = "header_join_click";
pub const FINAL_POPUP_CLAIM: &str = "final_popup_claim";
pub const STICKY_FOOTER_DEPOSIT: &str = "sticky_footer_deposit";

/// Fire-and-forget funnel record, e.g. `{ "eventType": "spin_start", "details": "Spin 1: Bet 17" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AnalyticsEvent {
    pub fn new(event_type: impl Into<String>, details: Option<String>) -> Self {
        Self {
            event_type: event_type.into(),
            details,
        }
    }

    pub fn spin_start(spin_number: usize, bet: Label) -> Self {
        Self::new(SPIN_START, Some(format!("Spin {}: Bet {}", spin_number, bet)))
    }

    pub fn spin_win(spin_number: usize, landed: Label, amount: i64) -> Self {
        Self::new(SPIN_WIN, Some(format!("Spin {}: Landed {} (+{})", spin_number, landed, amount)))
    }

    pub fn call_to_action(cta: CallToAction) -> Self {
        Self::new(cta.event_type(), None)
    }
}

/// Buttons that leave the demo for the sign-up destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallToAction {
    HeaderJoin,
    FinalPopupClaim,
    StickyFooterDeposit,
}

impl CallToAction {
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::HeaderJoin => HEADER_JOIN_CLICK,
            Self::FinalPopupClaim => FINAL_POPUP_CLAIM,
            Self::StickyFooterDeposit => STICKY_FOOTER_DEPOSIT,
        }
    }
}

/// Destination for analytics records. Delivery is best effort: implementations
/// swallow their own failures and never report back to the game.
pub trait EventSink {
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: AnalyticsEvent) {}
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct LogEventResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCount {
    pub event_type: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: i64,
    pub events: Vec<EventCount>,
}
