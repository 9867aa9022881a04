// Analytics event sink - the dataLayer analogue
//
// The site pushes cta_click and form_submit events into window.dataLayer.
// Here the same payloads go into a bounded in-memory ring, and every push
// is mirrored to tracing so the events also land in the log panel and the
// optional log files.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

/// Ring capacity; older events are dropped first
const MAX_EVENTS: usize = 256;

/// Outbound call-to-action channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaKind {
    Phone,
    Whatsapp,
}

impl CtaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaKind::Phone => "phone",
            CtaKind::Whatsapp => "whatsapp",
        }
    }
}

/// Event payloads, matching the site's dataLayer pushes
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsPayload {
    CtaClick {
        cta_type: CtaKind,
        /// Which view the CTA fired from
        cta_location: String,
    },
    FormSubmit {
        form_id: String,
    },
}

/// A recorded analytics event
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: AnalyticsPayload,
}

/// Bounded in-memory analytics sink
#[derive(Debug, Default)]
pub struct DataLayer {
    events: VecDeque<AnalyticsEvent>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event, dropping the oldest when full
    pub fn push(&mut self, payload: AnalyticsPayload) {
        match &payload {
            AnalyticsPayload::CtaClick { cta_type, cta_location } => {
                tracing::info!(
                    target: "movedesk::analytics",
                    "cta_click: {} from {}",
                    cta_type.as_str(),
                    cta_location
                );
            }
            AnalyticsPayload::FormSubmit { form_id } => {
                tracing::info!(target: "movedesk::analytics", "form_submit: {}", form_id);
            }
        }

        if self.events.len() >= MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(AnalyticsEvent {
            timestamp: Utc::now(),
            payload,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalyticsEvent> {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_events_in_order() {
        let mut layer = DataLayer::new();
        layer.push(AnalyticsPayload::CtaClick {
            cta_type: CtaKind::Whatsapp,
            cta_location: "Pricing".to_string(),
        });
        layer.push(AnalyticsPayload::FormSubmit {
            form_id: "contact-form".to_string(),
        });

        assert_eq!(layer.len(), 2);
        let kinds: Vec<_> = layer
            .iter()
            .map(|e| match &e.payload {
                AnalyticsPayload::CtaClick { .. } => "cta",
                AnalyticsPayload::FormSubmit { .. } => "form",
            })
            .collect();
        assert_eq!(kinds, ["cta", "form"]);
    }

    #[test]
    fn ring_drops_oldest() {
        let mut layer = DataLayer::new();
        for i in 0..MAX_EVENTS + 10 {
            layer.push(AnalyticsPayload::FormSubmit {
                form_id: format!("form-{i}"),
            });
        }
        assert_eq!(layer.len(), MAX_EVENTS);
        let first = layer.iter().next().unwrap();
        match &first.payload {
            AnalyticsPayload::FormSubmit { form_id } => assert_eq!(form_id, "form-10"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn payload_serializes_like_datalayer() {
        let json = serde_json::to_value(AnalyticsPayload::CtaClick {
            cta_type: CtaKind::Phone,
            cta_location: "Faq".to_string(),
        })
        .unwrap();
        assert_eq!(json["event"], "cta_click");
        assert_eq!(json["cta_type"], "phone");
        assert_eq!(json["cta_location"], "Faq");
    }
}
