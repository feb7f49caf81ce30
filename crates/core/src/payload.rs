//! Submission-time normalization of a draft into the wire payload.
//!
//! The draft stores whatever the traveller typed; the payload is the
//! well-typed record the inquiry service accepts.  Normalization never
//! fails: unparsable numeric input degrades to the documented defaults
//! and empty optional text becomes `null`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::Draft;
use crate::options::{
    AccommodationPriority, AccommodationType, BookingTimeline, BudgetFlexibility, BudgetScope,
    ContactMethod, DestinationFlexibility, ExplorationStyle, FlightPriority, LayoverTolerance,
    PassportValid, PlanningStyle, TransportPreference, TravelInterest, TravelPace,
};

/// The normalized inquiry record sent to the create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryPayload {
    // Identity
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_contact_method: ContactMethod,

    // Trip basics
    pub destinations: String,
    pub destination_flexibility: DestinationFlexibility,
    pub departure_airport: String,
    pub departure_flexible: bool,
    pub travel_start_date: Option<String>,
    pub travel_end_date: Option<String>,
    pub travel_date_notes: Option<String>,
    pub trip_length_nights: Option<i64>,

    // Group & budget
    pub adult_count: u32,
    pub child_count: u32,
    pub child_ages: Option<String>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub budget_flexibility: BudgetFlexibility,
    pub budget_scope: BudgetScope,

    // Travel style
    pub travel_pace: TravelPace,
    pub travel_interests: Vec<TravelInterest>,
    pub accommodation_type: Vec<AccommodationType>,
    pub accommodation_priority: AccommodationPriority,

    // Flights & transport
    pub flight_priority: FlightPriority,
    pub layover_tolerance: LayoverTolerance,
    pub airline_preferences: Option<String>,
    pub transport_preference: Vec<TransportPreference>,

    // Experiences
    pub must_do_experiences: Option<String>,
    pub exploration_style: ExplorationStyle,
    pub special_occasion: Option<String>,

    // Practical
    pub dietary_requirements: Option<String>,
    pub accessibility_needs: Option<String>,
    pub passport_valid: PassportValid,

    // Intent
    pub booking_timeline: BookingTimeline,
    pub planning_style: PlanningStyle,
}

impl InquiryPayload {
    /// Normalize a draft into the wire payload.
    ///
    /// Coercion rules:
    /// - required texts are trimmed, optional texts become `None` when
    ///   empty after trimming;
    /// - `adult_count` becomes a positive integer (1 when the input is
    ///   unparsable or zero), `child_count` a non-negative integer (0);
    /// - `trip_length_nights` and the budget bounds become `None` when
    ///   empty or unparsable.
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: optional_text(&draft.phone),
            preferred_contact_method: draft.preferred_contact_method,

            destinations: draft.destinations.trim().to_string(),
            destination_flexibility: draft.destination_flexibility,
            departure_airport: draft.departure_airport.trim().to_string(),
            departure_flexible: draft.departure_flexible,
            travel_start_date: optional_text(&draft.travel_start_date),
            travel_end_date: optional_text(&draft.travel_end_date),
            travel_date_notes: optional_text(&draft.travel_date_notes),
            trip_length_nights: optional_int(&draft.trip_length_nights),

            adult_count: positive_count(&draft.adult_count),
            child_count: nonnegative_count(&draft.child_count),
            child_ages: optional_text(&draft.child_ages),
            budget_min: optional_decimal(&draft.budget_min),
            budget_max: optional_decimal(&draft.budget_max),
            budget_flexibility: draft.budget_flexibility,
            budget_scope: draft.budget_scope,

            travel_pace: draft.travel_pace,
            travel_interests: draft.travel_interests.clone(),
            accommodation_type: draft.accommodation_type.clone(),
            accommodation_priority: draft.accommodation_priority,

            flight_priority: draft.flight_priority,
            layover_tolerance: draft.layover_tolerance,
            airline_preferences: optional_text(&draft.airline_preferences),
            transport_preference: draft.transport_preference.clone(),

            must_do_experiences: optional_text(&draft.must_do_experiences),
            exploration_style: draft.exploration_style,
            special_occasion: optional_text(&draft.special_occasion),

            dietary_requirements: optional_text(&draft.dietary_requirements),
            accessibility_needs: optional_text(&draft.accessibility_needs),
            passport_valid: draft.passport_valid,

            booking_timeline: draft.booking_timeline,
            planning_style: draft.planning_style,
        }
    }
}

/// The record the inquiry service returns on a successful create.
///
/// Unknown response fields are ignored; only the parts the wizard needs
/// to confirm the handoff are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedInquiry {
    /// Server-assigned opaque identifier.
    pub id: String,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Workflow status assigned by the service (e.g. `new`).
    pub status: String,
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Positive traveller count: unparsable or zero input degrades to 1.
fn positive_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|&n| n > 0).unwrap_or(1)
}

/// Non-negative traveller count: unparsable input degrades to 0.
fn nonnegative_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().unwrap_or(0)
}

fn optional_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn optional_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_degrade_to_documented_defaults() {
        assert_eq!(positive_count("3"), 3);
        assert_eq!(positive_count("abc"), 1);
        assert_eq!(positive_count(""), 1);
        assert_eq!(positive_count("0"), 1);
        assert_eq!(positive_count("-4"), 1);

        assert_eq!(nonnegative_count("2"), 2);
        assert_eq!(nonnegative_count("abc"), 0);
        assert_eq!(nonnegative_count(""), 0);
        assert_eq!(nonnegative_count("-4"), 0);
    }

    #[test]
    fn optional_numerics_degrade_to_none() {
        assert_eq!(optional_int("10"), Some(10));
        assert_eq!(optional_int(" 7 "), Some(7));
        assert_eq!(optional_int(""), None);
        assert_eq!(optional_int("soon"), None);

        assert_eq!(optional_decimal("2000"), Some(2000.0));
        assert_eq!(optional_decimal("2500.50"), Some(2500.5));
        assert_eq!(optional_decimal(""), None);
        assert_eq!(optional_decimal("lots"), None);
        assert_eq!(optional_decimal("NaN"), None);
    }

    #[test]
    fn optional_text_trims_and_drops_empty() {
        assert_eq!(optional_text("  hello  "), Some("hello".to_string()));
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(""), None);
    }

    #[test]
    fn from_draft_normalizes_numeric_input() {
        let mut draft = Draft::default();
        draft.adult_count = "abc".to_string();
        draft.child_count = "two".to_string();
        draft.trip_length_nights = "10".to_string();
        draft.budget_min = "2000".to_string();
        draft.budget_max = "5000".to_string();

        let payload = InquiryPayload::from_draft(&draft);
        assert_eq!(payload.adult_count, 1);
        assert_eq!(payload.child_count, 0);
        assert_eq!(payload.trip_length_nights, Some(10));
        assert_eq!(payload.budget_min, Some(2000.0));
        assert_eq!(payload.budget_max, Some(5000.0));
    }

    #[test]
    fn from_draft_trims_required_text() {
        let mut draft = Draft::default();
        draft.first_name = "  Jane ".to_string();
        draft.destinations = " Italy  ".to_string();

        let payload = InquiryPayload::from_draft(&draft);
        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.destinations, "Italy");
    }

    #[test]
    fn default_draft_serializes_with_wire_enum_values_and_nulls() {
        let payload = InquiryPayload::from_draft(&Draft::default());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["destination_flexibility"], "open");
        assert_eq!(json["budget_scope"], "total_trip");
        assert_eq!(json["travel_pace"], "balanced");
        assert_eq!(json["booking_timeline"], "exploring");
        assert_eq!(json["preferred_contact_method"], "email");
        assert_eq!(json["adult_count"], 2);
        assert_eq!(json["child_count"], 0);
        assert!(json["phone"].is_null());
        assert!(json["trip_length_nights"].is_null());
        assert!(json["budget_min"].is_null());
        assert_eq!(json["travel_interests"], serde_json::json!([]));
        assert_eq!(json["departure_flexible"], false);
    }

    #[test]
    fn created_inquiry_deserializes_a_service_response() {
        let body = serde_json::json!({
            "id": "a1b2c3d4",
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "j@x.com",
            "destinations": "Italy",
            "created_at": "2026-08-08T10:15:30.123456+00:00",
            "source": "website_form",
            "status": "new",
        });

        let created: CreatedInquiry = serde_json::from_value(body).unwrap();
        assert_eq!(created.id, "a1b2c3d4");
        assert_eq!(created.status, "new");
        let expected = DateTime::parse_from_rfc3339("2026-08-08T10:15:30.123456+00:00").unwrap();
        assert_eq!(created.created_at, expected);
    }
}
