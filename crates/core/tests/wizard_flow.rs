//! End-to-end wizard flow: walk all seven steps through a session,
//! submit against a mock inquiry service, and check the exact payload
//! that crosses the wire.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use getaway_core::draft::Draft;
use getaway_core::options::{AccommodationType, TravelInterest};
use getaway_core::payload::{CreatedInquiry, InquiryPayload};
use getaway_core::session::WizardSession;
use getaway_core::submit::{InquiryBackend, SubmitPipeline, TransportError};

/// Records the payload it was handed and answers with a canned record.
struct CapturingBackend {
    captured: Mutex<Option<InquiryPayload>>,
}

impl CapturingBackend {
    fn new() -> Self {
        Self {
            captured: Mutex::new(None),
        }
    }
}

#[async_trait]
impl InquiryBackend for CapturingBackend {
    async fn create_inquiry(
        &self,
        payload: &InquiryPayload,
    ) -> Result<CreatedInquiry, TransportError> {
        *self.captured.lock().unwrap() = Some(payload.clone());
        Ok(CreatedInquiry {
            id: "7c2f6d1e".to_string(),
            created_at: Utc::now(),
            status: "new".to_string(),
        })
    }
}

/// Walk the wizard the way a traveller would: fill each step through the
/// string boundary, advance, and submit from the last step.
#[tokio::test]
async fn full_wizard_walk_submits_the_normalized_record() {
    let mut session = WizardSession::new();

    // Step 1 — trip details.
    session.set_field("destinations", "Italy").unwrap();
    session.set_field("destination_flexibility", "fixed").unwrap();
    session.set_field("departure_airport", "London Heathrow").unwrap();
    session.set_field("trip_length_nights", "10").unwrap();
    session.next();

    // Step 2 — group & budget.
    session.set_field("adult_count", "2").unwrap();
    session.set_field("child_count", "1").unwrap();
    session.set_field("child_ages", "7").unwrap();
    session.set_field("budget_min", "2000").unwrap();
    session.set_field("budget_max", "5000").unwrap();
    session.set_field("budget_scope", "per_person").unwrap();
    session.next();

    // Step 3 — travel style.
    session.set_field("travel_pace", "relaxed").unwrap();
    session.set_field("travel_interests", "food_wine").unwrap();
    session.set_field("travel_interests", "beach").unwrap();
    session.set_field("accommodation_type", "boutique_hotel").unwrap();
    session.next();

    // Step 4 — flights.
    session.set_field("flight_priority", "direct").unwrap();
    session.set_field("airline_preferences", "BA for Avios").unwrap();
    session.next();

    // Step 5 — experiences.
    session.set_field("must_do_experiences", "Cooking class in Tuscany").unwrap();
    session.set_field("special_occasion", "Anniversary").unwrap();
    session.next();

    // Step 6 — practical details.
    session.set_field("dietary_requirements", "Vegetarian").unwrap();
    session.next();

    // Step 7 — contact.
    assert_eq!(session.current_step().to_number(), 7);
    session.set_field("first_name", "Jane").unwrap();
    session.set_field("last_name", "Doe").unwrap();
    session.set_field("email", "j@x.com").unwrap();
    session.set_field("booking_timeline", "1_3_months").unwrap();

    let pipeline = SubmitPipeline::new(CapturingBackend::new());
    let created = pipeline.submit(session.draft()).await.unwrap();
    assert_eq!(created.id, "7c2f6d1e");

    // Successful handoff: the caller resets the session.
    session.reset();
    assert_eq!(session.current_step().to_number(), 1);
    assert_eq!(session.draft(), &Draft::default());

    let payload = pipeline_payload(&pipeline);
    assert_eq!(payload.destinations, "Italy");
    assert_eq!(payload.adult_count, 2);
    assert_eq!(payload.child_count, 1);
    assert_eq!(payload.trip_length_nights, Some(10));
    assert_eq!(payload.budget_min, Some(2000.0));
    assert_eq!(payload.budget_max, Some(5000.0));
    assert_eq!(
        payload.travel_interests,
        vec![TravelInterest::FoodWine, TravelInterest::Beach]
    );
    assert_eq!(payload.accommodation_type, vec![AccommodationType::BoutiqueHotel]);
    assert_eq!(payload.phone, None);

    // The wire shape the service sees.
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["first_name"], "Jane");
    assert_eq!(json["email"], "j@x.com");
    assert_eq!(json["destination_flexibility"], "fixed");
    assert_eq!(json["budget_scope"], "per_person");
    assert_eq!(json["budget_min"], 2000.0);
    assert_eq!(json["booking_timeline"], "1_3_months");
    assert_eq!(json["travel_interests"], serde_json::json!(["food_wine", "beach"]));
    assert!(json["travel_start_date"].is_null());
}

fn pipeline_payload(pipeline: &SubmitPipeline<CapturingBackend>) -> InquiryPayload {
    pipeline.backend().captured.lock().unwrap().clone().unwrap()
}
