//! The in-progress inquiry draft and its update operations.
//!
//! A [`Draft`] is always fully structured: every field has a documented
//! default, so presentation code never deals with absent keys.  Updates
//! come in two shapes: a typed [`DraftPatch`] for compiled callers, and
//! the string-keyed [`Draft::set`] boundary for presentation layers that
//! work from the step schemas.  Unknown keys and unrecognized option
//! values are rejected at the boundary, never stored.

use crate::error::CoreError;
use crate::options::{
    AccommodationPriority, AccommodationType, BookingTimeline, BudgetFlexibility, BudgetScope,
    ContactMethod, DestinationFlexibility, ExplorationStyle, FlightPriority, LayoverTolerance,
    PassportValid, PlanningStyle, TransportPreference, TravelInterest, TravelPace,
};

/// Toggle membership of `tag` in a multi-choice set.
///
/// Toggling the same tag twice returns the set to its original state.
pub fn toggle<T: PartialEq>(set: &mut Vec<T>, tag: T) {
    if let Some(pos) = set.iter().position(|t| *t == tag) {
        set.remove(pos);
    } else {
        set.push(tag);
    }
}

/// The single evolving record a traveller composes across the wizard.
///
/// Numeric inputs (`adult_count`, `budget_min`, …) keep the raw string the
/// traveller typed; coercion to well-typed values happens once, at
/// submission (see [`crate::payload::InquiryPayload::from_draft`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    // Trip details
    pub destinations: String,
    pub destination_flexibility: DestinationFlexibility,
    pub departure_airport: String,
    pub departure_flexible: bool,
    pub travel_start_date: String,
    pub travel_end_date: String,
    pub travel_date_notes: String,
    pub trip_length_nights: String,

    // Group & budget
    pub adult_count: String,
    pub child_count: String,
    pub child_ages: String,
    pub budget_min: String,
    pub budget_max: String,
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
    pub airline_preferences: String,
    pub transport_preference: Vec<TransportPreference>,

    // Experiences
    pub must_do_experiences: String,
    pub exploration_style: ExplorationStyle,
    pub special_occasion: String,

    // Practical details
    pub dietary_requirements: String,
    pub accessibility_needs: String,
    pub passport_valid: PassportValid,

    // Contact & intent
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub preferred_contact_method: ContactMethod,
    pub booking_timeline: BookingTimeline,
    pub planning_style: PlanningStyle,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            destinations: String::new(),
            destination_flexibility: DestinationFlexibility::default(),
            departure_airport: String::new(),
            departure_flexible: false,
            travel_start_date: String::new(),
            travel_end_date: String::new(),
            travel_date_notes: String::new(),
            trip_length_nights: String::new(),

            // A couple travelling with no children is the starting point.
            adult_count: "2".to_string(),
            child_count: "0".to_string(),
            child_ages: String::new(),
            budget_min: String::new(),
            budget_max: String::new(),
            budget_flexibility: BudgetFlexibility::default(),
            budget_scope: BudgetScope::default(),

            travel_pace: TravelPace::default(),
            travel_interests: Vec::new(),
            accommodation_type: Vec::new(),
            accommodation_priority: AccommodationPriority::default(),

            flight_priority: FlightPriority::default(),
            layover_tolerance: LayoverTolerance::default(),
            airline_preferences: String::new(),
            transport_preference: Vec::new(),

            must_do_experiences: String::new(),
            exploration_style: ExplorationStyle::default(),
            special_occasion: String::new(),

            dietary_requirements: String::new(),
            accessibility_needs: String::new(),
            passport_valid: PassportValid::default(),

            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            preferred_contact_method: ContactMethod::default(),
            booking_timeline: BookingTimeline::default(),
            planning_style: PlanningStyle::default(),
        }
    }
}

/// Typed partial update for [`Draft`].
///
/// `None` fields are left untouched by [`Draft::merge`]; unknown keys are
/// unrepresentable by construction.
#[derive(Debug, Clone, Default)]
pub struct DraftPatch {
    pub destinations: Option<String>,
    pub destination_flexibility: Option<DestinationFlexibility>,
    pub departure_airport: Option<String>,
    pub departure_flexible: Option<bool>,
    pub travel_start_date: Option<String>,
    pub travel_end_date: Option<String>,
    pub travel_date_notes: Option<String>,
    pub trip_length_nights: Option<String>,

    pub adult_count: Option<String>,
    pub child_count: Option<String>,
    pub child_ages: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
    pub budget_flexibility: Option<BudgetFlexibility>,
    pub budget_scope: Option<BudgetScope>,

    pub travel_pace: Option<TravelPace>,
    pub travel_interests: Option<Vec<TravelInterest>>,
    pub accommodation_type: Option<Vec<AccommodationType>>,
    pub accommodation_priority: Option<AccommodationPriority>,

    pub flight_priority: Option<FlightPriority>,
    pub layover_tolerance: Option<LayoverTolerance>,
    pub airline_preferences: Option<String>,
    pub transport_preference: Option<Vec<TransportPreference>>,

    pub must_do_experiences: Option<String>,
    pub exploration_style: Option<ExplorationStyle>,
    pub special_occasion: Option<String>,

    pub dietary_requirements: Option<String>,
    pub accessibility_needs: Option<String>,
    pub passport_valid: Option<PassportValid>,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_contact_method: Option<ContactMethod>,
    pub booking_timeline: Option<BookingTimeline>,
    pub planning_style: Option<PlanningStyle>,
}

impl Draft {
    /// Shallow-merge a typed patch into the draft.
    ///
    /// Fields the patch leaves as `None` keep their current value.
    pub fn merge(&mut self, patch: DraftPatch) {
        if let Some(v) = patch.destinations {
            self.destinations = v;
        }
        if let Some(v) = patch.destination_flexibility {
            self.destination_flexibility = v;
        }
        if let Some(v) = patch.departure_airport {
            self.departure_airport = v;
        }
        if let Some(v) = patch.departure_flexible {
            self.departure_flexible = v;
        }
        if let Some(v) = patch.travel_start_date {
            self.travel_start_date = v;
        }
        if let Some(v) = patch.travel_end_date {
            self.travel_end_date = v;
        }
        if let Some(v) = patch.travel_date_notes {
            self.travel_date_notes = v;
        }
        if let Some(v) = patch.trip_length_nights {
            self.trip_length_nights = v;
        }
        if let Some(v) = patch.adult_count {
            self.adult_count = v;
        }
        if let Some(v) = patch.child_count {
            self.child_count = v;
        }
        if let Some(v) = patch.child_ages {
            self.child_ages = v;
        }
        if let Some(v) = patch.budget_min {
            self.budget_min = v;
        }
        if let Some(v) = patch.budget_max {
            self.budget_max = v;
        }
        if let Some(v) = patch.budget_flexibility {
            self.budget_flexibility = v;
        }
        if let Some(v) = patch.budget_scope {
            self.budget_scope = v;
        }
        if let Some(v) = patch.travel_pace {
            self.travel_pace = v;
        }
        if let Some(v) = patch.travel_interests {
            self.travel_interests = v;
        }
        if let Some(v) = patch.accommodation_type {
            self.accommodation_type = v;
        }
        if let Some(v) = patch.accommodation_priority {
            self.accommodation_priority = v;
        }
        if let Some(v) = patch.flight_priority {
            self.flight_priority = v;
        }
        if let Some(v) = patch.layover_tolerance {
            self.layover_tolerance = v;
        }
        if let Some(v) = patch.airline_preferences {
            self.airline_preferences = v;
        }
        if let Some(v) = patch.transport_preference {
            self.transport_preference = v;
        }
        if let Some(v) = patch.must_do_experiences {
            self.must_do_experiences = v;
        }
        if let Some(v) = patch.exploration_style {
            self.exploration_style = v;
        }
        if let Some(v) = patch.special_occasion {
            self.special_occasion = v;
        }
        if let Some(v) = patch.dietary_requirements {
            self.dietary_requirements = v;
        }
        if let Some(v) = patch.accessibility_needs {
            self.accessibility_needs = v;
        }
        if let Some(v) = patch.passport_valid {
            self.passport_valid = v;
        }
        if let Some(v) = patch.first_name {
            self.first_name = v;
        }
        if let Some(v) = patch.last_name {
            self.last_name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.preferred_contact_method {
            self.preferred_contact_method = v;
        }
        if let Some(v) = patch.booking_timeline {
            self.booking_timeline = v;
        }
        if let Some(v) = patch.planning_style {
            self.planning_style = v;
        }
    }

    /// Set one field from its wire key and a raw string value.
    ///
    /// This is the strict boundary for presentation layers driven by the
    /// step schemas: option values go through their set's `parse`, booleans
    /// accept `true`/`false`, and multi-choice keys toggle membership of
    /// the given tag.  Unknown keys and unrecognized values return
    /// [`CoreError::Validation`] and leave the draft untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        match key {
            "destinations" => self.destinations = value.to_string(),
            "destination_flexibility" => {
                self.destination_flexibility = DestinationFlexibility::parse(value)?
            }
            "departure_airport" => self.departure_airport = value.to_string(),
            "departure_flexible" => self.departure_flexible = parse_bool(key, value)?,
            "travel_start_date" => self.travel_start_date = value.to_string(),
            "travel_end_date" => self.travel_end_date = value.to_string(),
            "travel_date_notes" => self.travel_date_notes = value.to_string(),
            "trip_length_nights" => self.trip_length_nights = value.to_string(),

            "adult_count" => self.adult_count = value.to_string(),
            "child_count" => self.child_count = value.to_string(),
            "child_ages" => self.child_ages = value.to_string(),
            "budget_min" => self.budget_min = value.to_string(),
            "budget_max" => self.budget_max = value.to_string(),
            "budget_flexibility" => self.budget_flexibility = BudgetFlexibility::parse(value)?,
            "budget_scope" => self.budget_scope = BudgetScope::parse(value)?,

            "travel_pace" => self.travel_pace = TravelPace::parse(value)?,
            "travel_interests" => {
                toggle(&mut self.travel_interests, TravelInterest::parse(value)?)
            }
            "accommodation_type" => {
                toggle(&mut self.accommodation_type, AccommodationType::parse(value)?)
            }
            "accommodation_priority" => {
                self.accommodation_priority = AccommodationPriority::parse(value)?
            }

            "flight_priority" => self.flight_priority = FlightPriority::parse(value)?,
            "layover_tolerance" => self.layover_tolerance = LayoverTolerance::parse(value)?,
            "airline_preferences" => self.airline_preferences = value.to_string(),
            "transport_preference" => {
                toggle(&mut self.transport_preference, TransportPreference::parse(value)?)
            }

            "must_do_experiences" => self.must_do_experiences = value.to_string(),
            "exploration_style" => self.exploration_style = ExplorationStyle::parse(value)?,
            "special_occasion" => self.special_occasion = value.to_string(),

            "dietary_requirements" => self.dietary_requirements = value.to_string(),
            "accessibility_needs" => self.accessibility_needs = value.to_string(),
            "passport_valid" => self.passport_valid = PassportValid::parse(value)?,

            "first_name" => self.first_name = value.to_string(),
            "last_name" => self.last_name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "preferred_contact_method" => {
                self.preferred_contact_method = ContactMethod::parse(value)?
            }
            "booking_timeline" => self.booking_timeline = BookingTimeline::parse(value)?,
            "planning_style" => self.planning_style = PlanningStyle::parse(value)?,

            _ => {
                return Err(CoreError::Validation(format!("Unknown draft field '{key}'")));
            }
        }

        Ok(())
    }
}

/// Parse a boolean flag value, naming the field on failure.
fn parse_bool(field: &str, value: &str) -> Result<bool, CoreError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: true, false"
        ))),
    }
}
