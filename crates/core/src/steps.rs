//! Step definitions for the seven-page inquiry wizard.
//!
//! Each step owns a fixed, ordered subset of draft fields, described
//! declaratively so presentation layers can render any step without
//! knowing the fields themselves.  The ordering 1..7 is fixed.

use crate::error::CoreError;

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 7;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 7;

/// The seven steps of the inquiry wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    TripDetails,
    GroupBudget,
    TravelStyle,
    Flights,
    Experiences,
    Practical,
    Contact,
}

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::TripDetails),
            2 => Ok(Self::GroupBudget),
            3 => Ok(Self::TravelStyle),
            4 => Ok(Self::Flights),
            5 => Ok(Self::Experiences),
            6 => Ok(Self::Practical),
            7 => Ok(Self::Contact),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::TripDetails => 1,
            Self::GroupBudget => 2,
            Self::TravelStyle => 3,
            Self::Flights => 4,
            Self::Experiences => 5,
            Self::Practical => 6,
            Self::Contact => 7,
        }
    }

    /// Human-readable title for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::TripDetails => "Your Trip",
            Self::GroupBudget => "Who's Travelling",
            Self::TravelStyle => "Travel Style",
            Self::Flights => "Getting There",
            Self::Experiences => "Experiences",
            Self::Practical => "Practical Details",
            Self::Contact => "Contact Info",
        }
    }

    /// The fields this step renders, in display order.
    pub fn schema(self) -> &'static [FieldSpec] {
        match self {
            Self::TripDetails => TRIP_DETAILS,
            Self::GroupBudget => GROUP_BUDGET,
            Self::TravelStyle => TRAVEL_STYLE,
            Self::Flights => FLIGHTS,
            Self::Experiences => EXPERIENCES,
            Self::Practical => PRACTICAL,
            Self::Contact => CONTACT,
        }
    }
}

/// The semantic kind of a draft field, with option values where the set
/// is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    LongText,
    /// Raw numeric input, coerced at submission.
    Number,
    /// Exactly one of a fixed option set.
    EnumSingle(&'static [&'static str]),
    /// Any subset of a fixed option set; values toggle membership.
    EnumMulti(&'static [&'static str]),
    /// Two-valued flag.
    Bool,
}

/// One field descriptor in a step schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire key, accepted by [`crate::draft::Draft::set`].
    pub key: &'static str,
    /// Prompt shown to the traveller.
    pub label: &'static str,
    pub kind: FieldKind,
    /// Enforced at submission, not during navigation.
    pub required: bool,
}

const DESTINATION_FLEXIBILITY_VALUES: &[&str] = &["fixed", "open"];
const BUDGET_FLEXIBILITY_VALUES: &[&str] = &["fixed", "flexible", "unsure"];
const BUDGET_SCOPE_VALUES: &[&str] = &["per_person", "total_trip"];
const TRAVEL_PACE_VALUES: &[&str] = &["relaxed", "balanced", "fast"];
const TRAVEL_INTEREST_VALUES: &[&str] = &[
    "culture", "adventure", "food_wine", "beach", "nature", "city", "luxury", "value",
];
const ACCOMMODATION_TYPE_VALUES: &[&str] =
    &["boutique_hotel", "resort", "apartment_villa", "standard_hotel"];
const ACCOMMODATION_PRIORITY_VALUES: &[&str] = &["comfort", "design", "location", "flexible"];
const FLIGHT_PRIORITY_VALUES: &[&str] = &["cheapest", "fastest", "direct", "balanced"];
const LAYOVER_TOLERANCE_VALUES: &[&str] = &["none", "short_only", "flexible"];
const TRANSPORT_PREFERENCE_VALUES: &[&str] =
    &["transfers", "public_transport", "car_hire", "flexible"];
const EXPLORATION_STYLE_VALUES: &[&str] = &["guided", "independent", "mixed"];
const PASSPORT_VALID_VALUES: &[&str] = &["yes", "no", "unsure"];
const CONTACT_METHOD_VALUES: &[&str] = &["email", "phone", "whatsapp"];
const BOOKING_TIMELINE_VALUES: &[&str] = &["exploring", "1_3_months", "ready"];
const PLANNING_STYLE_VALUES: &[&str] = &["full_service", "options", "collaborative"];

const TRIP_DETAILS: &[FieldSpec] = &[
    FieldSpec {
        key: "destinations",
        label: "Where would you like to go?",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        key: "destination_flexibility",
        label: "How fixed are those destinations?",
        kind: FieldKind::EnumSingle(DESTINATION_FLEXIBILITY_VALUES),
        required: false,
    },
    FieldSpec {
        key: "departure_airport",
        label: "Which airport would you leave from?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "departure_flexible",
        label: "I'm flexible on departure airport",
        kind: FieldKind::Bool,
        required: false,
    },
    FieldSpec {
        key: "travel_start_date",
        label: "Earliest travel date",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "travel_end_date",
        label: "Latest travel date",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "travel_date_notes",
        label: "Anything we should know about your dates?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "trip_length_nights",
        label: "Roughly how many nights?",
        kind: FieldKind::Number,
        required: false,
    },
];

const GROUP_BUDGET: &[FieldSpec] = &[
    FieldSpec {
        key: "adult_count",
        label: "How many adults are travelling?",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        key: "child_count",
        label: "How many children?",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        key: "child_ages",
        label: "How old are the children?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "budget_min",
        label: "Budget from",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        key: "budget_max",
        label: "Budget up to",
        kind: FieldKind::Number,
        required: false,
    },
    FieldSpec {
        key: "budget_flexibility",
        label: "How firm is that budget?",
        kind: FieldKind::EnumSingle(BUDGET_FLEXIBILITY_VALUES),
        required: false,
    },
    FieldSpec {
        key: "budget_scope",
        label: "Is that per person or for the whole trip?",
        kind: FieldKind::EnumSingle(BUDGET_SCOPE_VALUES),
        required: false,
    },
];

const TRAVEL_STYLE: &[FieldSpec] = &[
    FieldSpec {
        key: "travel_pace",
        label: "What's your ideal travel pace?",
        kind: FieldKind::EnumSingle(TRAVEL_PACE_VALUES),
        required: false,
    },
    FieldSpec {
        key: "travel_interests",
        label: "What are you most interested in?",
        kind: FieldKind::EnumMulti(TRAVEL_INTEREST_VALUES),
        required: false,
    },
    FieldSpec {
        key: "accommodation_type",
        label: "Where would you like to stay?",
        kind: FieldKind::EnumMulti(ACCOMMODATION_TYPE_VALUES),
        required: false,
    },
    FieldSpec {
        key: "accommodation_priority",
        label: "What matters most about your accommodation?",
        kind: FieldKind::EnumSingle(ACCOMMODATION_PRIORITY_VALUES),
        required: false,
    },
];

const FLIGHTS: &[FieldSpec] = &[
    FieldSpec {
        key: "flight_priority",
        label: "What matters most about your flights?",
        kind: FieldKind::EnumSingle(FLIGHT_PRIORITY_VALUES),
        required: false,
    },
    FieldSpec {
        key: "layover_tolerance",
        label: "How do you feel about layovers?",
        kind: FieldKind::EnumSingle(LAYOVER_TOLERANCE_VALUES),
        required: false,
    },
    FieldSpec {
        key: "airline_preferences",
        label: "Any airline preferences?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "transport_preference",
        label: "How would you like to get around?",
        kind: FieldKind::EnumMulti(TRANSPORT_PREFERENCE_VALUES),
        required: false,
    },
];

const EXPERIENCES: &[FieldSpec] = &[
    FieldSpec {
        key: "must_do_experiences",
        label: "Any must-do experiences?",
        kind: FieldKind::LongText,
        required: false,
    },
    FieldSpec {
        key: "exploration_style",
        label: "How do you like to explore?",
        kind: FieldKind::EnumSingle(EXPLORATION_STYLE_VALUES),
        required: false,
    },
    FieldSpec {
        key: "special_occasion",
        label: "Are you celebrating anything?",
        kind: FieldKind::Text,
        required: false,
    },
];

const PRACTICAL: &[FieldSpec] = &[
    FieldSpec {
        key: "dietary_requirements",
        label: "Any dietary requirements?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "accessibility_needs",
        label: "Any accessibility needs?",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "passport_valid",
        label: "Does everyone have a valid passport?",
        kind: FieldKind::EnumSingle(PASSPORT_VALID_VALUES),
        required: false,
    },
];

const CONTACT: &[FieldSpec] = &[
    FieldSpec {
        key: "first_name",
        label: "First name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        key: "last_name",
        label: "Last name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        key: "email",
        label: "Email address",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        key: "phone",
        label: "Phone number",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        key: "preferred_contact_method",
        label: "How should we get in touch?",
        kind: FieldKind::EnumSingle(CONTACT_METHOD_VALUES),
        required: false,
    },
    FieldSpec {
        key: "booking_timeline",
        label: "When are you looking to book?",
        kind: FieldKind::EnumSingle(BOOKING_TIMELINE_VALUES),
        required: false,
    },
    FieldSpec {
        key: "planning_style",
        label: "How would you like to plan?",
        kind: FieldKind::EnumSingle(PLANNING_STYLE_VALUES),
        required: false,
    },
];
