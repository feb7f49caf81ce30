//! Closed option sets for the inquiry questionnaire.
//!
//! Every single-choice and multi-choice field in the draft stores one of
//! these enums instead of a free-form string.  Each enum exposes its wire
//! value via [`as_str`](DestinationFlexibility::as_str) and a fallible
//! [`parse`](DestinationFlexibility::parse) for string boundaries
//! (presentation input, stored values), so an unrecognized value can never
//! reach the draft.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Look up an option by its wire value.
///
/// Returns a validation error naming the field and listing the valid
/// values when `value` is not a member of the set.
fn lookup<T: Copy>(
    field: &'static str,
    value: &str,
    all: &'static [T],
    as_str: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    all.iter().copied().find(|v| as_str(*v) == value).ok_or_else(|| {
        let valid: Vec<&str> = all.iter().map(|v| as_str(*v)).collect();
        CoreError::Validation(format!(
            "Invalid {field} '{value}'. Must be one of: {}",
            valid.join(", ")
        ))
    })
}

// ---------------------------------------------------------------------------
// Trip details
// ---------------------------------------------------------------------------

/// Whether the traveller has fixed destinations or is open to suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationFlexibility {
    Fixed,
    #[default]
    Open,
}

impl DestinationFlexibility {
    pub const ALL: &'static [Self] = &[Self::Fixed, Self::Open];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Open => "open",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("destination_flexibility", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Group & budget
// ---------------------------------------------------------------------------

/// How firm the stated budget range is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetFlexibility {
    Fixed,
    #[default]
    Flexible,
    Unsure,
}

impl BudgetFlexibility {
    pub const ALL: &'static [Self] = &[Self::Fixed, Self::Flexible, Self::Unsure];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Flexible => "flexible",
            Self::Unsure => "unsure",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("budget_flexibility", s, Self::ALL, Self::as_str)
    }
}

/// Whether the budget range is per person or for the whole trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetScope {
    PerPerson,
    #[default]
    TotalTrip,
}

impl BudgetScope {
    pub const ALL: &'static [Self] = &[Self::PerPerson, Self::TotalTrip];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerPerson => "per_person",
            Self::TotalTrip => "total_trip",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("budget_scope", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Travel style
// ---------------------------------------------------------------------------

/// Preferred pace of the itinerary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelPace {
    Relaxed,
    #[default]
    Balanced,
    Fast,
}

impl TravelPace {
    pub const ALL: &'static [Self] = &[Self::Relaxed, Self::Balanced, Self::Fast];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Balanced => "balanced",
            Self::Fast => "fast",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("travel_pace", s, Self::ALL, Self::as_str)
    }
}

/// Interest tags the traveller can toggle on (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelInterest {
    Culture,
    Adventure,
    FoodWine,
    Beach,
    Nature,
    City,
    Luxury,
    Value,
}

impl TravelInterest {
    pub const ALL: &'static [Self] = &[
        Self::Culture,
        Self::Adventure,
        Self::FoodWine,
        Self::Beach,
        Self::Nature,
        Self::City,
        Self::Luxury,
        Self::Value,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Culture => "culture",
            Self::Adventure => "adventure",
            Self::FoodWine => "food_wine",
            Self::Beach => "beach",
            Self::Nature => "nature",
            Self::City => "city",
            Self::Luxury => "luxury",
            Self::Value => "value",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("travel_interests", s, Self::ALL, Self::as_str)
    }
}

/// Accommodation categories the traveller would consider (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationType {
    BoutiqueHotel,
    Resort,
    ApartmentVilla,
    StandardHotel,
}

impl AccommodationType {
    pub const ALL: &'static [Self] = &[
        Self::BoutiqueHotel,
        Self::Resort,
        Self::ApartmentVilla,
        Self::StandardHotel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BoutiqueHotel => "boutique_hotel",
            Self::Resort => "resort",
            Self::ApartmentVilla => "apartment_villa",
            Self::StandardHotel => "standard_hotel",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("accommodation_type", s, Self::ALL, Self::as_str)
    }
}

/// What matters most about where the traveller stays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationPriority {
    Comfort,
    Design,
    Location,
    #[default]
    Flexible,
}

impl AccommodationPriority {
    pub const ALL: &'static [Self] =
        &[Self::Comfort, Self::Design, Self::Location, Self::Flexible];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comfort => "comfort",
            Self::Design => "design",
            Self::Location => "location",
            Self::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("accommodation_priority", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Flights & transport
// ---------------------------------------------------------------------------

/// What to optimize for when picking flights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPriority {
    Cheapest,
    Fastest,
    Direct,
    #[default]
    Balanced,
}

impl FlightPriority {
    pub const ALL: &'static [Self] = &[Self::Cheapest, Self::Fastest, Self::Direct, Self::Balanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cheapest => "cheapest",
            Self::Fastest => "fastest",
            Self::Direct => "direct",
            Self::Balanced => "balanced",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("flight_priority", s, Self::ALL, Self::as_str)
    }
}

/// Tolerance for layovers en route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoverTolerance {
    None,
    ShortOnly,
    #[default]
    Flexible,
}

impl LayoverTolerance {
    pub const ALL: &'static [Self] = &[Self::None, Self::ShortOnly, Self::Flexible];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ShortOnly => "short_only",
            Self::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("layover_tolerance", s, Self::ALL, Self::as_str)
    }
}

/// Ground transport options the traveller would use (multi-choice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportPreference {
    Transfers,
    PublicTransport,
    CarHire,
    Flexible,
}

impl TransportPreference {
    pub const ALL: &'static [Self] = &[
        Self::Transfers,
        Self::PublicTransport,
        Self::CarHire,
        Self::Flexible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transfers => "transfers",
            Self::PublicTransport => "public_transport",
            Self::CarHire => "car_hire",
            Self::Flexible => "flexible",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("transport_preference", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Experiences
// ---------------------------------------------------------------------------

/// Guided tours, independent exploration, or a mix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationStyle {
    Guided,
    Independent,
    #[default]
    Mixed,
}

impl ExplorationStyle {
    pub const ALL: &'static [Self] = &[Self::Guided, Self::Independent, Self::Mixed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guided => "guided",
            Self::Independent => "independent",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("exploration_style", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Practical details
// ---------------------------------------------------------------------------

/// Whether everyone travelling holds a valid passport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportValid {
    #[default]
    Yes,
    No,
    Unsure,
}

impl PassportValid {
    pub const ALL: &'static [Self] = &[Self::Yes, Self::No, Self::Unsure];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unsure => "unsure",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("passport_valid", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Contact & intent
// ---------------------------------------------------------------------------

/// How the traveller prefers to be contacted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
    Whatsapp,
}

impl ContactMethod {
    pub const ALL: &'static [Self] = &[Self::Email, Self::Phone, Self::Whatsapp];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Whatsapp => "whatsapp",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("preferred_contact_method", s, Self::ALL, Self::as_str)
    }
}

/// How soon the traveller intends to book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingTimeline {
    #[default]
    Exploring,
    /// Wire value kept as the legacy `1_3_months` tag.
    #[serde(rename = "1_3_months")]
    OneToThreeMonths,
    Ready,
}

impl BookingTimeline {
    pub const ALL: &'static [Self] = &[Self::Exploring, Self::OneToThreeMonths, Self::Ready];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exploring => "exploring",
            Self::OneToThreeMonths => "1_3_months",
            Self::Ready => "ready",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("booking_timeline", s, Self::ALL, Self::as_str)
    }
}

/// How much of the planning the traveller wants to hand over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStyle {
    FullService,
    Options,
    #[default]
    Collaborative,
}

impl PlanningStyle {
    pub const ALL: &'static [Self] = &[Self::FullService, Self::Options, Self::Collaborative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullService => "full_service",
            Self::Options => "options",
            Self::Collaborative => "collaborative",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        lookup("planning_style", s, Self::ALL, Self::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_parse_roundtrip_all_sets() {
        for v in DestinationFlexibility::ALL {
            assert_eq!(DestinationFlexibility::parse(v.as_str()).unwrap(), *v);
        }
        for v in BudgetFlexibility::ALL {
            assert_eq!(BudgetFlexibility::parse(v.as_str()).unwrap(), *v);
        }
        for v in BudgetScope::ALL {
            assert_eq!(BudgetScope::parse(v.as_str()).unwrap(), *v);
        }
        for v in TravelPace::ALL {
            assert_eq!(TravelPace::parse(v.as_str()).unwrap(), *v);
        }
        for v in TravelInterest::ALL {
            assert_eq!(TravelInterest::parse(v.as_str()).unwrap(), *v);
        }
        for v in AccommodationType::ALL {
            assert_eq!(AccommodationType::parse(v.as_str()).unwrap(), *v);
        }
        for v in AccommodationPriority::ALL {
            assert_eq!(AccommodationPriority::parse(v.as_str()).unwrap(), *v);
        }
        for v in FlightPriority::ALL {
            assert_eq!(FlightPriority::parse(v.as_str()).unwrap(), *v);
        }
        for v in LayoverTolerance::ALL {
            assert_eq!(LayoverTolerance::parse(v.as_str()).unwrap(), *v);
        }
        for v in TransportPreference::ALL {
            assert_eq!(TransportPreference::parse(v.as_str()).unwrap(), *v);
        }
        for v in ExplorationStyle::ALL {
            assert_eq!(ExplorationStyle::parse(v.as_str()).unwrap(), *v);
        }
        for v in PassportValid::ALL {
            assert_eq!(PassportValid::parse(v.as_str()).unwrap(), *v);
        }
        for v in ContactMethod::ALL {
            assert_eq!(ContactMethod::parse(v.as_str()).unwrap(), *v);
        }
        for v in BookingTimeline::ALL {
            assert_eq!(BookingTimeline::parse(v.as_str()).unwrap(), *v);
        }
        for v in PlanningStyle::ALL {
            assert_eq!(PlanningStyle::parse(v.as_str()).unwrap(), *v);
        }
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let err = TravelPace::parse("frantic").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("travel_pace"), "error should name the field: {msg}");
        assert!(msg.contains("relaxed, balanced, fast"), "error should list values: {msg}");
    }

    #[test]
    fn serde_wire_values_match_as_str() {
        // serde and as_str must agree, including the numeric-prefixed rename.
        let json = serde_json::to_string(&BookingTimeline::OneToThreeMonths).unwrap();
        assert_eq!(json, "\"1_3_months\"");
        let back: BookingTimeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BookingTimeline::OneToThreeMonths);

        let json = serde_json::to_string(&TravelInterest::FoodWine).unwrap();
        assert_eq!(json, "\"food_wine\"");
        let json = serde_json::to_string(&AccommodationType::ApartmentVilla).unwrap();
        assert_eq!(json, "\"apartment_villa\"");
        let json = serde_json::to_string(&LayoverTolerance::None).unwrap();
        assert_eq!(json, "\"none\"");
    }

    #[test]
    fn defaults_match_the_documented_empty_draft() {
        assert_eq!(DestinationFlexibility::default(), DestinationFlexibility::Open);
        assert_eq!(BudgetFlexibility::default(), BudgetFlexibility::Flexible);
        assert_eq!(BudgetScope::default(), BudgetScope::TotalTrip);
        assert_eq!(TravelPace::default(), TravelPace::Balanced);
        assert_eq!(AccommodationPriority::default(), AccommodationPriority::Flexible);
        assert_eq!(FlightPriority::default(), FlightPriority::Balanced);
        assert_eq!(LayoverTolerance::default(), LayoverTolerance::Flexible);
        assert_eq!(ExplorationStyle::default(), ExplorationStyle::Mixed);
        assert_eq!(PassportValid::default(), PassportValid::Yes);
        assert_eq!(ContactMethod::default(), ContactMethod::Email);
        assert_eq!(BookingTimeline::default(), BookingTimeline::Exploring);
        assert_eq!(PlanningStyle::default(), PlanningStyle::Collaborative);
    }
}
