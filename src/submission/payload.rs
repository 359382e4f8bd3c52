//! Validated payloads handed to a submission sink
//!
//! These are the typed results of validating a Field Model. A sink only ever
//! sees values that passed every rule, so the types here carry parsed values
//! (calendar dates, enumerated party sizes and service times) rather than raw
//! input strings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Options offered by the reservation form's guest selector
pub const PARTY_SIZE_LABELS: &[&str] = &[
    "1 Guest", "2 Guests", "3 Guests", "4 Guests", "5 Guests", "6+ Guests",
];

/// Options offered by the reservation form's time selector
pub const SERVICE_TIME_LABELS: &[&str] = &[
    "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM",
    "9:00 PM",
];

/// Number of guests for a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartySize {
    #[serde(rename = "1 Guest")]
    One,
    #[serde(rename = "2 Guests")]
    Two,
    #[serde(rename = "3 Guests")]
    Three,
    #[serde(rename = "4 Guests")]
    Four,
    #[serde(rename = "5 Guests")]
    Five,
    /// Larger parties are asked to call; this is displayed, not enforced
    #[serde(rename = "6+ Guests")]
    SixOrMore,
}

impl PartySize {
    const ALL: [PartySize; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::SixOrMore,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "1 Guest",
            Self::Two => "2 Guests",
            Self::Three => "3 Guests",
            Self::Four => "4 Guests",
            Self::Five => "5 Guests",
            Self::SixOrMore => "6+ Guests",
        }
    }
}

impl FromStr for PartySize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.label() == s)
            .ok_or(UnknownOption)
    }
}

/// Seating slot offered by the restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceTime {
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "12:00 PM")]
    Noon,
    #[serde(rename = "1:00 PM")]
    OnePm,
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "5:00 PM")]
    FivePm,
    #[serde(rename = "6:00 PM")]
    SixPm,
    #[serde(rename = "7:00 PM")]
    SevenPm,
    #[serde(rename = "8:00 PM")]
    EightPm,
    #[serde(rename = "9:00 PM")]
    NinePm,
}

impl ServiceTime {
    const ALL: [ServiceTime; 9] = [
        Self::ElevenAm,
        Self::Noon,
        Self::OnePm,
        Self::TwoPm,
        Self::FivePm,
        Self::SixPm,
        Self::SevenPm,
        Self::EightPm,
        Self::NinePm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ElevenAm => "11:00 AM",
            Self::Noon => "12:00 PM",
            Self::OnePm => "1:00 PM",
            Self::TwoPm => "2:00 PM",
            Self::FivePm => "5:00 PM",
            Self::SixPm => "6:00 PM",
            Self::SevenPm => "7:00 PM",
            Self::EightPm => "8:00 PM",
            Self::NinePm => "9:00 PM",
        }
    }
}

impl FromStr for ServiceTime {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|time| time.label() == s)
            .ok_or(UnknownOption)
    }
}

/// A value did not match any option of an enumerated field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOption;

/// A fully validated table reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: PartySize,
    pub date: NaiveDate,
    pub time: ServiceTime,
    pub special_requests: String,
}

/// A fully validated contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Anything a submission sink accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Reservation(ReservationRequest),
    Contact(ContactMessage),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Reservation(_) => PayloadKind::Reservation,
            Self::Contact(_) => PayloadKind::Contact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Reservation,
    Contact,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reservation => write!(f, "reservation"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// Acknowledgement returned by a sink that accepted a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub reference: Uuid,
    pub kind: PayloadKind,
    pub accepted_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(kind: PayloadKind) -> Self {
        Self {
            reference: Uuid::new_v4(),
            kind,
            accepted_at: Utc::now(),
        }
    }

    /// Short reference shown to the guest
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}
