//! Shared domain enums, stored as TEXT columns

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Implements `as_str`, `sql_list`, `Display`, `FromStr` and the sqlx TEXT
/// mapping for a fieldless enum.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// SQL list literal, e.g. `('PENDING', 'CONFIRMED')`
            pub fn sql_list(values: &[$name]) -> String {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|v| format!("'{}'", v.as_str()))
                    .collect();
                format!("({})", quoted.join(", "))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($name), s)),
                }
            }
        }

        impl sqlx::Type<Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<Postgres>>::type_info()
            }
        }

        impl<'r> Decode<'r, Postgres> for $name {
            fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
                let s: String = Decode::<Postgres>::decode(value)?;
                s.parse().map_err(|e: String| e.into())
            }
        }

        impl Encode<'_, Postgres> for $name {
            fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
                <&str as Encode<Postgres>>::encode(self.as_str(), buf)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// ResourceStatus
// ---------------------------------------------------------------------------

/// Coarse status of a room or facility.
///
/// AVAILABLE and OCCUPIED are a projection of the bookings table;
/// MAINTENANCE and CLEANING are set by administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

text_enum!(ResourceStatus {
    Available => "AVAILABLE",
    Occupied => "OCCUPIED",
    Maintenance => "MAINTENANCE",
    Cleaning => "CLEANING",
});

impl ResourceStatus {
    /// Statuses maintained by the booking projection
    pub const DERIVED: [ResourceStatus; 2] = [ResourceStatus::Available, ResourceStatus::Occupied];

    /// Whether the status is maintained by the booking projection
    pub fn is_derived(&self) -> bool {
        Self::DERIVED.contains(self)
    }
}

impl Default for ResourceStatus {
    fn default() -> Self {
        ResourceStatus::Available
    }
}

// ---------------------------------------------------------------------------
// RoomType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

text_enum!(RoomType {
    Standard => "STANDARD",
    Deluxe => "DELUXE",
    Suite => "SUITE",
    Presidential => "PRESIDENTIAL",
});

// ---------------------------------------------------------------------------
// FacilityType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
    Gym,
    Sauna,
    Pool,
    Spa,
    ConferenceRoom,
    TennisCourt,
}

text_enum!(FacilityType {
    Gym => "GYM",
    Sauna => "SAUNA",
    Pool => "POOL",
    Spa => "SPA",
    ConferenceRoom => "CONFERENCE_ROOM",
    TennisCourt => "TENNIS_COURT",
});

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
}

text_enum!(BookingStatus {
    Pending => "PENDING",
    Confirmed => "CONFIRMED",
    CheckedIn => "CHECKED_IN",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

impl BookingStatus {
    /// Statuses that count toward overlap, capacity and delete guards
    pub const ACTIVE: [BookingStatus; 3] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::CheckedIn,
    ];

    /// Statuses that mark a resource OCCUPIED in the status projection
    pub const OCCUPYING: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::CheckedIn];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }
}

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

text_enum!(DayOfWeek {
    Monday => "MONDAY",
    Tuesday => "TUESDAY",
    Wednesday => "WEDNESDAY",
    Thursday => "THURSDAY",
    Friday => "FRIDAY",
    Saturday => "SATURDAY",
    Sunday => "SUNDAY",
});

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_roundtrip() {
        assert_eq!("CHECKED_IN".parse::<BookingStatus>(), Ok(BookingStatus::CheckedIn));
        assert_eq!("cancelled".parse::<BookingStatus>(), Ok(BookingStatus::Cancelled));
        assert!("UNKNOWN".parse::<BookingStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&BookingStatus::CheckedIn).unwrap(),
            "\"CHECKED_IN\""
        );
    }

    #[test]
    fn test_active_statuses() {
        assert!(BookingStatus::Pending.is_active());
        assert!(BookingStatus::Confirmed.is_active());
        assert!(BookingStatus::CheckedIn.is_active());
        assert!(!BookingStatus::Completed.is_active());
        assert!(!BookingStatus::Cancelled.is_active());
    }

    #[test]
    fn test_sql_list() {
        assert_eq!(
            BookingStatus::sql_list(&BookingStatus::OCCUPYING),
            "('CONFIRMED', 'CHECKED_IN')"
        );
        assert_eq!(
            ResourceStatus::sql_list(&ResourceStatus::DERIVED),
            "('AVAILABLE', 'OCCUPIED')"
        );
    }

    #[test]
    fn test_admin_statuses_not_derived() {
        assert!(ResourceStatus::Available.is_derived());
        assert!(ResourceStatus::Occupied.is_derived());
        assert!(!ResourceStatus::Maintenance.is_derived());
        assert!(!ResourceStatus::Cleaning.is_derived());
    }

    #[test]
    fn test_facility_type_serde() {
        assert_eq!(
            serde_json::to_string(&FacilityType::ConferenceRoom).unwrap(),
            "\"CONFERENCE_ROOM\""
        );
        assert_eq!(DayOfWeek::from(Weekday::Sun), DayOfWeek::Sunday);
    }
}
