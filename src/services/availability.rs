//! Availability and pricing rules for rooms and facilities
//!
//! Everything here is pure: callers load the resource, its overlapping
//! bookings and the guest membership, and these functions decide whether
//! the request is acceptable and what it costs.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{enums::DayOfWeek, facility::parse_hhmm, OperatingHours},
};

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;

/// Half-open booking interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BookingWindow {
    /// Build a window, rejecting empty or inverted intervals with `message`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, message: &str) -> AppResult<Self> {
        if end <= start {
            return Err(AppError::Validation(message.to_string()));
        }
        Ok(Self { start, end })
    }

    /// Standard half-open overlap test against an existing interval
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }

    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Number of nights billed; a partial day counts as a full night
    pub fn nights(&self) -> i64 {
        let ms = self.duration_ms();
        (ms + MS_PER_DAY - 1) / MS_PER_DAY
    }

    /// Exact fractional number of hours
    pub fn hours(&self) -> Decimal {
        Decimal::from(self.duration_ms()) / Decimal::from(MS_PER_HOUR)
    }
}

/// Largest accepted base price, per night or per hour
pub const MAX_BASE_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn price_overflow() -> AppError {
    AppError::BusinessRule("Booking price exceeds the supported range".to_string())
}

/// Apply the resource's VIP discount when the guest holds an active membership
pub fn apply_vip_discount(price: Decimal, vip_discount: Option<Decimal>, is_member: bool) -> AppResult<Decimal> {
    match vip_discount {
        Some(discount) if is_member && discount > Decimal::ZERO => {
            // price - price * d / 100 keeps the intermediate no larger than price
            let reduction = price
                .checked_div(Decimal::ONE_HUNDRED)
                .and_then(|unit| unit.checked_mul(discount))
                .ok_or_else(price_overflow)?;
            price.checked_sub(reduction).ok_or_else(price_overflow)
        }
        _ => Ok(price),
    }
}

/// `basePrice × nights`, VIP-adjusted
pub fn room_price(
    base_price: Decimal,
    window: &BookingWindow,
    vip_discount: Option<Decimal>,
    is_member: bool,
) -> AppResult<Decimal> {
    let price = base_price
        .checked_mul(Decimal::from(window.nights()))
        .ok_or_else(price_overflow)?;
    apply_vip_discount(price, vip_discount, is_member)
}

/// `basePrice × hours`, VIP-adjusted
pub fn facility_price(
    base_price: Decimal,
    window: &BookingWindow,
    vip_discount: Option<Decimal>,
    is_member: bool,
) -> AppResult<Decimal> {
    let price = base_price
        .checked_mul(window.hours())
        .ok_or_else(price_overflow)?;
    apply_vip_discount(price, vip_discount, is_member)
}

pub fn check_room_capacity(guests: i32, capacity: i32) -> AppResult<()> {
    if guests < 1 {
        return Err(AppError::Validation("At least one guest is required".to_string()));
    }
    if guests > capacity {
        return Err(AppError::BusinessRule(format!(
            "Room capacity is {} guests",
            capacity
        )));
    }
    Ok(())
}

/// `overlapping` is the number of active bookings intersecting the requested slot
pub fn check_facility_capacity(overlapping: i64, capacity: i32) -> AppResult<()> {
    if overlapping >= i64::from(capacity) {
        return Err(AppError::BusinessRule("Facility is at capacity".to_string()));
    }
    Ok(())
}

/// Day of the week of `instant` in the hotel timezone
pub fn day_of_week(instant: DateTime<Utc>, tz: Tz) -> DayOfWeek {
    instant.with_timezone(&tz).weekday().into()
}

/// Check the start of `window` falls inside the opening hours of its day.
///
/// `hours` is the row for `day_of_week(window.start, tz)`, if any. The end of
/// the window is only checked when `enforce_closing_time` is set.
pub fn check_operating_hours(
    hours: Option<&OperatingHours>,
    window: &BookingWindow,
    tz: Tz,
    enforce_closing_time: bool,
) -> AppResult<()> {
    let hours = hours
        .ok_or_else(|| AppError::BusinessRule("Facility is not open on this day".to_string()))?;

    let open = parse_hhmm(&hours.open_time)?;
    let close = parse_hhmm(&hours.close_time)?;
    let outside = || {
        AppError::BusinessRule(format!(
            "Facility is only open from {} to {}",
            hours.open_time, hours.close_time
        ))
    };

    let start_local = window.start.with_timezone(&tz);
    let start_time = start_local.time();
    if start_time < open || start_time > close {
        return Err(outside());
    }

    if enforce_closing_time {
        let end_local = window.end.with_timezone(&tz);
        if end_local.date_naive() != start_local.date_naive() || end_local.time() > close {
            return Err(outside());
        }
    }

    Ok(())
}

/// Inventory pricing fields: non-negative base price, discount within 0-100
pub fn validate_rates(base_price: Option<Decimal>, vip_discount: Option<Decimal>) -> AppResult<()> {
    if base_price.is_some_and(|p| p < Decimal::ZERO) {
        return Err(AppError::Validation("Base price cannot be negative".to_string()));
    }
    if base_price.is_some_and(|p| p > MAX_BASE_PRICE) {
        return Err(AppError::Validation(format!(
            "Base price cannot exceed {}",
            MAX_BASE_PRICE
        )));
    }
    if vip_discount.is_some_and(|d| d < Decimal::ZERO || d > Decimal::ONE_HUNDRED) {
        return Err(AppError::Validation(
            "VIP discount must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}
