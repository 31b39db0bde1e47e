use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Raw booking form payload. This is the seam where a real reservation
/// backend would attach; for now submission is terminal and local.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub checkin: String,
    pub checkout: String,
    pub guests: String,
    #[serde(rename = "room-type")]
    pub room_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// One or both dates were left empty.
    MissingDates,
    /// Checkout does not fall strictly after checkin.
    InvalidRange,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::MissingDates => {
                write!(f, "Please select check-in and check-out dates.")
            }
            BookingError::InvalidRange => {
                write!(f, "Check-out date must be after check-in date.")
            }
        }
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Validates the date range of a booking request. Native date inputs only
/// ever produce ISO dates or the empty string, so an unparseable value is
/// treated the same as an out-of-range one.
pub fn validate(request: &BookingRequest) -> Result<(), BookingError> {
    if request.checkin.is_empty() || request.checkout.is_empty() {
        return Err(BookingError::MissingDates);
    }
    match (parse_date(&request.checkin), parse_date(&request.checkout)) {
        (Some(checkin), Some(checkout)) if checkout > checkin => Ok(()),
        _ => Err(BookingError::InvalidRange),
    }
}

/// Earliest selectable checkout for a given checkin: the next calendar day.
/// Calendar arithmetic, so month and year boundaries roll over correctly.
pub fn min_checkout(checkin: NaiveDate) -> NaiveDate {
    checkin + Days::new(1)
}

/// Whether a currently entered checkout value has to be cleared because it
/// fell behind the minimum implied by a newly chosen checkin.
pub fn checkout_is_stale(checkout: &str, min: NaiveDate) -> bool {
    match parse_date(checkout) {
        Some(date) => date < min,
        None => false,
    }
}

pub fn confirmation_message(request: &BookingRequest) -> String {
    format!(
        "Thank you for your interest!\n\nBooking Details:\nCheck-in: {}\nCheck-out: {}\nGuests: {}\nRoom: {}\n\nWe will contact you shortly to confirm your reservation.",
        request.checkin, request.checkout, request.guests, request.room_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(checkin: &str, checkout: &str) -> BookingRequest {
        BookingRequest {
            checkin: checkin.into(),
            checkout: checkout.into(),
            guests: "2".into(),
            room_type: "Deluxe".into(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_dates_are_rejected_first() {
        assert_eq!(
            validate(&request("", "2025-06-12")),
            Err(BookingError::MissingDates)
        );
        assert_eq!(
            validate(&request("2025-06-10", "")),
            Err(BookingError::MissingDates)
        );
        assert_eq!(validate(&request("", "")), Err(BookingError::MissingDates));
    }

    #[test]
    fn checkout_must_be_strictly_after_checkin() {
        assert_eq!(
            validate(&request("2025-06-10", "2025-06-09")),
            Err(BookingError::InvalidRange)
        );
        assert_eq!(
            validate(&request("2025-06-10", "2025-06-10")),
            Err(BookingError::InvalidRange)
        );
        assert_eq!(validate(&request("2025-06-10", "2025-06-12")), Ok(()));
    }

    #[test]
    fn garbage_dates_count_as_out_of_range() {
        assert_eq!(
            validate(&request("not-a-date", "2025-06-12")),
            Err(BookingError::InvalidRange)
        );
    }

    #[test]
    fn min_checkout_rolls_over_month_and_year() {
        assert_eq!(min_checkout(date("2025-01-31")), date("2025-02-01"));
        assert_eq!(min_checkout(date("2025-12-31")), date("2026-01-01"));
        assert_eq!(min_checkout(date("2024-02-28")), date("2024-02-29"));
        assert_eq!(min_checkout(date("2025-06-10")), date("2025-06-11"));
    }

    #[test]
    fn stale_checkout_is_detected() {
        let min = min_checkout(date("2025-01-31"));
        assert!(checkout_is_stale("2025-01-31", min));
        assert!(!checkout_is_stale("2025-02-01", min));
        assert!(!checkout_is_stale("", min));
    }

    #[test]
    fn confirmation_contains_all_fields_verbatim() {
        let req = request("2025-06-10", "2025-06-12");
        let message = confirmation_message(&req);
        assert!(message.contains("Check-in: 2025-06-10"));
        assert!(message.contains("Check-out: 2025-06-12"));
        assert!(message.contains("Guests: 2"));
        assert!(message.contains("Room: Deluxe"));
    }

    #[test]
    fn request_serializes_with_form_field_names() {
        let json = serde_json::to_string(&request("2025-06-10", "2025-06-12")).unwrap();
        assert!(json.contains("\"room-type\":\"Deluxe\""));
        assert!(json.contains("\"checkin\":\"2025-06-10\""));
    }

    #[test]
    fn validation_errors_carry_the_user_facing_message() {
        assert_eq!(
            BookingError::MissingDates.to_string(),
            "Please select check-in and check-out dates."
        );
        assert_eq!(
            BookingError::InvalidRange.to_string(),
            "Check-out date must be after check-in date."
        );
    }
}
