use crate::models::{cargo_type::CargoType, service_type::ServiceType};
use crate::{CoreError, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::Serialize;

/// Quote form as posted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    pub service_type: ServiceType,
    pub origin_port: String,
    pub destination_port: String,
    pub cargo_type: CargoType,
    /// Kilograms
    pub weight: f64,
    pub dimensions: String,
    pub estimated_value: Option<f64>,
    pub preferred_shipping_date: NaiveDate,
    pub special_requirements: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub cargo_description: String,
}

impl QuoteRequest {
    /// Parse a free-form weight field. The leading number is kept, so
    /// "1500kg" is 1500 and "1,200" is 1; no leading number means zero.
    pub fn parse_weight(raw: &str) -> f64 {
        leading_number(raw)
            .filter(|w| w.is_finite())
            .unwrap_or(0.0)
    }

    /// Parse a free-form value field the same way; no leading number, or
    /// zero, means "not given".
    pub fn parse_estimated_value(raw: &str) -> Option<f64> {
        leading_number(raw).filter(|v| v.is_finite() && *v != 0.0)
    }

    /// Checks the fields the form marks as required.
    pub fn validate(&self) -> CoreErrorResult<()> {
        let required = [
            ("origin_port", &self.origin_port),
            ("destination_port", &self.destination_port),
            ("company_name", &self.company_name),
            ("contact_name", &self.contact_name),
            ("email", &self.email),
            ("cargo_description", &self.cargo_description),
        ];

        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(CoreError::validation(format!("{field} is required")));
        }

        if self.weight < 0.0 {
            return Err(CoreError::validation("weight cannot be negative"));
        }

        Ok(())
    }
}

/// Longest `[sign] digits [. digits] [e [sign] digits]` prefix after leading
/// whitespace, parsed as `f64`. Trailing text is ignored.
fn leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_count = frac_end - (end + 1);
        if frac_count > 0 {
            digit_count += frac_count;
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
