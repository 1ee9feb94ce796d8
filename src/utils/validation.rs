use crate::utils::error::{P20Error, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Same shape the control surface uses to pre-validate the host field.
pub const IP_PATTERN: &str = r"^(\d{1,3}\.){3}\d{1,3}$";

const HOSTNAME_PATTERN: &str =
    r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$";

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(P20Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: "Host cannot be empty".to_string(),
        });
    }

    let ip_re = Regex::new(IP_PATTERN).unwrap();
    if ip_re.is_match(host) {
        for octet in host.split('.') {
            let value: u32 = octet.parse().unwrap_or(256);
            if value > 255 {
                return Err(P20Error::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: host.to_string(),
                    reason: format!("IPv4 octet out of range: {}", octet),
                });
            }
        }
        return Ok(());
    }

    let host_re = Regex::new(HOSTNAME_PATTERN).unwrap();
    if host_re.is_match(host) {
        return Ok(());
    }

    Err(P20Error::InvalidConfigValueError {
        field: field_name.to_string(),
        value: host.to_string(),
        reason: "Not a valid IPv4 address or hostname".to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(P20Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(P20Error::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| P20Error::MissingConfigError {
        field: field_name.to_string(),
    })
}
