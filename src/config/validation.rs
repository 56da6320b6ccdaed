//! Argument decoding and range checks for switch values.
//!
//! Each function takes the raw token following a switch and either returns
//! the typed value or a [`NavError`] naming the switch. A token that is not
//! an integer is a decode failure; an integer outside the accepted range is
//! a validation failure.

use super::types::DisplayMode;
use crate::error::{DecodeErrorKind, NavError, Result};

/// Parse a signed decimal integer argument.
pub fn parse_integer(switch: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|source| {
        NavError::decode(
            format!("argument of {switch}"),
            DecodeErrorKind::NotANumber {
                value: raw.to_string(),
                source,
            },
        )
    })
}

/// Parse a TCP port number.
pub fn parse_port(switch: &str, raw: &str) -> Result<u16> {
    let value = parse_integer(switch, raw)?;
    u16::try_from(value).map_err(|_| {
        NavError::validation(
            switch,
            format!("port must be between 0 and {}, got {value}", u16::MAX),
        )
    })
}

/// Parse a display mode code, rejecting codes outside the supported set.
pub fn parse_display_mode(switch: &str, raw: &str) -> Result<DisplayMode> {
    let value = parse_integer(switch, raw)?;
    DisplayMode::try_from(value).map_err(|e| NavError::validation(switch, e.to_string()))
}

/// Parse a maximum exploration depth; must be `>= 0`.
pub fn parse_depth(switch: &str, raw: &str) -> Result<u32> {
    let value = parse_integer(switch, raw)?;
    if value < 0 {
        return Err(NavError::validation(
            switch,
            format!("depth must be >= 0, got {value}"),
        ));
    }
    u32::try_from(value).map_err(|_| {
        NavError::validation(
            switch,
            format!("depth must be at most {}, got {value}", u32::MAX),
        )
    })
}
