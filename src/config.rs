// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Node configuration.
//!
//! Flow editors hand node settings over as loosely typed JSON: offsets may
//! arrive as numbers or as text, flags as booleans or strings.
//! [`NodeConfig::from_json`] applies the same lenient coercions the editor
//! relies on, and rejects only settings that leave no event to anchor to.

use crate::error::{Error, Result};
use crate::event::EventType;
use chrono_tz::Tz;
use log::warn;
use serde_json::Value;

/// Settings of one filter node. Immutable once the node is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeConfig {
    /// Optional display name, used in log records.
    pub name: Option<String>,
    pub event_type: EventType,
    /// Days from the event to the first day of the window.
    pub start_offset: i64,
    /// Days from the event to the last day of the window.
    pub end_offset: i64,
    /// Report `|daysDiff|` instead of the signed value.
    pub use_absolute_diff: bool,
    /// Reference zone for calendar days.
    pub time_zone: Tz,
}

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            name: None,
            event_type: EventType::JuneSolstice,
            start_offset: 0,
            end_offset: 0,
            use_absolute_diff: false,
            time_zone: Tz::UTC,
        }
    }
}

impl NodeConfig {
    /// Parse the editor's JSON settings object.
    ///
    /// Recognised keys: `name`, `eventType`, `startOffset`, `endOffset`,
    /// `useAbsoluteDiff`, `timeZone`.  Missing keys take their defaults;
    /// a non-object value is treated as an empty object.
    pub fn from_json(settings: &Value) -> Result<Self> {
        let field = |key: &str| settings.get(key).filter(|v| !v.is_null());

        let event_type = match field("eventType") {
            Some(v) if is_truthy(v) => match v.as_str() {
                Some(name) => name.parse()?,
                None => return Err(Error::UnknownEventType(v.to_string())),
            },
            _ => EventType::default(),
        };

        let time_zone = match field("timeZone").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => name
                .parse::<Tz>()
                .map_err(|_| Error::UnknownTimeZone(name.to_string()))?,
            _ => Tz::UTC,
        };

        Ok(NodeConfig {
            name: field("name")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            event_type,
            start_offset: offset_setting(field("startOffset"), "startOffset"),
            end_offset: offset_setting(field("endOffset"), "endOffset"),
            use_absolute_diff: field("useAbsoluteDiff").is_some_and(is_truthy),
            time_zone,
        })
    }

    /// Builder-style setters.
    pub fn with_event(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn with_offsets(mut self, start_offset: i64, end_offset: i64) -> Self {
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self
    }

    pub fn with_absolute_diff(mut self, use_absolute_diff: bool) -> Self {
        self.use_absolute_diff = use_absolute_diff;
        self
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }
}

fn offset_setting(value: Option<&Value>, key: &str) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    match parse_int(value) {
        Some(n) => n,
        None => {
            warn!("{key} {value} is not an integer, using 0");
            0
        }
    }
}

/// Integer coercion of a loosely typed setting.
///
/// Numbers truncate toward zero.  Text accepts surrounding whitespace, a
/// sign, a `0x` prefix for hexadecimal, and stops at the first character
/// that is not a digit.  `None` when no digits can be read.
pub(crate) fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    // Saturate rather than wrap on absurdly long digit runs.
    let magnitude = i64::from_str_radix(&digits[..end], radix).unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Truthiness of a JSON setting, following the editor's conventions.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
