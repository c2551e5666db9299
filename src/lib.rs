// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Seasonal message filter
//!
//! Decides whether "now" falls within a window of days around an equinox or
//! solstice, tags pipeline messages with their distance to the event, and
//! lets them through only inside the window.
//!
//! # Core types
//!
//! - [`EventType`] — one of the four seasonal events.
//! - [`EventDateResolver`] — local calendar day of an event in a given year.
//! - [`RangeEvaluator`] — window containment and day difference, including
//!   windows that roll over from the previous December.
//! - [`FilterNode`] — pipeline wrapper: configuration, message tagging,
//!   routing and status display.
//!
//! # Ephemeris
//!
//! [`MeeusSeasons`] computes the seasonal instants in dynamical time; the
//! [`Time<S>`] machinery with the [`JDE`] and [`UT`] scales converts them to
//! UTC with the ΔT correction.  Any other [`SeasonalEphemeris`] can be
//! plugged in instead.
//!
//! # Quick example
//!
//! ```rust
//! use astro_filter::{FilterNode, FixedClock, Message, NodeStatus};
//! use chrono::{TimeZone, Utc};
//! use serde_json::json;
//!
//! let settings = json!({
//!     "eventType": "june_solstice",
//!     "startOffset": -5,
//!     "endOffset": "7",
//!     "timeZone": "America/New_York"
//! });
//! let now = Utc.with_ymd_and_hms(2025, 6, 25, 22, 0, 0).unwrap();
//! let mut node = FilterNode::from_json(&settings, FixedClock(now), Vec::<NodeStatus>::new()).unwrap();
//!
//! let routing = node.on_input(Message::with_payload(json!({ "temp": 21 }))).unwrap();
//! assert!(routing.is_forward());
//! assert_eq!(routing.message().payload(), Some(&json!({ "temp": 21, "astroDiff": 5 })));
//! assert_eq!(node.status().text, "In range: Jun 15 to Jun 27");
//! ```

mod calendar;
mod clock;
mod config;
mod delta_t;
mod error;
mod evaluator;
mod event;
pub(crate) mod instant;
mod message;
mod node;
mod resolver;
pub(crate) mod scales;
mod seasons;
mod status;
mod window;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarDay;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NodeConfig;
pub use error::{Error, Result};
pub use evaluator::{EvaluationResult, RangeEvaluator};
pub use event::EventType;
pub use instant::{Time, TimeScale};
pub use message::{Message, Routing};
pub use node::{FilterNode, DIFF_FIELD, NODE_TYPE};
pub use resolver::EventDateResolver;
pub use scales::{JD, JDE, UT};
pub use seasons::{MeeusSeasons, SeasonalEphemeris, Seasons};
pub use status::{LogStatus, NodeStatus, StatusFill, StatusShape, StatusSink};
pub use window::Window;

/// Julian Ephemeris Day — the dynamical day count of the seasonal series.
pub type JulianEphemerisDay = Time<JDE>;

/// Universal Time — Earth-rotation civil time scale.
pub type UniversalTime = Time<UT>;
