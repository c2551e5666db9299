// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The filter node hosted by a message pipeline.
//!
//! On construction the node evaluates once against the clock and shows the
//! configured window.  Each inbound message is evaluated again: the day
//! difference is written to `payload.astroDiff` and the message is forwarded
//! only while "now" is inside the window.  Returning from
//! [`FilterNode::on_input`] is the completion signal.

use crate::clock::Clock;
use crate::config::NodeConfig;
use crate::error::Result;
use crate::evaluator::{EvaluationResult, RangeEvaluator};
use crate::message::{Message, Routing};
use crate::resolver::EventDateResolver;
use crate::seasons::{MeeusSeasons, SeasonalEphemeris};
use crate::status::{NodeStatus, StatusSink};
use chrono_tz::Tz;
use log::{debug, info};
use serde_json::Value;

/// Name under which the node type is registered with the host.
pub const NODE_TYPE: &str = "astro-filter";

/// Payload field receiving the day difference.
pub const DIFF_FIELD: &str = "astroDiff";

/// A configured filter node.
#[derive(Debug)]
pub struct FilterNode<C, S, E = MeeusSeasons> {
    config: NodeConfig,
    evaluator: RangeEvaluator<Tz, E>,
    clock: C,
    sink: S,
    status: NodeStatus,
}

impl<C: Clock, S: StatusSink> FilterNode<C, S, MeeusSeasons> {
    /// Deploy a node backed by [`MeeusSeasons`].
    pub fn new(config: NodeConfig, clock: C, sink: S) -> Result<Self> {
        Self::with_ephemeris(config, clock, MeeusSeasons, sink)
    }

    /// Deploy a node from the editor's JSON settings.
    pub fn from_json(settings: &Value, clock: C, sink: S) -> Result<Self> {
        Self::new(NodeConfig::from_json(settings)?, clock, sink)
    }
}

impl<C: Clock, S: StatusSink, E: SeasonalEphemeris> FilterNode<C, S, E> {
    /// Deploy a node with a custom ephemeris.
    ///
    /// Fails if the initial evaluation fails, so a node that could never
    /// resolve its anchor is not deployed.
    pub fn with_ephemeris(
        config: NodeConfig,
        clock: C,
        ephemeris: E,
        mut sink: S,
    ) -> Result<Self> {
        let evaluator = RangeEvaluator::with_resolver(EventDateResolver::with_ephemeris(
            ephemeris,
            config.time_zone,
        ));
        let result = evaluator.evaluate(
            config.event_type,
            config.start_offset,
            config.end_offset,
            clock.now(),
        )?;
        let status = NodeStatus::deployed(&result);
        sink.set_status(&status);
        info!(
            "{} deployed: {} {}..{} days in {} ({})",
            config.name.as_deref().unwrap_or(NODE_TYPE),
            config.event_type,
            config.start_offset,
            config.end_offset,
            config.time_zone.name(),
            status.text
        );
        Ok(FilterNode {
            config,
            evaluator,
            clock,
            sink,
            status,
        })
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Last status pushed to the sink.
    pub fn status(&self) -> &NodeStatus {
        &self.status
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Evaluate the configured window against the clock.
    pub fn evaluate_now(&self) -> Result<EvaluationResult> {
        self.evaluator.evaluate(
            self.config.event_type,
            self.config.start_offset,
            self.config.end_offset,
            self.clock.now(),
        )
    }

    /// Process one inbound message.
    ///
    /// On error the message is not routed and the status is left unchanged.
    pub fn on_input(&mut self, mut msg: Message) -> Result<Routing> {
        let result = self.evaluate_now()?;
        self.set_status(NodeStatus::after_input(&result));

        let diff = if self.config.use_absolute_diff {
            result.days_diff.abs()
        } else {
            result.days_diff
        };
        msg.payload_object_mut()
            .insert(DIFF_FIELD.to_string(), Value::from(diff));

        debug!(
            "{}: {DIFF_FIELD}={diff}, {}",
            self.config.name.as_deref().unwrap_or(NODE_TYPE),
            if result.in_range { "forward" } else { "drop" }
        );
        Ok(if result.in_range {
            Routing::Forward(msg)
        } else {
            Routing::Drop(msg)
        })
    }

    fn set_status(&mut self, status: NodeStatus) {
        self.sink.set_status(&status);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use crate::event::EventType;
    use crate::seasons::Seasons;
    use crate::status::StatusFill;
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::America::New_York;
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32) -> FixedClock {
        FixedClock(
            New_York
                .with_ymd_and_hms(y, m, d, 18, 46, 27)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn june_config() -> NodeConfig {
        NodeConfig::default()
            .with_offsets(-5, 7)
            .with_time_zone(New_York)
    }

    #[test]
    fn deploy_shows_the_window() {
        let node =
            FilterNode::new(june_config(), at(2025, 6, 25), Vec::<NodeStatus>::new()).unwrap();
        assert_eq!(node.status().fill, StatusFill::Grey);
        assert_eq!(node.status().text, "Range: Jun 15 to Jun 27");
        assert_eq!(node.sink().len(), 1);
    }

    #[test]
    fn absolute_diff_is_never_negative() {
        let cfg = june_config().with_absolute_diff(true);
        let mut node = FilterNode::new(cfg, at(2025, 6, 16), Vec::<NodeStatus>::new()).unwrap();
        let routing = node.on_input(Message::new()).unwrap();
        assert!(routing.is_forward());
        assert_eq!(routing.message().payload(), Some(&json!({ "astroDiff": 4 })));
    }

    #[test]
    fn dropped_message_still_carries_the_diff() {
        let mut node =
            FilterNode::new(june_config(), at(2025, 6, 28), Vec::<NodeStatus>::new()).unwrap();
        let routing = node
            .on_input(Message::with_payload(json!({ "someData": "test" })))
            .unwrap();
        assert!(!routing.is_forward());
        assert_eq!(
            routing.into_message().payload(),
            Some(&json!({ "someData": "test", "astroDiff": 8 }))
        );
        assert_eq!(node.status().text, "Outside range: Jun 15 to Jun 27");
    }

    #[test]
    fn borrowed_sink_receives_updates() {
        let mut seen: Vec<NodeStatus> = Vec::new();
        {
            let mut node = FilterNode::new(june_config(), at(2025, 6, 25), &mut seen).unwrap();
            node.on_input(Message::new()).unwrap();
            node.on_input(Message::new()).unwrap();
        }
        let texts: Vec<_> = seen.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                "Range: Jun 15 to Jun 27",
                "In range: Jun 15 to Jun 27",
                "In range: Jun 15 to Jun 27",
            ]
        );
    }

    struct NoSeasons;

    impl SeasonalEphemeris for NoSeasons {
        fn seasons(&self, year: i32) -> Result<Seasons> {
            Err(Error::YearOutOfRange { year })
        }
    }

    #[test]
    fn failing_ephemeris_blocks_deployment() {
        let mut sink: Vec<NodeStatus> = Vec::new();
        let node = FilterNode::with_ephemeris(
            NodeConfig::default().with_event(EventType::MarchEquinox),
            FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
            NoSeasons,
            &mut sink,
        );
        assert_eq!(node.err(), Some(Error::YearOutOfRange { year: 2025 }));
        assert!(sink.is_empty());
    }

    #[test]
    fn clock_is_read_on_every_message() {
        use std::cell::Cell;
        let day = Cell::new(24);
        let clock = || -> DateTime<Utc> {
            day.set(day.get() + 1);
            New_York
                .with_ymd_and_hms(2025, 6, day.get(), 12, 0, 0)
                .unwrap()
                .with_timezone(&Utc)
        };
        // Deploy reads Jun 25, then messages see Jun 26, 27, 28.
        let mut node = FilterNode::new(june_config(), clock, Vec::<NodeStatus>::new()).unwrap();
        let forwarded: Vec<bool> = (0..3)
            .map(|_| node.on_input(Message::new()).unwrap().is_forward())
            .collect();
        assert_eq!(forwarded, [true, true, false]);
    }
}
