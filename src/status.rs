// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Node status display.
//!
//! Status values are built from an [`EvaluationResult`] by pure functions
//! and handed to a [`StatusSink`]; nothing here affects filtering.

use crate::evaluator::EvaluationResult;
use log::info;
use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFill {
    Grey,
    Green,
    Red,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusShape {
    Dot,
    Ring,
}

/// Indicator plus text shown next to a node in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub fill: StatusFill,
    pub shape: StatusShape,
    pub text: String,
}

impl NodeStatus {
    /// Neutral status shown after deployment.
    pub fn deployed(result: &EvaluationResult) -> Self {
        NodeStatus {
            fill: StatusFill::Grey,
            shape: StatusShape::Dot,
            text: format!("Range: {}", result.range_label),
        }
    }

    /// Status after a message has been processed.
    pub fn after_input(result: &EvaluationResult) -> Self {
        if result.in_range {
            NodeStatus {
                fill: StatusFill::Green,
                shape: StatusShape::Dot,
                text: format!("In range: {}", result.range_label),
            }
        } else {
            NodeStatus {
                fill: StatusFill::Red,
                shape: StatusShape::Ring,
                text: format!("Outside range: {}", result.range_label),
            }
        }
    }
}

/// Receives status updates from a node.
pub trait StatusSink {
    fn set_status(&mut self, status: &NodeStatus);
}

/// Collects every status, oldest first.
impl StatusSink for Vec<NodeStatus> {
    fn set_status(&mut self, status: &NodeStatus) {
        self.push(status.clone());
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn set_status(&mut self, status: &NodeStatus) {
        (**self).set_status(status);
    }
}

/// Writes status changes to the log.
#[derive(Debug, Clone, Default)]
pub struct LogStatus {
    /// Prefix for each record, usually the node name.
    pub label: String,
}

impl LogStatus {
    pub fn new(label: impl Into<String>) -> Self {
        LogStatus {
            label: label.into(),
        }
    }
}

impl StatusSink for LogStatus {
    fn set_status(&mut self, status: &NodeStatus) {
        info!("[{}] {:?} {:?}: {}", self.label, status.fill, status.shape, status.text);
    }
}
