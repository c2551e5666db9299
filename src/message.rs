// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Pipeline messages and routing decisions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A pipeline message: a JSON object whose `payload` field carries the data.
///
/// All fields other than `payload` are opaque to the filter and pass
/// through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Map<String, Value>);

impl Message {
    pub const PAYLOAD: &'static str = "payload";

    pub fn new() -> Self {
        Message::default()
    }

    /// Build from any JSON value; non-objects become an empty message.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Message(fields),
            _ => Message::default(),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Message with `payload` set.
    pub fn with_payload(payload: Value) -> Self {
        let mut msg = Message::new();
        msg.0.insert(Self::PAYLOAD.to_string(), payload);
        msg
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn payload(&self) -> Option<&Value> {
        self.0.get(Self::PAYLOAD)
    }

    /// The payload as a mutable object.
    ///
    /// A missing or non-object payload (including `null`, numbers, strings
    /// and arrays) is discarded and replaced by an empty object first.
    pub fn payload_object_mut(&mut self) -> &mut Map<String, Value> {
        let payload = self
            .0
            .entry(Self::PAYLOAD)
            .or_insert_with(|| Value::Object(Map::new()));
        if !payload.is_object() {
            *payload = Value::Object(Map::new());
        }
        match payload {
            Value::Object(fields) => fields,
            _ => unreachable!("payload was just replaced by an object"),
        }
    }
}

impl From<Map<String, Value>> for Message {
    fn from(fields: Map<String, Value>) -> Self {
        Message(fields)
    }
}

impl From<Message> for Value {
    fn from(msg: Message) -> Self {
        msg.into_value()
    }
}

/// What the host should do with a processed message.
///
/// Both variants carry the message as modified by the node.
#[derive(Debug, Clone, PartialEq)]
pub enum Routing {
    /// Pass the message downstream.
    Forward(Message),
    /// Do not pass the message on.
    Drop(Message),
}

impl Routing {
    pub fn is_forward(&self) -> bool {
        matches!(self, Routing::Forward(_))
    }

    pub fn message(&self) -> &Message {
        match self {
            Routing::Forward(msg) | Routing::Drop(msg) => msg,
        }
    }

    pub fn into_message(self) -> Message {
        match self {
            Routing::Forward(msg) | Routing::Drop(msg) => msg,
        }
    }

    /// The message if it is to be forwarded.
    pub fn forwarded(self) -> Option<Message> {
        match self {
            Routing::Forward(msg) => Some(msg),
            Routing::Drop(_) => None,
        }
    }
}
