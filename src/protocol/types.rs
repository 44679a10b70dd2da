use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Request/response pair exchanged between a validator and a miner.
///
/// The validator fills `input_value` before sending. The miner fills
/// `output_value` and hands the same record back. `None` means the miner has
/// not answered yet, which is distinct from an answer of zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub input_value: i64,
    #[serde(default)]
    pub output_value: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageState {
    Pending,
    Answered,
}

impl Message {
    pub fn new(input_value: i64) -> Self {
        Self {
            input_value,
            output_value: None,
        }
    }

    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    pub fn with_output(mut self, output_value: i64) -> Self {
        self.output_value = Some(output_value);
        self
    }

    /// Returns the miner's answer exactly as stored.
    ///
    /// An unanswered message yields `None`; callers check before use.
    pub fn extract_result(&self) -> Option<i64> {
        self.output_value
    }

    pub fn state(&self) -> MessageState {
        match self.output_value {
            Some(_) => MessageState::Answered,
            None => MessageState::Pending,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.state() == MessageState::Answered
    }
}

/// Piecewise construction of a [`Message`], failing if no input was supplied.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    input_value: Option<i64>,
    output_value: Option<i64>,
}

impl MessageBuilder {
    pub fn input_value(mut self, input_value: i64) -> Self {
        self.input_value = Some(input_value);
        self
    }

    pub fn output_value(mut self, output_value: i64) -> Self {
        self.output_value = Some(output_value);
        self
    }

    pub fn build(self) -> Result<Message> {
        let input_value = self
            .input_value
            .ok_or_else(|| Error::missing_field("input_value"))?;

        Ok(Message {
            input_value,
            output_value: self.output_value,
        })
    }
}
