use super::Message;
use crate::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt::Debug;
use tracing::{debug, warn};

/// A message that can travel between validator and miner.
///
/// Implementors are plain serde records. The transport that carries them is
/// supplied by the host; this trait only fixes the route name, the
/// round-trip through JSON, and how the sending side reads the answer.
pub trait Synapse: Serialize + DeserializeOwned + Clone + Debug {
    const NAME: &'static str;

    /// Keys a decoded payload must carry.
    const REQUIRED_FIELDS: &'static [&'static str];

    type Output;

    fn extract_result(&self) -> Self::Output;

    fn to_json(&self) -> Result<String> {
        let payload = serde_json::to_string(self)?;
        debug!("Encoded {} synapse ({} bytes)", Self::NAME, payload.len());
        Ok(payload)
    }

    /// Decodes a synapse from a JSON object.
    ///
    /// Positional (array) encodings are rejected, and a missing required
    /// key is reported as [`Error::MissingField`].
    fn from_json(payload: &str) -> Result<Self> {
        debug!("Decoding {} synapse ({} bytes)", Self::NAME, payload.len());
        decode_object(payload).inspect_err(|err| {
            warn!("Failed to decode {} synapse: {}", Self::NAME, err);
        })
    }
}

fn decode_object<S: Synapse>(payload: &str) -> Result<S> {
    let value: Value = serde_json::from_str(payload)?;

    let Some(fields) = value.as_object() else {
        return Err(Error::invalid_payload(format!(
            "expected a JSON object for {}",
            S::NAME
        )));
    };

    if let Some(missing) = S::REQUIRED_FIELDS
        .iter()
        .find(|field| !fields.contains_key(**field))
    {
        return Err(Error::missing_field(*missing));
    }

    Ok(serde_json::from_value(value)?)
}

impl Synapse for Message {
    const NAME: &'static str = "Dummy";

    const REQUIRED_FIELDS: &'static [&'static str] = &["input_value"];

    type Output = Option<i64>;

    fn extract_result(&self) -> Self::Output {
        Message::extract_result(self)
    }
}
