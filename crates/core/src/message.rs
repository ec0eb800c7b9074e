//! Chat message model

use crate::error::ChartError;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// PNG file signature, checked before a chart payload is accepted
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Who authored a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A chart rendered by the backend for data questions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Natural-language explanation of the chart
    pub summary: Option<String>,
    /// Base64 encoded PNG
    pub png_base64: String,
}

impl Chart {
    /// Build a chart from the reply fields, rejecting payloads that are not
    /// base64 encoded PNG data.
    pub fn from_reply(summary: Option<String>, png_base64: &str) -> Result<Self, ChartError> {
        let trimmed = png_base64.trim();
        let bytes = base64::engine::general_purpose::STANDARD.decode(trimmed)?;
        if !bytes.starts_with(&PNG_SIGNATURE) {
            return Err(ChartError::NotPng);
        }

        Ok(Self {
            summary: summary.filter(|s| !s.trim().is_empty()),
            png_base64: trimmed.to_string(),
        })
    }

    /// Convert to base64 data URL format
    pub fn to_data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.png_base64)
    }
}

/// A single entry in the conversation. Messages are never edited once
/// appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<Chart>,
}

impl Message {
    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            chart: None,
        }
    }

    /// Create a bot message
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            chart: None,
        }
    }

    /// Attach a chart to a bot message
    #[must_use]
    pub fn with_chart(mut self, chart: Chart) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
