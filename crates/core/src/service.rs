//! The chat service contract and deadline handling

use crate::error::{ChatError, ChatResult};
use async_trait::async_trait;
use futures::future::{Either, select};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::pin;

/// Request body sent to the chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuestion {
    pub question: String,
}

/// Successful answer from the chat endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Echo of the question, when the backend sends it
    #[serde(default)]
    pub question: Option<String>,
    pub response: String,
    /// Explanation of the chart, SQL-backed deployments only
    #[serde(default)]
    pub graph_summary: Option<String>,
    /// Base64 encoded PNG chart, SQL-backed deployments only
    #[serde(default)]
    pub graph_img: Option<String>,
}

impl ChatReply {
    /// Create a text-only reply
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            question: None,
            response: response.into(),
            graph_summary: None,
            graph_img: None,
        }
    }
}

/// Something that can answer a question asynchronously.
///
/// Implementations resolve exactly once per call. The widget runs on a single
/// browser thread, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait ChatService {
    async fn send_question(&self, question: &str) -> ChatResult<ChatReply>;
}

#[async_trait(?Send)]
impl<S: ChatService + ?Sized> ChatService for std::rc::Rc<S> {
    async fn send_question(&self, question: &str) -> ChatResult<ChatReply> {
        (**self).send_question(question).await
    }
}

/// Race `call` against `deadline`. If the deadline fires first the call is
/// dropped and [`ChatError::TimedOut`] is returned.
pub async fn with_deadline<T, F, D>(call: F, deadline: D, after_ms: u64) -> ChatResult<T>
where
    F: Future<Output = ChatResult<T>>,
    D: Future<Output = ()>,
{
    let call = pin!(call);
    let deadline = pin!(deadline);

    match select(call, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ChatError::TimedOut { after_ms }),
    }
}
