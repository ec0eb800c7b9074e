//! Conversation state owned by a single widget instance

use crate::config::{WidgetConfig, WidgetDefaults};
use crate::error::ChatResult;
use crate::message::{Chart, Message};
use crate::service::ChatReply;

/// Identifies the one outstanding request. A completion is only applied when
/// it presents the ticket that is currently pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestTicket(u64);

/// An accepted send, ready to be handed to the chat service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub ticket: RequestTicket,
    pub question: String,
}

/// What a completion did to the conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The service reply was appended
    Answered,
    /// The failure message was appended
    Failed,
    /// Nothing changed: the ticket was stale or the conversation was closed
    Dropped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    draft: String,
    pending: Option<RequestTicket>,
    next_ticket: u64,
    scroll_epoch: u64,
    failure_message: String,
    closed: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(WidgetDefaults::WELCOME_MESSAGE, WidgetDefaults::FAILURE_MESSAGE)
    }
}

impl Conversation {
    /// Start a conversation seeded with a single bot greeting
    pub fn new(welcome_message: impl Into<String>, failure_message: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::bot(welcome_message)],
            draft: String::new(),
            pending: None,
            next_ticket: 0,
            scroll_epoch: 0,
            failure_message: failure_message.into(),
            closed: false,
        }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(
            config.welcome_message.clone(),
            config.failure_message.clone(),
        )
    }

    /// Messages in chronological order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn is_waiting_for_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Incremented every time the view should scroll to the newest message
    pub fn scroll_epoch(&self) -> u64 {
        self.scroll_epoch
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether `begin_send` would accept the current draft
    pub fn can_send(&self) -> bool {
        !self.closed && self.pending.is_none() && !self.draft.trim().is_empty()
    }

    /// Accept the current draft: append it as a user message, clear the
    /// draft, enter the pending state and request a scroll.
    ///
    /// Returns `None` without touching any state when the trimmed draft is
    /// empty, a reply is already outstanding, or the conversation is closed.
    pub fn begin_send(&mut self) -> Option<PendingRequest> {
        if !self.can_send() {
            return None;
        }

        let question = self.draft.trim().to_string();
        self.messages.push(Message::user(question.clone()));
        self.draft.clear();

        let ticket = RequestTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.request_scroll();

        tracing::debug!(ticket = ticket.0, "question accepted");
        Some(PendingRequest { ticket, question })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete(&mut self, ticket: RequestTicket, result: ChatResult<ChatReply>) -> Resolution {
        if self.closed {
            tracing::debug!(ticket = ticket.0, "dropping reply for closed conversation");
            return Resolution::Dropped;
        }
        if self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "dropping reply for stale request");
            return Resolution::Dropped;
        }

        let resolution = match result {
            Ok(reply) => {
                self.messages.push(bot_message(reply));
                Resolution::Answered
            }
            Err(err) => {
                tracing::error!(ticket = ticket.0, error = %err, "chat request failed");
                self.messages.push(Message::bot(self.failure_message.clone()));
                Resolution::Failed
            }
        };

        self.pending = None;
        self.request_scroll();
        resolution
    }

    /// Mark the conversation as torn down. Later completions are dropped.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn request_scroll(&mut self) {
        self.scroll_epoch = self.scroll_epoch.wrapping_add(1);
    }
}

fn bot_message(reply: ChatReply) -> Message {
    let message = Message::bot(reply.response);
    match reply.graph_img.as_deref() {
        Some(img) if !img.trim().is_empty() => match Chart::from_reply(reply.graph_summary, img) {
            Ok(chart) => message.with_chart(chart),
            Err(err) => {
                tracing::warn!(error = %err, "discarding chart from reply");
                message
            }
        },
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;
    use crate::message::Sender;
    use base64::Engine;

    fn conversation_with_draft(draft: &str) -> Conversation {
        let mut conversation = Conversation::default();
        conversation.set_draft(draft);
        conversation
    }

    #[test]
    fn test_seeded_with_welcome() {
        let conversation = Conversation::default();
        assert_eq!(
            conversation.messages(),
            &[Message::bot(
                "Welcome to Tata Motors. How can I assist you today?"
            )]
        );
        assert!(!conversation.is_waiting_for_reply());
        assert_eq!(conversation.draft(), "");
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        for draft in ["", "   ", "\n\t "] {
            let mut conversation = conversation_with_draft(draft);
            let before = conversation.clone();
            assert!(conversation.begin_send().is_none());
            assert_eq!(conversation, before);
        }
    }

    #[test]
    fn test_send_while_waiting_is_ignored() {
        let mut conversation = conversation_with_draft("first");
        assert!(conversation.begin_send().is_some());

        conversation.set_draft("second");
        let before = conversation.clone();
        assert!(conversation.begin_send().is_none());
        assert_eq!(conversation, before);
        assert_eq!(conversation.draft(), "second");
    }

    #[test]
    fn test_begin_send_appends_trimmed_and_clears_draft() {
        let mut conversation = conversation_with_draft("  Hello \n");
        let epoch = conversation.scroll_epoch();

        let pending = conversation.begin_send().unwrap();
        assert_eq!(pending.question, "Hello");
        assert_eq!(conversation.messages().last(), Some(&Message::user("Hello")));
        assert_eq!(conversation.draft(), "");
        assert!(conversation.is_waiting_for_reply());
        assert_eq!(conversation.scroll_epoch(), epoch + 1);
    }

    #[test]
    fn test_successful_reply() {
        let mut conversation = conversation_with_draft("Hello");
        let pending = conversation.begin_send().unwrap();

        let resolution = conversation.complete(pending.ticket, Ok(ChatReply::text("Hi there")));
        assert_eq!(resolution, Resolution::Answered);

        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1], Message::user("Hello"));
        assert_eq!(messages[2], Message::bot("Hi there"));
        assert!(!conversation.is_waiting_for_reply());
        assert_eq!(conversation.scroll_epoch(), 2);
    }

    #[test]
    fn test_failed_reply_uses_fixed_text() {
        let mut conversation = conversation_with_draft("Hello");
        let pending = conversation.begin_send().unwrap();

        let resolution = conversation.complete(
            pending.ticket,
            Err(ChatError::ServerError {
                status: 500,
                message: "Traceback: secret internals".into(),
            }),
        );
        assert_eq!(resolution, Resolution::Failed);

        let last = conversation.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(
            last.text,
            "Sorry, I am having trouble connecting. Please try again later."
        );
        assert!(!last.text.contains("Traceback"));
        assert!(!conversation.is_waiting_for_reply());
    }

    #[test]
    fn test_custom_failure_text() {
        let mut conversation = Conversation::new("Hi", "Offline");
        conversation.set_draft("ping");
        let pending = conversation.begin_send().unwrap();
        conversation.complete(pending.ticket, Err(ChatError::TimedOut { after_ms: 10 }));
        assert_eq!(conversation.messages().last(), Some(&Message::bot("Offline")));
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut conversation = conversation_with_draft("one");
        let first = conversation.begin_send().unwrap();
        conversation.complete(first.ticket, Ok(ChatReply::text("answer one")));

        conversation.set_draft("two");
        let second = conversation.begin_send().unwrap();
        assert_ne!(first.ticket, second.ticket);

        let before = conversation.clone();
        let resolution = conversation.complete(first.ticket, Ok(ChatReply::text("late")));
        assert_eq!(resolution, Resolution::Dropped);
        assert_eq!(conversation, before);
        assert!(conversation.is_waiting_for_reply());
    }

    #[test]
    fn test_duplicate_completion_is_dropped() {
        let mut conversation = conversation_with_draft("Hello");
        let pending = conversation.begin_send().unwrap();
        conversation.complete(pending.ticket, Ok(ChatReply::text("Hi")));

        let resolution = conversation.complete(pending.ticket, Ok(ChatReply::text("Hi again")));
        assert_eq!(resolution, Resolution::Dropped);
        assert_eq!(conversation.messages().len(), 3);
    }

    #[test]
    fn test_reply_after_close_is_dropped() {
        let mut conversation = conversation_with_draft("Hello");
        let pending = conversation.begin_send().unwrap();
        assert!(!conversation.is_closed());
        conversation.close();
        assert!(conversation.is_closed());

        let resolution = conversation.complete(pending.ticket, Ok(ChatReply::text("Hi")));
        assert_eq!(resolution, Resolution::Dropped);
        assert_eq!(conversation.messages().len(), 2);

        conversation.set_draft("again");
        assert!(conversation.begin_send().is_none());
    }

    #[test]
    fn test_messages_are_append_only() {
        let mut conversation = Conversation::default();
        let mut seen: Vec<Message> = conversation.messages().to_vec();

        for (question, answer) in [("a", Ok("A")), ("b", Err(())), ("c", Ok("C"))] {
            conversation.set_draft(question);
            let pending = conversation.begin_send().unwrap();
            let result = answer
                .map(ChatReply::text)
                .map_err(|()| ChatError::Malformed("bad".into()));
            conversation.complete(pending.ticket, result);

            let now = conversation.messages();
            assert_eq!(&now[..seen.len()], seen.as_slice());
            assert_eq!(now.len(), seen.len() + 2);
            seen = now.to_vec();
        }
    }

    #[test]
    fn test_reply_with_chart() {
        let png = base64::engine::general_purpose::STANDARD
            .encode([0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n', 0, 0]);
        let reply = ChatReply {
            question: Some("sales?".into()),
            response: "Sales rose.".into(),
            graph_summary: Some("Bar chart of sales".into()),
            graph_img: Some(png),
        };

        let mut conversation = conversation_with_draft("sales?");
        let pending = conversation.begin_send().unwrap();
        conversation.complete(pending.ticket, Ok(reply));

        let last = conversation.messages().last().unwrap();
        assert_eq!(last.text, "Sales rose.");
        let chart = last.chart.as_ref().unwrap();
        assert_eq!(chart.summary.as_deref(), Some("Bar chart of sales"));
    }

    #[test]
    fn test_invalid_chart_keeps_text() {
        let reply = ChatReply {
            question: None,
            response: "Here you go".into(),
            graph_summary: Some("summary".into()),
            graph_img: Some("not base64!!".into()),
        };

        let mut conversation = conversation_with_draft("chart please");
        let pending = conversation.begin_send().unwrap();
        assert_eq!(conversation.complete(pending.ticket, Ok(reply)), Resolution::Answered);

        let last = conversation.messages().last().unwrap();
        assert_eq!(last, &Message::bot("Here you go"));
    }
}
