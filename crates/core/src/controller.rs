//! Drives a [`Conversation`] against a [`ChatService`]

use crate::conversation::{Conversation, PendingRequest, Resolution};
use crate::service::{ChatService, with_deadline};
use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

/// Shared handle to a conversation and the service that answers it.
///
/// Cloning is cheap and every clone sees the same conversation. The guard
/// check and the state change of a send happen inside one borrow, so two
/// sends can never both be accepted.
pub struct ChatController<S> {
    conversation: Rc<RefCell<Conversation>>,
    service: Rc<S>,
}

impl<S> Clone for ChatController<S> {
    fn clone(&self) -> Self {
        Self {
            conversation: Rc::clone(&self.conversation),
            service: Rc::clone(&self.service),
        }
    }
}

impl<S: ChatService> ChatController<S> {
    pub fn new(conversation: Conversation, service: S) -> Self {
        Self {
            conversation: Rc::new(RefCell::new(conversation)),
            service: Rc::new(service),
        }
    }

    /// Borrow the current state for rendering
    pub fn conversation(&self) -> Ref<'_, Conversation> {
        self.conversation.borrow()
    }

    pub fn set_draft(&self, draft: impl Into<String>) {
        self.conversation.borrow_mut().set_draft(draft);
    }

    /// Try to send the current draft. Returns the reply to await when the
    /// send was accepted.
    pub fn submit(&self) -> Option<PendingReply<S>> {
        let request = self.conversation.borrow_mut().begin_send()?;
        Some(PendingReply {
            request,
            conversation: Rc::clone(&self.conversation),
            service: Rc::clone(&self.service),
        })
    }

    /// Tear down: replies still in flight will be dropped
    pub fn close(&self) {
        self.conversation.borrow_mut().close();
    }
}

/// An accepted send whose reply has not been applied yet
#[must_use = "the reply is only applied once resolved"]
pub struct PendingReply<S> {
    request: PendingRequest,
    conversation: Rc<RefCell<Conversation>>,
    service: Rc<S>,
}

impl<S: ChatService> PendingReply<S> {
    pub fn question(&self) -> &str {
        &self.request.question
    }

    /// Ask the service and apply the outcome, with no deadline
    pub async fn resolve(self) -> Resolution {
        let result = self.service.send_question(&self.request.question).await;
        self.conversation
            .borrow_mut()
            .complete(self.request.ticket, result)
    }

    /// Ask the service and apply the outcome. If `deadline` completes first
    /// the request is abandoned and the failure path is taken.
    pub async fn resolve_with_deadline<D>(self, deadline: D, after_ms: u64) -> Resolution
    where
        D: Future<Output = ()>,
    {
        let call = self.service.send_question(&self.request.question);
        let result = with_deadline(call, deadline, after_ms).await;
        self.conversation
            .borrow_mut()
            .complete(self.request.ticket, result)
    }
}
