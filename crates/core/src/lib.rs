//! Conversation state and chat transport for the Tata Motors chat widget.
//!
//! This crate has no UI dependencies and compiles both natively and for
//! `wasm32`. The Yew components in `tata-chat-ui` render a [`Conversation`]
//! and drive it through a [`ChatController`].

pub mod client;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod error;
pub mod message;
pub mod service;

pub use client::{HttpChatService, HttpChatServiceBuilder};
pub use config::{WidgetConfig, WidgetDefaults};
pub use controller::{ChatController, PendingReply};
pub use conversation::{Conversation, PendingRequest, RequestTicket, Resolution};
pub use error::{ChartError, ChatError, ChatResult, ConfigError};
pub use message::{Chart, Message, Sender};
pub use service::{ChatQuestion, ChatReply, ChatService, with_deadline};
