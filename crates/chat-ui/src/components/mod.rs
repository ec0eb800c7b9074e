mod chat_input;
mod chat_widget;
mod message_bubble;
mod message_list;
mod typing_indicator;

pub use chat_input::{ChatInput, is_send_shortcut};
pub use chat_widget::{ChatWidget, ChatWidgetProps, ServiceHandle};
pub use message_bubble::{MessageBubble, sender_label};
pub use message_list::MessageList;
pub use typing_indicator::TypingIndicator;
