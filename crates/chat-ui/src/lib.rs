pub mod components;
pub mod styles;
pub mod utils;

// Re-export main components
pub use components::{
    ChatInput, ChatWidget, ChatWidgetProps, MessageBubble, MessageList, ServiceHandle,
    TypingIndicator,
};
pub use tata_chat_core::{Message, Sender, WidgetConfig};
pub use utils::markdown::render_markdown;
