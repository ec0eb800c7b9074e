use crate::components::{MessageBubble, TypingIndicator};
use crate::styles::{FLEX_COL_GAP_3, STANDARD_PADDING};
use tata_chat_core::Message;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageListProps {
    pub messages: Vec<Message>,
    /// Changes whenever the list should scroll to its newest entry
    pub scroll_epoch: u64,
    #[prop_or_default]
    pub waiting: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let MessageListProps {
        messages,
        scroll_epoch,
        waiting,
        class,
    } = props;

    let container_ref = use_node_ref();

    // Effects run after the DOM commit, so the new message is already laid out
    use_effect_with(*scroll_epoch, {
        let container_ref = container_ref.clone();
        move |_| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_scroll_top(element.scroll_height());
            }
        }
    });

    html! {
        <div
            ref={container_ref}
            class={classes!("flex-1", "overflow-y-auto", STANDARD_PADDING, FLEX_COL_GAP_3, class.clone())}
            role="log"
            aria-live="polite"
        >
            {for messages.iter().enumerate().map(|(index, message)| {
                html! {
                    <MessageBubble key={index} message={message.clone()} />
                }
            })}
            if *waiting {
                <TypingIndicator />
            }
        </div>
    }
}
