use crate::styles::{FLEX_CENTER, MUTED_TEXT};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Three pulsing dots shown while a reply is outstanding
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    let TypingIndicatorProps { class } = props;

    html! {
        <div
            class={classes!(FLEX_CENTER, "gap-2", "py-2", "px-4", "mx-4", "mb-2", class.clone())}
            role="status"
            aria-live="polite"
        >
            <div class="flex gap-1">
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.32s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot" style="animation-delay: -0.16s;"></span>
                <span class="w-2 h-2 rounded-full bg-gray-600 dark:bg-gray-400 animate-pulse-dot"></span>
            </div>
            <span class={classes!("text-xs", MUTED_TEXT)}>{"Assistant is typing..."}</span>
        </div>
    }
}
