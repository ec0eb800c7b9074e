use crate::styles::{
    CARD_BG, FLEX_CENTER, INPUT_COLORS, PRIMARY_BORDER, PRIMARY_TEXT, STANDARD_PADDING,
    TRANSITION_COLORS, combine_styles,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Tallest the textarea grows before it scrolls
const MAX_TEXTAREA_HEIGHT_PX: i32 = 160;

#[derive(Properties, PartialEq)]
pub struct ChatInputProps {
    /// Current draft, owned by the conversation
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_send: Callback<()>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[hook]
fn use_auto_resize_textarea() -> (NodeRef, Callback<()>) {
    let text_area_ref = use_node_ref();

    let resize_textarea = {
        let text_area_ref = text_area_ref.clone();
        Callback::from(move |()| {
            if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>()
                && let Some(element) = text_area.dyn_ref::<HtmlElement>()
            {
                let style = element.style();
                let _ = style.set_property("height", "auto");
                let _ = style.set_property("overflow-y", "hidden");
                let new_height = text_area.scroll_height().min(MAX_TEXTAREA_HEIGHT_PX);
                let _ = style.set_property("height", &format!("{new_height}px"));
                if new_height >= MAX_TEXTAREA_HEIGHT_PX {
                    let _ = style.set_property("overflow-y", "auto");
                }
            }
        })
    };

    (text_area_ref, resize_textarea)
}

#[function_component(ChatInput)]
pub fn chat_input(props: &ChatInputProps) -> Html {
    let (text_area_ref, resize_textarea) = use_auto_resize_textarea();

    // Shrink back once the draft is cleared by a send
    {
        let resize_textarea = resize_textarea.clone();
        use_effect_with(props.value.is_empty(), move |_| resize_textarea.emit(()));
    }

    let handle_input = {
        let on_input = props.on_input.clone();
        let text_area_ref = text_area_ref.clone();
        let resize_textarea = resize_textarea.clone();
        Callback::from(move |_: InputEvent| {
            if let Some(text_area) = text_area_ref.cast::<HtmlTextAreaElement>() {
                on_input.emit(text_area.value());
                resize_textarea.emit(());
            }
        })
    };

    let handle_keydown = {
        let on_send = props.on_send.clone();
        let disabled = props.disabled;
        Callback::from(move |e: KeyboardEvent| {
            if is_send_shortcut(&e.key(), e.shift_key(), e.is_composing()) {
                e.prevent_default();
                if !disabled {
                    on_send.emit(());
                }
            }
        })
    };

    let is_empty = props.value.trim().is_empty();
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| AttrValue::from("Type a message..."));

    html! {
        <div class={combine_styles(&["flex items-end gap-3", STANDARD_PADDING, CARD_BG, "border-t", PRIMARY_BORDER])}>
            <div class="flex-1 relative">
                <textarea
                    ref={text_area_ref}
                    class={combine_styles(&["w-full min-h-[40px] max-h-[160px] px-3 py-2 border", INPUT_COLORS, "rounded-lg text-sm leading-relaxed resize-none outline-none overflow-hidden", TRANSITION_COLORS, CARD_BG, PRIMARY_TEXT, "focus:border-blue-500 focus:ring-1 focus:ring-blue-500 disabled:bg-gray-100 disabled:cursor-not-allowed placeholder:text-gray-400 dark:placeholder:text-gray-600"])}
                    placeholder={placeholder.clone()}
                    aria-label={placeholder}
                    value={props.value.clone()}
                    oninput={handle_input}
                    onkeydown={handle_keydown}
                    disabled={props.disabled}
                    rows="1"
                />
            </div>

            <SendButton
                onclick={props.on_send.clone()}
                disabled={is_empty || props.disabled}
            />
        </div>
    }
}

/// Enter sends; Shift+Enter inserts a newline; Enter while an IME is
/// composing confirms the composition instead.
pub fn is_send_shortcut(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[derive(Properties, PartialEq)]
struct SendButtonProps {
    pub onclick: Callback<()>,
    pub disabled: bool,
}

#[function_component(SendButton)]
fn send_button(props: &SendButtonProps) -> Html {
    let handle_click = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };

    html! {
        <button
            class={combine_styles(&[FLEX_CENTER, "justify-center w-[42px] h-[42px] p-0 rounded-lg bg-blue-600 text-white cursor-pointer transition-all duration-200 flex-shrink-0 hover:bg-blue-700 disabled:bg-gray-200 disabled:cursor-not-allowed disabled:text-gray-400"])}
            onclick={handle_click}
            disabled={props.disabled}
            title="Send message"
            aria-label="Send message"
        >
            <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M22 2L11 13" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
                <path d="M22 2L15 22L11 13L2 9L22 2Z" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
        </button>
    }
}
