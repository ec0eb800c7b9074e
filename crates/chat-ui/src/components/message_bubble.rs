use crate::styles::{BOT_BUBBLE_COLORS, USER_BUBBLE_COLORS, combine_styles};
use crate::utils::markdown::render_markdown;
use tata_chat_core::{Chart, Message, Sender};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageBubbleProps {
    pub message: Message,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let MessageBubbleProps { message, class } = props;

    let bubble_colors = match message.sender {
        Sender::User => USER_BUBBLE_COLORS,
        Sender::Bot => BOT_BUBBLE_COLORS,
    };

    html! {
        <div
            class={classes!("flex", "flex-col", "gap-1", "max-w-[85%]", "px-4", "py-2", "rounded-2xl", "shadow-sm", bubble_colors, class.clone())}
            data-sender={message.sender.as_str()}
        >
            <span class="sr-only">{sender_label(message.sender)}</span>
            <div class="leading-relaxed break-words text-sm">
                if message.is_user() {
                    <span class="whitespace-pre-wrap">{&message.text}</span>
                } else {
                    {render_markdown(&message.text)}
                }
            </div>

            if let Some(chart) = &message.chart {
                <ChartView chart={chart.clone()} />
            }
        </div>
    }
}

/// Accessible label announced before each message
pub fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Bot => "Assistant",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ChartViewProps {
    pub chart: Chart,
}

/// Chart thumbnail that expands to a full screen overlay on click
#[function_component(ChartView)]
fn chart_view(props: &ChartViewProps) -> Html {
    let expanded = use_state(|| false);
    let url = props.chart.to_data_url();
    let alt = props
        .chart
        .summary
        .clone()
        .unwrap_or_else(|| "Chart".to_string());

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
        })
    };

    html! {
        <figure class="my-2 max-w-md">
            if *expanded {
                <div class="fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4"
                     onclick={toggle_expanded.clone()}>
                    <img
                        src={url.clone()}
                        alt={alt.clone()}
                        class="max-w-full max-h-full object-contain cursor-zoom-out"
                        onclick={|e: MouseEvent| e.stop_propagation()}
                    />
                    <button
                        class="absolute top-4 right-4 text-white bg-black/50 rounded-full p-2 hover:bg-black/70 transition-colors"
                        onclick={toggle_expanded.clone()}
                        title="Close"
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        </svg>
                    </button>
                </div>
            }
            <img
                src={url}
                alt={alt}
                class="max-w-full h-auto rounded-lg shadow-md cursor-zoom-in hover:shadow-lg transition-shadow bg-white"
                onclick={toggle_expanded}
                title="Click to expand"
            />
            if let Some(summary) = &props.chart.summary {
                <figcaption class={combine_styles(&["mt-2 text-xs", "text-gray-600 dark:text-gray-300"])}>
                    {render_markdown(summary)}
                </figcaption>
            }
        </figure>
    }
}
