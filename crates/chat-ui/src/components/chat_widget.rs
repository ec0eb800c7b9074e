use crate::components::{ChatInput, MessageList};
use crate::styles::{
    CARD_SHADOW, CONTAINER_BG, FLEX_BETWEEN, FLEX_COL, HEADER_COLORS, HEADER_PADDING,
    ROUNDED_STANDARD, combine_styles,
};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use tata_chat_core::{
    ChatController, ChatError, ChatReply, ChatResult, ChatService, Conversation, HttpChatService,
    Resolution, WidgetConfig,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Shared handle to whatever answers the widget's questions.
///
/// Two handles are equal when they point at the same service, which keeps
/// prop comparisons cheap.
#[derive(Clone)]
pub struct ServiceHandle(Rc<dyn ChatService>);

impl ServiceHandle {
    pub fn new(service: impl ChatService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl PartialEq for ServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Stands in for the HTTP client when the configuration cannot produce one,
/// so every send still resolves through the failure path.
struct UnavailableService {
    reason: String,
}

#[async_trait::async_trait(?Send)]
impl ChatService for UnavailableService {
    async fn send_question(&self, _question: &str) -> ChatResult<ChatReply> {
        Err(ChatError::Configuration(self.reason.clone()))
    }
}

fn default_service(config: &WidgetConfig) -> Rc<dyn ChatService> {
    match HttpChatService::from_config(config) {
        Ok(service) => Rc::new(service),
        Err(err) => {
            tracing::error!(error = %err, "chat service unavailable");
            Rc::new(UnavailableService {
                reason: err.to_string(),
            })
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ChatWidgetProps {
    #[prop_or_default]
    pub config: WidgetConfig,
    /// Overrides the HTTP client built from `config`
    #[prop_or_default]
    pub service: Option<ServiceHandle>,
    #[prop_or_default]
    pub class: Classes,
}

type Controller = ChatController<Rc<dyn ChatService>>;

/// Complete chat widget: header, message list and input.
///
/// The widget owns its conversation. A reply that arrives after the widget
/// is unmounted, or after its configuration changed, is dropped.
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let ChatWidgetProps {
        config,
        service,
        class,
    } = props;

    let redraw = use_force_update();

    let controller: Rc<Controller> = use_memo(
        (config.clone(), service.clone()),
        |(config, service)| {
            let service = service
                .as_ref()
                .map_or_else(|| default_service(config), |handle| Rc::clone(&handle.0));
            ChatController::new(Conversation::from_config(config), service)
        },
    );

    // Liveness guard: replies for a torn-down controller are discarded
    {
        let controller = Rc::clone(&controller);
        use_effect_with((config.clone(), service.clone()), move |_| {
            move || controller.close()
        });
    }

    let on_input = {
        let controller = Rc::clone(&controller);
        let redraw = redraw.clone();
        Callback::from(move |draft: String| {
            controller.set_draft(draft);
            redraw.force_update();
        })
    };

    let on_send = {
        let controller = Rc::clone(&controller);
        let redraw = redraw.clone();
        let timer_delay_ms = config.timer_delay_ms();
        Callback::from(move |()| {
            let Some(pending) = controller.submit() else {
                return;
            };
            redraw.force_update();

            let redraw = redraw.clone();
            spawn_local(async move {
                let resolution = match timer_delay_ms {
                    Some(delay_ms) => {
                        let deadline = TimeoutFuture::new(delay_ms);
                        pending.resolve_with_deadline(deadline, u64::from(delay_ms)).await
                    }
                    None => pending.resolve().await,
                };
                if resolution != Resolution::Dropped {
                    redraw.force_update();
                }
            });
        })
    };

    let conversation = controller.conversation();
    let waiting = conversation.is_waiting_for_reply();

    html! {
        <section
            class={classes!(FLEX_COL, "h-full", "overflow-hidden", CONTAINER_BG, ROUNDED_STANDARD, CARD_SHADOW, class.clone())}
            aria-busy={waiting.to_string()}
        >
            <header class={combine_styles(&[HEADER_COLORS, HEADER_PADDING, FLEX_BETWEEN, "flex-shrink-0"])}>
                <h2 class="font-semibold text-base">{&config.title}</h2>
            </header>

            <MessageList
                messages={conversation.messages().to_vec()}
                scroll_epoch={conversation.scroll_epoch()}
                waiting={waiting}
            />

            <div class="flex-shrink-0">
                <ChatInput
                    value={AttrValue::from(conversation.draft().to_string())}
                    on_input={on_input}
                    on_send={on_send}
                    placeholder={AttrValue::from(config.placeholder.clone())}
                    disabled={waiting}
                />
            </div>
        </section>
    }
}
