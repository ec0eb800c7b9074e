use tata_chat_core::WidgetConfig;
use tata_chat_ui::ChatWidget;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub config: WidgetConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <main class="min-h-screen bg-gray-100 dark:bg-gray-900 flex items-center justify-center p-4">
            <div class="w-full max-w-xl h-[calc(100vh-2rem)] max-h-[720px]">
                <ChatWidget config={props.config.clone()} />
            </div>
        </main>
    }
}
