mod app;
mod config;
mod logging;

use app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = config::load_widget_config();
    tracing::info!(endpoint = %config.api_base_url, "starting chat widget");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
