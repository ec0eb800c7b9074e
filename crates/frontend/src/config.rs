//! Widget configuration embedded in the host page

use tata_chat_core::WidgetConfig;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

/// Read the embedded configuration, falling back to defaults when the element
/// is missing or invalid.
pub fn load_widget_config() -> WidgetConfig {
    let embedded = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    parse_embedded_config(embedded.as_deref())
}

pub fn parse_embedded_config(embedded: Option<&str>) -> WidgetConfig {
    match embedded.map(str::trim).filter(|json| !json.is_empty()) {
        None => {
            tracing::debug!("no embedded widget configuration, using defaults");
            WidgetConfig::default()
        }
        Some(json) => WidgetConfig::from_json(json).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid widget configuration");
            WidgetConfig::default()
        }),
    }
}
