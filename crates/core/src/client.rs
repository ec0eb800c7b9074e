//! HTTP implementation of [`ChatService`]

use crate::config::WidgetConfig;
use crate::error::{ChatError, ChatResult};
use crate::service::{ChatQuestion, ChatReply, ChatService};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Method};
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = "tata-chat-widget/0.1.0";

/// Chat client that posts questions to the backend's `/chat` endpoint
#[derive(Clone, Debug)]
pub struct HttpChatService {
    client: Client,
    endpoint: Url,
}

impl HttpChatService {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> ChatResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a client for the endpoint described by a widget configuration
    pub fn from_config(config: &WidgetConfig) -> ChatResult<Self> {
        let mut builder = Self::builder()
            .base_url(config.api_base_url.clone())
            .chat_path(config.chat_path.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Create a new client builder
    pub fn builder() -> HttpChatServiceBuilder {
        HttpChatServiceBuilder::default()
    }

    /// Get the chat endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Execute a request and handle common errors
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ChatResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ChatError::from_status(status, message))
        }
    }
}

#[async_trait(?Send)]
impl ChatService for HttpChatService {
    async fn send_question(&self, question: &str) -> ChatResult<ChatReply> {
        tracing::debug!(endpoint = %self.endpoint, "posting question");
        let request = self
            .client
            .request(Method::POST, self.endpoint.clone())
            .json(&ChatQuestion {
                question: question.to_string(),
            });
        self.execute(request).await
    }
}

/// Builder for [`HttpChatService`]
#[derive(Default)]
pub struct HttpChatServiceBuilder {
    base_url: Option<String>,
    chat_path: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpChatServiceBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the path of the chat endpoint, relative to the base URL
    #[must_use]
    pub fn chat_path(mut self, path: impl Into<String>) -> Self {
        self.chat_path = Some(path.into());
        self
    }

    /// Set the transport timeout. Ignored on wasm32, where the widget's own
    /// deadline applies instead.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> ChatResult<HttpChatService> {
        let base_url = self
            .base_url
            .ok_or_else(|| ChatError::Configuration("base_url is required".into()))?;

        let config = WidgetConfig {
            api_base_url: base_url,
            chat_path: self
                .chat_path
                .unwrap_or_else(|| crate::config::WidgetDefaults::CHAT_PATH.to_string()),
            ..WidgetConfig::default()
        };
        config.validate()?;
        let endpoint = config.chat_url()?;

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout;

        client_builder = client_builder
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));

        let client = client_builder.build()?;

        Ok(HttpChatService { client, endpoint })
    }
}
