use crate::application::translator;
use crate::domain::entities::RequestConfig;
use crate::infrastructure::config::RenderConfig;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

#[cfg(test)]
use mockall::automock;

/// Anything that can hand over a parsed request capture.
/// Lets the service be tested without touching files or stdin.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn load(&self) -> Result<RequestConfig>;
}

/// Application service: load a capture, turn it into a command.
pub struct TranslationService {
    source: Box<dyn ConfigSource>,
    render: RenderConfig,
}

impl TranslationService {
    pub fn new(source: Box<dyn ConfigSource>, render: RenderConfig) -> Self {
        Self { source, render }
    }

    pub async fn curl_command(&self) -> Result<String> {
        let config = self.source.load().await?;
        debug!(?config, "loaded request capture");

        let command = translator::translate_with(&config, &self.render);
        let method = config.method();
        info!(
            method = method.as_str(),
            url = config.target().unwrap_or("<none>"),
            "generated curl command"
        );
        Ok(command)
    }
}
