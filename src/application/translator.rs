use crate::application::builders::command_builder::CurlCommandBuilder;
use crate::domain::entities::RequestConfig;
use crate::domain::value_objects::{BodyText, FormPayload, MaxTime};
use crate::infrastructure::config::RenderConfig;

/// Renders a captured request as a multi-line curl command.
///
/// Never fails: absent or unusable fields simply omit their flag, so an
/// empty config yields a bare `curl`.
pub fn translate(config: &RequestConfig) -> String {
    translate_with(config, &RenderConfig::default())
}

/// Same as [`translate`] with a caller-chosen layout.
pub fn translate_with(config: &RequestConfig, render: &RenderConfig) -> String {
    command_for(config).build(render)
}

/// Builds the ordered flag list for a config.
///
/// The three body conditions are checked independently. A config that sets
/// both `form` and a JSON `body` gets two `-d` flags.
pub fn command_for(config: &RequestConfig) -> CurlCommandBuilder {
    let mut command = CurlCommandBuilder::new()
        .method(&config.method())
        .headers(config.headers());

    let form = config.form();
    if let Some(fields) = form {
        command = command.form(&FormPayload::encode(fields));
    }
    if let Some(body) = config.body() {
        if config.is_json() || form.is_none() {
            command = command.data(&BodyText::from_value(body));
        }
    }

    if config.wants_compression() {
        command = command.compressed();
    }
    if config.skips_tls_verification() {
        command = command.insecure();
    }
    if config.follows_redirects() {
        command = command.follow_redirects();
    }
    if let Some(millis) = config.timeout_ms() {
        command = command.max_time(MaxTime::from_millis(millis));
    }
    if config.includes_response_headers() {
        command = command.include_headers();
    }
    if let Some(url) = config.target() {
        command = command.url(url);
    }

    command
}
