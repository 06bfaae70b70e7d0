use crate::domain::entities::Method;
use crate::domain::value_objects::{BodyText, FormPayload, MaxTime, ShellQuoted};
use crate::infrastructure::config::RenderConfig;

/// Name of the client the generated command invokes.
pub const CLIENT: &str = "curl";

/// Accumulates command-line tokens in the order they are appended.
///
/// Each method appends one flag. Callers are responsible for ordering;
/// the translator drives it in the canonical flag order.
pub struct CurlCommandBuilder {
    tokens: Vec<String>,
}

impl CurlCommandBuilder {
    pub fn new() -> Self {
        Self {
            tokens: vec![CLIENT.to_string()],
        }
    }

    /// `-X <METHOD>`, skipped for GET. Verbs that are not plain tokens are quoted.
    pub fn method(mut self, method: &Method) -> Self {
        if *method != Method::Get {
            let verb = method.as_str();
            if method.is_plain_token() {
                self.tokens.push(format!("-X {}", verb));
            } else {
                self.tokens.push(format!("-X {}", ShellQuoted::new(verb)));
            }
        }
        self
    }

    pub fn headers<'a, I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        for (name, value) in headers {
            let line = format!("{}: {}", name, value);
            self.tokens.push(format!("-H {}", ShellQuoted::new(&line)));
        }
        self
    }

    pub fn form(mut self, payload: &FormPayload) -> Self {
        self.tokens.push(format!("-d {}", ShellQuoted::new(payload.as_str())));
        self
    }

    pub fn data(mut self, body: &BodyText) -> Self {
        self.tokens.push(format!("-d {}", ShellQuoted::new(body.as_str())));
        self
    }

    pub fn compressed(self) -> Self {
        self.flag("--compressed")
    }

    pub fn insecure(self) -> Self {
        self.flag("-k")
    }

    pub fn follow_redirects(self) -> Self {
        self.flag("-L")
    }

    pub fn max_time(mut self, max_time: MaxTime) -> Self {
        self.tokens.push(format!("--max-time {}", max_time.seconds()));
        self
    }

    pub fn include_headers(self) -> Self {
        self.flag("-i")
    }

    pub fn url(mut self, url: &str) -> Self {
        self.tokens.push(ShellQuoted::new(url).to_string());
        self
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn build(self, config: &RenderConfig) -> String {
        self.tokens.join(config.layout.separator())
    }

    fn flag(mut self, flag: &str) -> Self {
        self.tokens.push(flag.to_string());
        self
    }
}

impl Default for CurlCommandBuilder {
    fn default() -> Self {
        Self::new()
    }
}
