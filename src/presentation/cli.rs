use crate::application::services::TranslationService;
use crate::infrastructure::config::RenderConfig;
use crate::infrastructure::input::InputSource;
use crate::infrastructure::output::print_command;
use anyhow::Result;
use clap::Parser;
use tracing::debug;

/// CLI configuration for curlify
#[derive(Parser, Debug)]
#[command(name = "curlify", version)]
#[command(
    about = "Turn a logged HTTP request configuration into a ready-to-run curl command",
    long_about = None
)]
pub struct Cli {
    /// Request configuration: a JSON string, a path to a JSON file, or `-` for stdin
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Print the command on a single line instead of one flag per line
    #[arg(long, env = "CURLIFY_ONE_LINE")]
    pub one_line: bool,

    /// Log what is being read and generated to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::from_flags(self.one_line)
    }

    pub async fn run(&self) -> Result<()> {
        let source = InputSource::detect(&self.input);
        debug!(?source, "resolved input");

        let service = TranslationService::new(Box::new(source), self.render_config());
        let command = service.curl_command().await?;
        print_command(&command);
        Ok(())
    }
}
