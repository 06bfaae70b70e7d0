use clap::Parser;
use curlify::infrastructure::{logging, output};
use curlify::presentation::cli::Cli;

/// curlify: reproduce a logged HTTP request as a curl command
///
/// Reads a request configuration captured by a workflow-automation tool (as
/// a JSON literal, a file, or stdin) and prints an equivalent, shell-safe
/// curl invocation. Nothing is sent over the network.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = cli.run().await {
        output::print_error(&err);
        std::process::exit(1);
    }
}
