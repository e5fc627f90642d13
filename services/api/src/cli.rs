use crate::preview::{run_preview, run_prorate, PreviewArgs, ProrateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shataku::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Shataku Cost Service",
    about = "Preview company-housing assignment costs from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the full cost breakdown for assigning an employee to an apartment
    Preview(PreviewArgs),
    /// Print the prorated first-month rent for a move-in date
    Prorate(ProrateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Preview(args) => run_preview(args),
        Command::Prorate(args) => run_prorate(args),
    }
}
