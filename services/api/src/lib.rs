mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use shataku::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
