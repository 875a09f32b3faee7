mod cli;
mod display_error;
mod run;

use cli::*;
use display_error::*;
use run::*;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Cli::parse();
    run(args).await.unwrap_or_exit();
}
