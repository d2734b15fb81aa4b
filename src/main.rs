use clap::Parser;
use concurrency_sandbox::cli::{dispatch, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = dispatch(cli).await {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
