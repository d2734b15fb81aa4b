// CLI層 - コマンドライン引数の定義と処理
// ユーザーインターフェースとアプリケーションロジックの橋渡し

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;

use anyhow::Result;
use clap::CommandFactory;

/// 解析済みのコマンドを実行
///
/// サブコマンドがなければヘルプを表示する。
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Goroutine {
            scenario,
            preset,
            config,
            time_unit_ms,
            watchdog_ms,
            verbose,
        }) => {
            execute_goroutine(GoroutineOptions {
                scenario,
                preset,
                config,
                time_unit_ms,
                watchdog_ms,
                verbose,
            })
            .await?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}
