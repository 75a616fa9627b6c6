use crate::cli::DaemonCli;
use clap::Parser;
use std::path::MAIN_SEPARATOR;

mod cli;
mod error;
mod handlers;
mod response;

#[tokio::main]
async fn main() {
    let f_appender =
        tracing_appender::rolling::hourly(format!(".{}", MAIN_SEPARATOR), "pagesnapd.log");
    let (non_blk, _guard) = tracing_appender::non_blocking(f_appender);
    tracing_subscriber::fmt()
        .with_env_filter("libpagesnap=debug,daemon=debug")
        .event_format(tracing_subscriber::fmt::format().pretty())
        .with_writer(non_blk)
        .init();
    let daemon_cli = DaemonCli::parse();
    daemon_cli.run_server().await.unwrap();
}
