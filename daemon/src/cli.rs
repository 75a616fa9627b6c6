use crate::error::{Error, Result};
use crate::handlers;
use axum::routing::get;
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(about = "PageSnap daemon", version)]
pub struct DaemonCli {
    port: u16,
    #[arg(default_value_t = String::from("localhost"))]
    host: String,
}

impl DaemonCli {
    pub async fn run_server(&self) -> Result<()> {
        let listener = self.get_tcp_socket_listener().await?;
        let app = Router::new().route("/get_resources", get(handlers::get_resources));
        tracing::info!("Listening on {}:{}", self.host, self.port);
        if let Err(e) = axum::serve(listener, app).await {
            return Err(Error::ServerError(format!("{} | {}", e, e.kind())));
        }
        Ok(())
    }

    pub async fn get_tcp_socket_listener(&self) -> Result<TcpListener> {
        let listener = match TcpListener::bind(format!("{}:{}", self.host, self.port)).await {
            Ok(l) => l,
            Err(e) => {
                return Err(Error::SocketError(format!("{} | {}", e, e.kind())));
            }
        };
        Ok(listener)
    }
}
