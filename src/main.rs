use simple_http_server::config::Config;
use simple_http_server::server::{self, ServerContext};
use simple_http_server::server::root::DocumentRoot;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let root = match DocumentRoot::from_current_dir(&cfg.document_root) {
        Ok(root) => root,
        Err(e) => {
            tracing::error!("{:#}", e);
            return Ok(());
        }
    };

    let ctx = ServerContext::new(&cfg, root);

    tokio::select! {
        res = server::listener::run(&cfg.listen_addr, ctx) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
