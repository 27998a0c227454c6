use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct GracefulShutdown(Arc<RwLock<bool>>);

impl GracefulShutdown {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(false)))
    }

    pub async fn get(&self) -> bool {
        *self.0.read().await
    }

    pub async fn start_listener(self) {
        let mut sigint = signal(SignalKind::interrupt()).unwrap();
        let mut sigquit = signal(SignalKind::quit()).unwrap();
        let mut sigterm = signal(SignalKind::terminate()).unwrap();

        tokio::select! {
            _ = sigint.recv() => {},
            _ = sigquit.recv() => {},
            _ = sigterm.recv() => {},
        }

        println!("Gracefully stopping... (press Ctrl+C again to force)");
        *self.0.write().await = true;

        tokio::select! {
            _ = sigint.recv() => {},
            _ = sigquit.recv() => {},
            _ = sigterm.recv() => {},
        }

        println!("Force stopping...");
        std::process::exit(0);
    }
}
