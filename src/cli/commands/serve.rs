use anyhow::Result;
use std::path::Path;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::router::create_router;

pub async fn serve(bind_address: &str, static_dir: &str) -> Result<()> {
    trace!("Entering serve function");
    info!("Height dashboard starting up");
    debug!("Static directory: {}", static_dir);
    debug!("Bind address: {}", bind_address);

    let static_dir = Path::new(static_dir);
    if !static_dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}; build the frontend with `trunk build` first",
            static_dir.display()
        );
    }

    trace!("Creating application router");
    let app = create_router(static_dir);

    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Dashboard running on http://{}", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
