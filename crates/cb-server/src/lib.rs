//! cb-server - HTTP comment service for comment-board
//!
//! Exposes a [`CommentStore`] over JSON:
//!
//! | Method | Path            | Success                 | Failure |
//! |--------|-----------------|-------------------------|---------|
//! | GET    | `/comments`     | 200, array of comments  |         |
//! | POST   | `/comments`     | 201, created comment    |         |
//! | PUT    | `/comments/:id` | 200, updated comment    | 404     |
//! | DELETE | `/comments/:id` | 204                     | 404     |
//! | GET    | `/health`       | 200                     |         |

mod error;
mod handlers;
mod router;

pub use error::AppError;
pub use router::{build_router, AppState};

use cb_core::comment::CommentStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Serve the comment API on an already bound listener until the task is dropped
pub async fn serve(listener: TcpListener, store: Arc<dyn CommentStore>) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Comment service listening on http://{}", addr);
    }
    axum::serve(listener, build_router(store)).await
}
