use std::future::Future;

use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use service::Repositories;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes;
use crate::state::ServerState;

/// Serve the router on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::build_router(state);
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Connect to the database, optionally migrate, bind and serve.
///
/// Any failure before the listener is up is returned to the caller, which
/// treats it as fatal.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let db = match models::db::connect_with_config(&cfg.database).await {
        Ok(db) => db,
        Err(e) => {
            error!(
                host = %cfg.database.host,
                port = cfg.database.port,
                user = %cfg.database.user,
                catalog = %cfg.database.catalog,
                error = %e,
                "could not initialise a connection to the database"
            );
            return Err(e);
        }
    };

    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!("schema migrations applied");
    }

    let state = ServerState::new(Repositories::seaorm(db));
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "hermes listening");
    serve(listener, state, shutdown).await
}
