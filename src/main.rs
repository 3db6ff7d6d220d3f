use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dual_cache_api::cache::{MemoryCache, RedisClient, RedisOperations};
use dual_cache_api::config::EnvironmentConfig;
use dual_cache_api::routes::{create_app, API_PREFIX};
use dual_cache_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("🗄️ Dual Cache API - Memoria + Redis");
    info!("==================================");

    let config = EnvironmentConfig::from_env()?;

    let memory = MemoryCache::new(&config.cache);
    info!(
        "✅ Cache en memoria inicializado (capacidad: {} entradas)",
        config.cache.memory_max_capacity
    );

    let redis = match RedisClient::new(&config.cache).await {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    let app_state = AppState::new(memory, redis.clone());
    let app = create_app(app_state, &config.cors_origins);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles bajo {}:", API_PREFIX);
    info!("🧠 Memoria:");
    info!("   GET/DELETE /memory/:key, POST /memory");
    info!("🔴 Redis:");
    info!("   GET/DELETE /redis/:key, POST /redis, GET /redis/check/:key");
    info!("   GET /redis/string/:key, POST /redis/string");
    info!("   POST /redis/:key/expire, GET /redis/:key/ttl");
    info!("   /redis/list/:key/{{push,push-range,range,pop,length}}");
    info!("   /redis/set/:key/{{add,members,contains/:member,size,remove/:member}}");
    info!("   /redis/hash/:key/{{set,get/:field,all,exists/:field,delete/:field}}");
    info!("   /redis/sortedset/:key/{{add,range,score/:member,length}}");
    info!("⚖️ GET /compare/:key, GET /health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    redis.disconnect().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
