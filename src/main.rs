mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use middleware::auth::auth_middleware;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 Fleet Logistics - Gestão de Pátio e Transporte");
    info!("=================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de dados
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Erro conectando à base de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de base de dados: {}", e));
        }
    };

    if let Err(e) = database::run_migrations(&pool).await {
        error!("❌ Erro aplicando migrações: {}", e);
        return Err(anyhow::anyhow!("Erro de migração: {}", e));
    }
    info!("✅ Base de dados conectada e migrada");

    let addr: SocketAddr = config.server_addr().parse()?;

    // Em produção o CORS fica restrito às origens configuradas
    let cors = if config.is_production() && !config.cors_origins.is_empty() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config);

    // Rotas protegidas (exigem token de acesso)
    let protected_routes = Router::new()
        .nest("/api/auth", routes::auth_routes::create_protected_auth_router())
        .nest("/api/users", routes::user_routes::create_user_router())
        .nest("/api/drivers", routes::cadastro_routes::create_driver_router())
        .nest(
            "/api/manufacturers",
            routes::cadastro_routes::create_manufacturer_router(),
        )
        .nest("/api/yards", routes::cadastro_routes::create_yard_router())
        .nest("/api/clients", routes::cadastro_routes::create_client_router())
        .nest(
            "/api/checkpoints",
            routes::checkpoint_routes::create_checkpoint_router(),
        )
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/collects", routes::collect_routes::create_collect_router())
        .nest(
            "/api/transports",
            routes::transport_routes::create_transport_router(),
        )
        .nest("/api/portaria", routes::portaria_routes::create_portaria_router())
        .nest("/api/reports", routes::report_routes::create_report_router())
        .layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_public_auth_router())
        .merge(protected_routes)
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticação:");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/refresh - Renovar tokens");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/me - Usuário atual");
    info!("📋 Coletas:");
    info!("   POST /api/collects - Criar coleta");
    info!("   GET  /api/collects - Listar coletas");
    info!("   PATCH /api/collects/:id - Check-in / check-out");
    info!("   POST /api/collects/:id/cancel - Cancelar coleta");
    info!("🚚 Transportes:");
    info!("   POST /api/transports - Criar transporte");
    info!("   GET  /api/transports - Listar transportes");
    info!("   GET  /api/transports/:id - Detalhe com timeline");
    info!("   GET  /api/transports/:id/progress - Progresso");
    info!("   POST /api/transports/:id/checkpoints - Definir checkpoints");
    info!("   POST /api/transports/:id/ready - Pronto para despacho");
    info!("   POST /api/transports/:id/delivery - Registrar entrega");
    info!("   POST /api/transports/:id/cancel - Cancelar transporte");
    info!("   POST /api/transports/checkpoints/:tc_id/reached - Checkpoint alcançado");
    info!("🚪 Portaria:");
    info!("   POST /api/portaria/authorize/:collect_id - Autorizar entrada");
    info!("   POST /api/portaria/authorize-exit/:transport_id - Liberar saída");
    info!("   GET  /api/portaria/pending - Fila de pendências");
    info!("📊 Relatórios:");
    info!("   GET  /api/reports/yard-billing - Faturamento de pátio");
    info!("   GET  /api/reports/dashboard - Resumo do dashboard");
    info!("🗂  Cadastros: /api/drivers, /api/manufacturers, /api/yards, /api/clients, /api/checkpoints");
    info!("👥 Usuários (admin): /api/users");

    // Iniciar servidor em background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Erro do servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminou com erro: {}", e);
    }

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Health check simples
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-logistics",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de apagamento graceful
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
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
