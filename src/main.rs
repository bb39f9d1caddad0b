// src/main.rs

use tokio::net::TcpListener;

use pastelaria_backend::{config::AppState, routes::criar_app};

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let app = criar_app(app_state.clone());

    // Inicia o servidor
    let porta = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{porta}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(aguardar_sinal_de_encerramento())
        .await
        .expect("Erro no servidor Axum");

    // Depois que o servidor drena as conexões, fechamos a pool.
    app_state.db_pool.close().await;
    tracing::info!("Pool de conexões encerrada. Até logo!");
}

// SIGINT (Ctrl+C) ou SIGTERM encerram o processo graciosamente.
async fn aguardar_sinal_de_encerramento() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Falha ao instalar o handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Falha ao instalar o handler de SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Sinal de encerramento recebido, finalizando graciosamente...");
}
