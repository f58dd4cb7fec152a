//! Reforum - 论坛后端服务
//!
//! - Domain: user/, post/, daily_task/
//! - Application: commands, queries, ports
//! - Infrastructure: http, auth, persistence

use std::sync::Arc;

use chrono::Duration;
use reforum::config::{load_config, print_config};
use reforum::infrastructure::auth::{BcryptPasswordHasher, JwtTokenIssuer};
use reforum::infrastructure::http::{AppState, HttpServer, ServerConfig};
use reforum::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCategoryRepository,
    SqliteCommentRepository, SqliteDailyTaskRepository, SqlitePostRepository, SqliteTagRepository,
    SqliteUserRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},reforum={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Reforum - 论坛后端服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let post_repo = Arc::new(SqlitePostRepository::new(pool.clone()));
    let comment_repo = Arc::new(SqliteCommentRepository::new(pool.clone()));
    let category_repo = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let tag_repo = Arc::new(SqliteTagRepository::new(pool.clone()));
    let task_repo = Arc::new(SqliteDailyTaskRepository::new(pool));

    // 创建认证适配器
    let password_hasher = Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost));
    let token_issuer = Arc::new(JwtTokenIssuer::new(
        &config.auth.jwt_secret,
        Duration::days(config.auth.token_expiry_days as i64),
    ));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        user_repo,
        post_repo,
        comment_repo,
        category_repo,
        tag_repo,
        task_repo,
        password_hasher,
        token_issuer,
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
