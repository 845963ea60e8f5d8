use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Configuration for the application database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub sql_logging: bool,
}

impl DatabaseConfig {
    /// A private in-memory SQLite database.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own empty
    /// database, so the pool is pinned to a single connection.
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            sql_logging: false,
        }
    }
}

/// Owner of the connection pool.
///
/// Built once at process start and handed to the application state; the
/// pool closes when this value is dropped or [`DatabaseConnections::close`]
/// is called.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config.database).await?;
/// let state = AppState::new(db.main.clone());
/// ```
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(config.sql_logging)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            backend = ?main.get_database_backend(),
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { main })
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    pub async fn close(self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.main.close().await
    }
}
