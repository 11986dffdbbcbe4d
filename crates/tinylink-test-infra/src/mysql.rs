use std::time::Duration;

use crate::{Result, TestInfraError};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;

/// Settings for a throwaway link database.
#[derive(Debug, Clone, TypedBuilder)]
pub struct MysqlConfig {
    #[builder(default = "tinylink".to_string())]
    database: String,
    #[builder(default = "tinylink".to_string())]
    username: String,
    #[builder(default = "tinylink".to_string())]
    password: String,
    #[builder(default = "8.4".to_string())]
    tag: String,
    /// Connection attempts made by [`MySqlServer::pool`].
    #[builder(default = 20)]
    connect_attempts: u32,
    #[builder(default = Duration::from_millis(500))]
    connect_backoff: Duration,
    #[builder(default = 5)]
    max_connections: u32,
}

/// A MySQL container holding an empty link database.
///
/// The server logs "ready for connections" once during initialisation and
/// again after its restart, so [`pool`](Self::pool) keeps retrying until a
/// connection actually succeeds. Dropping the value stops the container.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
    config: MysqlConfig,
}

impl MySqlServer {
    pub async fn start(config: MysqlConfig) -> Result<Self> {
        let container = GenericImage::new("mysql", config.tag.as_str())
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container, config })
    }

    /// Returns a `mysql://` DSN for the link database.
    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            self.config.username, self.config.password, host, port, self.config.database
        ))
    }

    /// Opens a pool once the server accepts connections.
    pub async fn pool(&self) -> Result<MySqlPool> {
        let url = self.database_url().await?;
        let options = MySqlPoolOptions::new().max_connections(self.config.max_connections);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match options.clone().connect(&url).await {
                Ok(pool) => return Ok(pool),
                Err(source) if attempt >= self.config.connect_attempts => {
                    return Err(TestInfraError::Connect { attempt, source });
                }
                Err(_) => tokio::time::sleep(self.config.connect_backoff).await,
            }
        }
    }
}
