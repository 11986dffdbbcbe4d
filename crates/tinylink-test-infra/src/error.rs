use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("container error: {0}")]
    Container(#[from] testcontainers::TestcontainersError),
    #[error("mysql not reachable after {attempt} attempts: {source}")]
    Connect {
        attempt: u32,
        #[source]
        source: sqlx::Error,
    },
}

pub type Result<T> = StdResult<T, TestInfraError>;
