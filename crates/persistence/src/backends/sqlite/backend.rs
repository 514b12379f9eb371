//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{OptionalExtension, Row, TransactionBehavior, params};
use serde::{Deserialize, Serialize};

use crate::core::{AdvisorRepository, ChangeSet, IdAllocator, PendingChange};
use crate::error::{RepositoryError, RepositoryResult};
use crate::model::{Advisor, AdvisorId};

use super::schema;

const BACKEND_NAME: &str = "sqlite";

/// SQLite backend for advisor storage.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
    ids: IdAllocator,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .field("next_id", &self.ids.peek())
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    ///
    /// The pool holds a single connection, since every `:memory:` connection
    /// would otherwise see its own empty database.
    pub fn in_memory() -> RepositoryResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> RepositoryResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let busy_timeout = std::time::Duration::from_millis(config.busy_timeout_ms as u64);
        let enable_wal = config.enable_wal && !is_memory;
        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path.as_ref())
        }
        .with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            if enable_wal {
                conn.pragma_update_and_check(None, "journal_mode", "WAL", |_| Ok(()))?;
            }
            Ok(())
        });

        let max_size = if is_memory { 1 } else { config.max_connections };
        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| RepositoryError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            pool,
            config,
            is_memory,
            ids: IdAllocator::new(),
        })
    }

    /// Initialize the database schema and the id allocator.
    pub fn init_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn)?;

        let max_id: Option<AdvisorId> = conn
            .query_row("SELECT MAX(id) FROM advisors", [], |row| row.get(0))
            .map_err(sqlite_error)?;
        if let Some(max_id) = max_id {
            self.ids.observe(max_id);
        }

        tracing::info!(next_id = self.ids.peek(), "SQLite schema ready");
        Ok(())
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> RepositoryResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| RepositoryError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }
}

fn sqlite_error(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::Internal {
        backend_name: "sqlite".to_string(),
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

fn row_to_advisor(row: &Row<'_>) -> rusqlite::Result<(AdvisorId, String)> {
    Ok((row.get(0)?, row.get(1)?))
}

fn decode(id: AdvisorId, attributes: &str) -> RepositoryResult<Advisor> {
    Ok(Advisor {
        id,
        attributes: serde_json::from_str(attributes)?,
    })
}

#[async_trait]
impl AdvisorRepository for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn get_advisors(&self) -> RepositoryResult<Vec<Advisor>> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare("SELECT id, attributes FROM advisors ORDER BY id")
            .map_err(sqlite_error)?;
        let rows = stmt
            .query_map([], row_to_advisor)
            .map_err(sqlite_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(sqlite_error)?;

        rows.iter()
            .map(|(id, attributes)| decode(*id, attributes))
            .collect()
    }

    async fn get_advisor_by_id(&self, id: AdvisorId) -> RepositoryResult<Option<Advisor>> {
        let conn = self.get_connection()?;
        let row = conn
            .query_row(
                "SELECT id, attributes FROM advisors WHERE id = ?1",
                [id],
                row_to_advisor,
            )
            .optional()
            .map_err(sqlite_error)?;

        row.map(|(id, attributes)| decode(id, &attributes))
            .transpose()
    }

    async fn any(&self, id: AdvisorId) -> RepositoryResult<bool> {
        let conn = self.get_connection()?;
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM advisors WHERE id = ?1)",
            [id],
            |row| row.get(0),
        )
        .map_err(sqlite_error)
    }

    fn insert_advisor(
        &self,
        changes: &mut ChangeSet,
        mut advisor: Advisor,
    ) -> RepositoryResult<Advisor> {
        if advisor.needs_id() {
            advisor.id = self.ids.reserve(BACKEND_NAME)?;
        } else {
            self.ids.observe(advisor.id);
        }
        changes.push(PendingChange::Insert(advisor.clone()));
        Ok(advisor)
    }

    async fn save(&self, changes: &mut ChangeSet) -> RepositoryResult<usize> {
        let changes = changes.take();
        if changes.is_empty() {
            return Ok(0);
        }

        let mut conn = self.get_connection()?;
        // IMMEDIATE takes the write lock up front; concurrent writers wait on
        // the busy timeout. Dropping the transaction on an early return rolls it back.
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(sqlite_error)?;

        for change in &changes {
            match change {
                PendingChange::Insert(advisor) => {
                    let exists: bool = tx
                        .query_row(
                            "SELECT EXISTS(SELECT 1 FROM advisors WHERE id = ?1)",
                            [advisor.id],
                            |row| row.get(0),
                        )
                        .map_err(sqlite_error)?;
                    if exists {
                        return Err(RepositoryError::AlreadyExists { id: advisor.id });
                    }
                    let attributes = serde_json::to_string(&advisor.attributes)?;
                    tx.execute(
                        "INSERT INTO advisors (id, attributes) VALUES (?1, ?2)",
                        params![advisor.id, attributes],
                    )
                    .map_err(sqlite_error)?;
                }
                PendingChange::Update(advisor) => {
                    let attributes = serde_json::to_string(&advisor.attributes)?;
                    let updated = tx
                        .execute(
                            "UPDATE advisors SET attributes = ?2 WHERE id = ?1",
                            params![advisor.id, attributes],
                        )
                        .map_err(sqlite_error)?;
                    if updated == 0 {
                        return Err(RepositoryError::NotFound { id: advisor.id });
                    }
                }
                PendingChange::Delete(id) => {
                    let deleted = tx
                        .execute("DELETE FROM advisors WHERE id = ?1", [id])
                        .map_err(sqlite_error)?;
                    if deleted == 0 {
                        return Err(RepositoryError::NotFound { id: *id });
                    }
                }
            }
        }

        tx.commit().map_err(sqlite_error)?;
        tracing::debug!(applied = changes.len(), "Committed staged advisor changes");
        Ok(changes.len())
    }
}
