//! Database gateway.
//!
//! The gateway is the only component that talks to MySQL. Every
//! operation opens a fresh connection, runs exactly one parameterized
//! statement, and closes the connection again — there is no pool and no
//! cross-request transaction. Ownership guarantees the connection is
//! released on error paths; the success path closes it explicitly so
//! the server does not accumulate half-open sessions on the store.

mod models;

pub use models::*;

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use crate::config::{ConnectMode, DbConfig};

#[derive(Debug, Clone)]
pub struct Gateway {
    options: MySqlConnectOptions,
}

impl Gateway {
    pub fn new(config: &DbConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let options = match &config.mode {
            ConnectMode::Socket { path } => options.socket(path),
            ConnectMode::Tcp { host, port } => options.host(host).port(*port),
        };

        Self { options }
    }

    async fn connect(&self) -> sqlx::Result<MySqlConnection> {
        self.options.connect().await
    }

    /// Look up a user by raw username/password equality.
    ///
    /// Credentials are stored and compared in clear text; this is the
    /// store's contract, not an oversight here. Returns the first
    /// matching row when duplicates exist.
    pub async fn find_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> sqlx::Result<Option<User>> {
        let mut conn = self.connect().await?;
        let user = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username = ? AND password = ?",
        )
        .bind(username)
        .bind(password)
        .fetch_optional(&mut conn)
        .await?;
        conn.close().await?;
        Ok(user)
    }

    /// List all users without their password column.
    pub async fn list_users(&self) -> sqlx::Result<Vec<UserInfo>> {
        let mut conn = self.connect().await?;
        let users =
            sqlx::query_as::<_, UserInfo>("SELECT id, username, fullname, role FROM users")
                .fetch_all(&mut conn)
                .await?;
        conn.close().await?;
        Ok(users)
    }

    pub async fn create_user(&self, req: &CreateUserRequest) -> sqlx::Result<()> {
        let mut conn = self.connect().await?;
        sqlx::query("INSERT INTO users (username, password, fullname, role) VALUES (?, ?, ?, ?)")
            .bind(&req.username)
            .bind(&req.password)
            .bind(&req.fullname)
            .bind(&req.role)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }

    /// Delete a user by id. Deleting a missing id is not an error.
    pub async fn delete_user(&self, id: i64) -> sqlx::Result<()> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }

    /// List all documents, newest identifier first.
    pub async fn list_documents(&self) -> sqlx::Result<Vec<Document>> {
        let mut conn = self.connect().await?;
        let docs = sqlx::query_as::<_, Document>(
            "SELECT * FROM `tabel notulen` ORDER BY id_notulen DESC",
        )
        .fetch_all(&mut conn)
        .await?;
        conn.close().await?;
        Ok(docs)
    }

    /// Insert a document and return the store-generated identifier.
    pub async fn create_document(&self, payload: &DocumentPayload) -> sqlx::Result<u64> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(
            "INSERT INTO `tabel notulen` \
             (nomor_notulen, nama_notulen, tanggal_notulen, jenis, status_notulen) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&payload.nomor_notulen)
        .bind(&payload.nama_notulen)
        .bind(&payload.tanggal_notulen)
        .bind(&payload.jenis)
        .bind(&payload.status_notulen)
        .execute(&mut conn)
        .await?;
        conn.close().await?;
        Ok(result.last_insert_id())
    }

    /// Replace all five content columns of a document. Fields missing
    /// from the payload overwrite the row with NULL.
    pub async fn update_document(&self, id: i64, payload: &DocumentPayload) -> sqlx::Result<()> {
        let mut conn = self.connect().await?;
        sqlx::query(
            "UPDATE `tabel notulen` SET nomor_notulen = ?, nama_notulen = ?, \
             tanggal_notulen = ?, jenis = ?, status_notulen = ? WHERE id_notulen = ?",
        )
        .bind(&payload.nomor_notulen)
        .bind(&payload.nama_notulen)
        .bind(&payload.tanggal_notulen)
        .bind(&payload.jenis)
        .bind(&payload.status_notulen)
        .bind(id)
        .execute(&mut conn)
        .await?;
        conn.close().await?;
        Ok(())
    }

    pub async fn delete_document(&self, id: i64) -> sqlx::Result<()> {
        let mut conn = self.connect().await?;
        sqlx::query("DELETE FROM `tabel notulen` WHERE id_notulen = ?")
            .bind(id)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(())
    }
}
