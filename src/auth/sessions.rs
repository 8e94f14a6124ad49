use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::token::{generate_token_default, hash_secret, hashes_equal};
use crate::errors::ServerError;

/// Verify the back-office password against the seeded admin row.
pub fn verify_admin_password(conn: &Connection, password: &str) -> Result<bool, ServerError> {
    let stored: Vec<u8> = conn
        .query_row("select password_hash from admin_user where id = 1", [], |r| {
            r.get(0)
        })
        .map_err(|e| ServerError::DbError(format!("select admin password failed: {e}")))?;

    Ok(hashes_equal(&hash_secret(password), &stored))
}

/// Replace the admin password hash. Used at startup when
/// VITRINE_ADMIN_PASSWORD is set.
pub fn set_admin_password(conn: &Connection, password: &str) -> Result<(), ServerError> {
    conn.execute(
        "update admin_user set password_hash = ?1 where id = 1",
        params![hash_secret(password).as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("update admin password failed: {e}")))?;
    Ok(())
}

/// Create a session row and return the raw token for the cookie.
/// Only the token's hash is stored.
pub fn create_session(conn: &Connection, now: i64, ttl_secs: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_secret(&raw_token);

    conn.execute(
        r#"
        insert into sessions (token_hash, created_at, expires_at)
        values (?, ?, ?)
        "#,
        params![hash.as_slice(), now, now + ttl_secs],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

/// A session is live when its row exists, is unexpired and unrevoked.
pub fn session_is_live(conn: &Connection, raw_token: &str, now: i64) -> Result<bool, ServerError> {
    let hash = hash_secret(raw_token);

    let found: Option<i64> = conn
        .query_row(
            r#"
            select id from sessions
            where token_hash = ?
              and expires_at > ?
              and revoked_at is null
            "#,
            params![hash.as_slice(), now],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))?;

    Ok(found.is_some())
}

/// Revoke the session behind a raw token. Revoking an unknown token is a
/// no-op: logout must always succeed.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_secret(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}
