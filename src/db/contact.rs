use chrono::Utc;
use rusqlite::{params, Connection};

use crate::errors::ServerError;

/// A validated contact submission, optionally carrying a requested
/// visit slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub visit_date: Option<String>,
    pub visit_time: Option<String>,
}

impl ContactMessage {
    /// Name, email and message are mandatory; everything else is optional.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ServerError::BadRequest(
                "preencha nome, e-mail e mensagem".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(ServerError::BadRequest("e-mail inválido".to_string()));
        }
        Ok(())
    }
}

pub fn insert_contact(conn: &Connection, msg: &ContactMessage) -> Result<(), ServerError> {
    msg.validate()?;

    conn.execute(
        r#"
        insert into contact_forms (name, email, phone, message, visit_date, visit_time, status, created_at)
        values (?1, ?2, ?3, ?4, ?5, ?6, 'pending', ?7)
        "#,
        params![
            msg.name.trim(),
            msg.email.trim(),
            msg.phone.as_deref().map(str::trim).filter(|s| !s.is_empty()),
            msg.message.trim(),
            msg.visit_date,
            msg.visit_time,
            Utc::now().naive_utc(),
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert contact failed: {e}")))?;

    Ok(())
}
