use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

/// Copy for the about section, editable from the back office.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutContent {
    pub profile_image: String,
    pub my_story: String,
}

impl AboutContent {
    /// Shown until the admin saves their own copy.
    pub fn default_copy() -> Self {
        Self {
            profile_image: String::new(),
            my_story: "Com mais de 8 anos de experiência no mercado imobiliário, construí minha \
                       carreira com base na confiança e no atendimento personalizado.\n\n\
                       Hoje, sou especialista em lançamentos exclusivos, com foco em proporcionar \
                       uma experiência única para cada cliente."
                .to_string(),
        }
    }

    /// Story paragraphs are separated by blank lines.
    pub fn story_paragraphs(&self) -> Vec<&str> {
        self.my_story
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

pub fn get_about(conn: &Connection) -> Result<AboutContent, ServerError> {
    let row = conn
        .query_row(
            "select profile_image, my_story from about_me where id = 1",
            [],
            |r| {
                Ok(AboutContent {
                    profile_image: r.get(0)?,
                    my_story: r.get(1)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select about failed: {e}")))?;

    Ok(row.unwrap_or_else(AboutContent::default_copy))
}

pub fn save_about(conn: &Connection, content: &AboutContent) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into about_me (id, profile_image, my_story)
        values (1, ?1, ?2)
        on conflict(id) do update set
            profile_image = excluded.profile_image,
            my_story = excluded.my_story
        "#,
        params![content.profile_image, content.my_story],
    )
    .map_err(|e| ServerError::DbError(format!("save about failed: {e}")))?;
    Ok(())
}

/// The hero background image, when the admin has configured one.
pub fn get_hero_image(conn: &Connection) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select principal_img_site from site_media where id = 1",
        [],
        |r| r.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select site media failed: {e}")))
}
