use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

/// Ensure the posts table exists.
///
/// Created lazily at service startup to unblock environments where
/// migrations have not been applied yet (fresh developer machines, CI).
pub async fn ensure_posts_table(pool: &PgPool) -> Result<()> {
    info!("Ensuring posts table exists");

    sqlx::query(POSTS_TABLE).execute(pool).await?;

    Ok(())
}

const POSTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name TEXT NOT NULL,
    prompt TEXT NOT NULL,
    photo TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;
