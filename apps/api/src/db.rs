use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            external_id TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            name TEXT,
            industry TEXT,
            experience INTEGER,
            skills TEXT[] NOT NULL DEFAULT '{}',
            bio TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "industry_insights",
        r#"
        CREATE TABLE IF NOT EXISTS industry_insights (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            industry TEXT NOT NULL UNIQUE,
            salary_ranges JSONB NOT NULL,
            growth_rate DOUBLE PRECISION NOT NULL,
            demand_level TEXT NOT NULL,
            top_skills TEXT[] NOT NULL DEFAULT '{}',
            market_outlook TEXT NOT NULL,
            key_trends TEXT[] NOT NULL DEFAULT '{}',
            recommended_skills TEXT[] NOT NULL DEFAULT '{}',
            last_updated TIMESTAMPTZ NOT NULL DEFAULT now(),
            next_update TIMESTAMPTZ NOT NULL
        )
        "#,
    ),
    (
        "cover_letters",
        r#"
        CREATE TABLE IF NOT EXISTS cover_letters (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            job_description TEXT,
            company_name TEXT NOT NULL,
            job_title TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'draft',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "cover_letters_user_idx",
        "CREATE INDEX IF NOT EXISTS idx_cover_letters_user_id ON cover_letters(user_id)",
    ),
    (
        "resumes",
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "assessments",
        r#"
        CREATE TABLE IF NOT EXISTS assessments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            quiz_score DOUBLE PRECISION NOT NULL,
            questions JSONB NOT NULL,
            category TEXT NOT NULL,
            improvement_tip TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    ),
    (
        "assessments_user_idx",
        "CREATE INDEX IF NOT EXISTS idx_assessments_user_id ON assessments(user_id)",
    ),
];

/// Creates the service's tables and indexes if they do not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    for (name, statement) in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to apply schema step '{name}'"))?;
    }

    info!("Database schema is up to date");
    Ok(())
}
