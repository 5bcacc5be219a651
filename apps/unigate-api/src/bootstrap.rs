//! Startup bootstrap: optional admin account seeding.
//!
//! When `BOOTSTRAP_ADMIN_EMAIL`/`BOOTSTRAP_ADMIN_PASSWORD` are
//! configured, ensures an ADMIN account exists with that email.
//! Existing accounts are left untouched.

use sqlx::PgPool;
use thiserror::Error;
use unigate_auth::{AuthError, PasswordHasher};
use unigate_db::{CreateUser, User, UserRole};

use crate::config::BootstrapAdmin;

/// Bootstrap errors.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Database failure while seeding.
    #[error("Bootstrap database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure.
    #[error("Bootstrap hashing error: {0}")]
    Hashing(#[from] AuthError),
}

/// Seed the configured admin account if it does not exist.
pub async fn seed_admin(pool: &PgPool, admin: &BootstrapAdmin) -> Result<(), BootstrapError> {
    if let Some(existing) = User::find_by_email(pool, &admin.email).await? {
        tracing::info!(
            user_id = %existing.id,
            email = %admin.email,
            "Bootstrap admin already exists, skipping seed"
        );
        return Ok(());
    }

    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash_password(&admin.password)?;

    let user = User::create(
        pool,
        &CreateUser {
            name: admin.name.clone(),
            email: admin.email.clone(),
            password_hash,
            role: UserRole::Admin,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, email = %admin.email, "Seeded bootstrap admin");
    Ok(())
}
