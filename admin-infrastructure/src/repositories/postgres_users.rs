use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use admin_domain::{AdminUser, AdminUserRepository, ModelSchema, PrimaryKey};

use super::postgres_records::quote_ident;
use crate::models::permission_action_value;

/// Loads administrators from the user model's table and resolves grants
/// through `role_user` and `role_permission`.
pub struct PgAdminUserRepository {
    pool: PgPool,
    select_user: String,
    pk_column: String,
}

impl PgAdminUserRepository {
    pub fn new(pool: PgPool, user_model: &ModelSchema) -> Result<Self> {
        for required in ["username", "password", "is_superuser", "is_active"] {
            if !user_model.has_field(required) {
                return Err(anyhow!(
                    "user model {} has no '{}' field",
                    user_model.name,
                    required
                ));
            }
        }
        let pk_column = quote_ident(&user_model.pk)?;
        let select_user = format!(
            "SELECT {pk} AS id, username, password, is_superuser, is_active FROM {table}",
            pk = pk_column,
            table = quote_ident(&user_model.table)?
        );
        Ok(Self {
            pool,
            select_user,
            pk_column,
        })
    }
}

fn map_user(row: &PgRow) -> Result<AdminUser> {
    Ok(AdminUser {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password")?,
        is_superuser: row.try_get("is_superuser")?,
        is_active: row.try_get("is_active")?,
    })
}

#[async_trait]
impl AdminUserRepository for PgAdminUserRepository {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminUser>> {
        let sql = format!("{} WHERE username = $1", self.select_user);
        let row = sqlx::query(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(map_user).transpose()
    }

    async fn find_by_id(&self, id: PrimaryKey) -> anyhow::Result<Option<AdminUser>> {
        let sql = format!("{} WHERE {} = $1", self.select_user, self.pk_column);
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(map_user).transpose()
    }

    async fn has_permission(
        &self,
        user_id: PrimaryKey,
        model: &str,
        action: &str,
    ) -> anyhow::Result<bool> {
        let Some(action) = permission_action_value(action) else {
            return Ok(false);
        };
        let granted = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(
                SELECT 1
                FROM "role_user" ru
                JOIN "role_permission" rp ON rp."role_id" = ru."role_id"
                JOIN "permission" p ON p."id" = rp."permission_id"
                WHERE ru."user_id" = $1 AND p."model" = $2 AND p."action" = $3
            )"#,
        )
        .bind(user_id)
        .bind(model)
        .bind(action as i16)
        .fetch_one(&self.pool)
        .await?;
        Ok(granted)
    }
}
