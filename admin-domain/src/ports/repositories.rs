use async_trait::async_trait;

use crate::entities::{AdminUser, ModelSchema, SelectOption};
use crate::value_objects::{PrimaryKey, Record};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Creates missing tables (and join tables) for the given models.
    async fn ensure_schema(&self, models: &[ModelSchema]) -> anyhow::Result<()>;
    /// Rows whose primary key is in `keys`, projected onto `columns`.
    /// Keys without a row are skipped.
    async fn fetch_by_keys(
        &self,
        model: &ModelSchema,
        columns: &[String],
        keys: &[PrimaryKey],
    ) -> anyhow::Result<Vec<Record>>;
    async fn delete_by_keys(&self, model: &ModelSchema, keys: &[PrimaryKey]) -> anyhow::Result<u64>;
    /// `{pk, display_field}` pairs used to fill relation selects.
    async fn list_options(&self, model: &ModelSchema) -> anyhow::Result<Vec<SelectOption>>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait AdminUserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminUser>>;
    async fn find_by_id(&self, id: PrimaryKey) -> anyhow::Result<Option<AdminUser>>;
    /// True when one of the user's roles grants `action` on `model`.
    async fn has_permission(
        &self,
        user_id: PrimaryKey,
        model: &str,
        action: &str,
    ) -> anyhow::Result<bool>;
}
