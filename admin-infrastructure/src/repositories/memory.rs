use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use admin_domain::{
    AdminUser, AdminUserRepository, ModelSchema, PrimaryKey, Record, RecordRepository,
    SelectOption,
};

/// Process-local record and account store keyed by model name.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<HashMap<String, BTreeMap<PrimaryKey, Record>>>,
    users: RwLock<BTreeMap<PrimaryKey, AdminUser>>,
    grants: RwLock<HashSet<(PrimaryKey, String, String)>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its `id`, replacing any previous row.
    pub async fn insert(&self, model: &str, record: Value) -> anyhow::Result<PrimaryKey> {
        let Value::Object(record) = record else {
            return Err(anyhow::anyhow!("{} record must be an object", model));
        };
        let key = record
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| anyhow::anyhow!("{} record has no integer id", model))?;
        self.tables
            .write()
            .await
            .entry(model.to_string())
            .or_default()
            .insert(key, record);
        Ok(key)
    }

    /// Registers an account and mirrors it as a row of `user_model`.
    pub async fn add_user(&self, user_model: &str, user: AdminUser) -> anyhow::Result<()> {
        self.insert(
            user_model,
            json!({
                "id": user.id,
                "username": user.username,
                "password": user.password_hash,
                "is_active": user.is_active,
                "is_superuser": user.is_superuser,
            }),
        )
        .await?;
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    pub async fn grant(&self, user_id: PrimaryKey, model: &str, action: &str) {
        self.grants
            .write()
            .await
            .insert((user_id, model.to_string(), action.to_string()));
    }
}

#[async_trait]
impl RecordRepository for InMemoryStore {
    async fn ensure_schema(&self, models: &[ModelSchema]) -> anyhow::Result<()> {
        let mut tables = self.tables.write().await;
        for model in models {
            tables.entry(model.name.clone()).or_default();
        }
        Ok(())
    }

    async fn fetch_by_keys(
        &self,
        model: &ModelSchema,
        columns: &[String],
        keys: &[PrimaryKey],
    ) -> anyhow::Result<Vec<Record>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(&model.name) else {
            return Ok(Vec::new());
        };
        Ok(keys
            .iter()
            .filter_map(|key| table.get(key))
            .map(|record| {
                record
                    .iter()
                    .filter(|(column, _)| columns.contains(column))
                    .map(|(column, value)| (column.clone(), value.clone()))
                    .collect()
            })
            .collect())
    }

    async fn delete_by_keys(&self, model: &ModelSchema, keys: &[PrimaryKey]) -> anyhow::Result<u64> {
        let mut tables = self.tables.write().await;
        let Some(table) = tables.get_mut(&model.name) else {
            return Ok(0);
        };
        let unique = keys.iter().collect::<HashSet<_>>();
        Ok(unique
            .into_iter()
            .filter(|key| table.remove(*key).is_some())
            .count() as u64)
    }

    async fn list_options(&self, model: &ModelSchema) -> anyhow::Result<Vec<SelectOption>> {
        let tables = self.tables.read().await;
        let Some(table) = tables.get(&model.name) else {
            return Ok(Vec::new());
        };
        Ok(table
            .iter()
            .map(|(key, record)| {
                let text = match record.get(&model.display_field) {
                    Some(Value::String(text)) => text.clone(),
                    Some(other) => other.to_string(),
                    None => key.to_string(),
                };
                SelectOption::new(*key, text)
            })
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[async_trait]
impl AdminUserRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminUser>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: PrimaryKey) -> anyhow::Result<Option<AdminUser>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn has_permission(
        &self,
        user_id: PrimaryKey,
        model: &str,
        action: &str,
    ) -> anyhow::Result<bool> {
        Ok(self
            .grants
            .read()
            .await
            .contains(&(user_id, model.to_string(), action.to_string())))
    }
}
