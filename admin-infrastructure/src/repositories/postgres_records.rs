use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{debug, info};

use admin_domain::{ColumnDef, ColumnKind, ModelSchema, PrimaryKey, Record, RecordRepository, SelectOption};

pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Double-quotes an identifier; only `[A-Za-z0-9_]` names are accepted.
pub fn quote_ident(name: &str) -> Result<String> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if !valid {
        return Err(anyhow!("invalid sql identifier '{}'", name));
    }
    Ok(format!("\"{}\"", name))
}

fn column_type(column: &ColumnDef) -> &'static str {
    match &column.kind {
        ColumnKind::SmallInt | ColumnKind::IntEnum { .. } => "SMALLINT",
        ColumnKind::Int => "INTEGER",
        ColumnKind::BigInt | ColumnKind::ForeignKey { .. } => "BIGINT",
        ColumnKind::Boolean => "BOOLEAN",
        ColumnKind::Decimal => "NUMERIC",
        ColumnKind::Float => "DOUBLE PRECISION",
        ColumnKind::Char { .. } | ColumnKind::CharEnum { .. } => "VARCHAR",
        ColumnKind::Text => "TEXT",
        ColumnKind::Json => "JSONB",
        ColumnKind::Datetime => "TIMESTAMPTZ",
        ColumnKind::Date => "DATE",
        ColumnKind::ManyToMany { .. } => "",
    }
}

fn column_sql(column: &ColumnDef) -> Result<Option<String>> {
    let Some(name) = column.column_name() else {
        return Ok(None);
    };
    let mut sql = format!("{} {}", quote_ident(&name)?, column_type(column));
    if let ColumnKind::Char { max_length } = column.kind {
        sql.push_str(&format!("({})", max_length));
    }
    if column.nullable {
        sql.push_str(" NULL");
    } else {
        sql.push_str(" NOT NULL");
        match column.kind {
            ColumnKind::Boolean => sql.push_str(" DEFAULT FALSE"),
            ColumnKind::Datetime if column.readonly => sql.push_str(" DEFAULT now()"),
            _ => {}
        }
    }
    Ok(Some(sql))
}

/// `CREATE TABLE IF NOT EXISTS` for the model plus its many-to-many join tables.
pub fn create_table_statements(model: &ModelSchema, models: &[ModelSchema]) -> Result<Vec<String>> {
    let mut columns = vec![format!("{} BIGSERIAL PRIMARY KEY", quote_ident(&model.pk)?)];
    for column in &model.columns {
        if let Some(sql) = column_sql(column)? {
            columns.push(sql);
        }
    }
    let mut statements = vec![format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(&model.table)?,
        columns.join(", ")
    )];

    for column in &model.columns {
        let ColumnKind::ManyToMany { model: related, through } = &column.kind else {
            continue;
        };
        let related = models
            .iter()
            .find(|candidate| &candidate.name == related)
            .ok_or_else(|| anyhow!("{} references unknown model {}", model.name, related))?;
        statements.push(format!(
            "CREATE TABLE IF NOT EXISTS {through} ({left} BIGINT NOT NULL REFERENCES {left_table}({left_pk}) ON DELETE CASCADE, {right} BIGINT NOT NULL REFERENCES {right_table}({right_pk}) ON DELETE CASCADE)",
            through = quote_ident(through)?,
            left = quote_ident(&format!("{}_id", model.table))?,
            left_table = quote_ident(&model.table)?,
            left_pk = quote_ident(&model.pk)?,
            right = quote_ident(&format!("{}_id", related.table))?,
            right_table = quote_ident(&related.table)?,
            right_pk = quote_ident(&related.pk)?,
        ));
    }
    Ok(statements)
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn ensure_schema(&self, models: &[ModelSchema]) -> anyhow::Result<()> {
        let mut tables = Vec::new();
        let mut joins = Vec::new();
        for model in models {
            let mut statements = create_table_statements(model, models)?.into_iter();
            tables.extend(statements.next());
            joins.extend(statements);
        }
        for statement in tables.iter().chain(joins.iter()) {
            debug!(%statement, "ensure schema");
            sqlx::query(statement).execute(&self.pool).await?;
        }
        info!(models = models.len(), "database schema ensured");
        Ok(())
    }

    async fn fetch_by_keys(
        &self,
        model: &ModelSchema,
        columns: &[String],
        keys: &[PrimaryKey],
    ) -> anyhow::Result<Vec<Record>> {
        if keys.is_empty() || columns.is_empty() {
            return Ok(Vec::new());
        }
        let projection = columns
            .iter()
            .map(|column| quote_ident(column))
            .collect::<Result<Vec<_>>>()?
            .join(", ");
        let sql = format!(
            "SELECT row_to_json(t) AS data FROM (SELECT {} FROM {} WHERE {} = ANY($1)) t",
            projection,
            quote_ident(&model.table)?,
            quote_ident(&model.pk)?
        );
        let rows = sqlx::query(&sql).bind(keys).fetch_all(&self.pool).await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let data: serde_json::Value = row.try_get("data")?;
            if let serde_json::Value::Object(record) = data {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn delete_by_keys(&self, model: &ModelSchema, keys: &[PrimaryKey]) -> anyhow::Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let sql = format!(
            "DELETE FROM {} WHERE {} = ANY($1)",
            quote_ident(&model.table)?,
            quote_ident(&model.pk)?
        );
        let result = sqlx::query(&sql).bind(keys).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn list_options(&self, model: &ModelSchema) -> anyhow::Result<Vec<SelectOption>> {
        let sql = format!(
            "SELECT {pk} AS value, {label}::text AS text FROM {table} ORDER BY {pk}",
            pk = quote_ident(&model.pk)?,
            label = quote_ident(&model.display_field)?,
            table = quote_ident(&model.table)?
        );
        let rows = sqlx::query_as::<_, (i64, Option<String>)>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(value, text)| SelectOption::new(value, text.unwrap_or_else(|| value.to_string())))
            .collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
