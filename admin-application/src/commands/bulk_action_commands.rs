use std::collections::HashMap;

use tracing::{error, info};

use admin_domain::{AdminUser, BulkActionKind, BulkActionRequest, BulkOutcome, PrimaryKey, Record};

use crate::auth::ensure_permission;
use crate::{AppError, AppState, RegisteredModel};

/// Resolves `resource`, validates the action and runs it over `request.pk_list`.
///
/// Keys without a matching record are left out of the result.
pub async fn run_bulk_action(
    state: &AppState,
    resource: &str,
    request: BulkActionRequest,
    caller: Option<&AdminUser>,
) -> Result<BulkOutcome, AppError> {
    let result = dispatch(state, resource, request, caller).await;
    match &result {
        Ok(BulkOutcome::Records { data }) => state.metrics.record_bulk(data.len() as u64),
        Ok(BulkOutcome::Deleted { deleted }) => state.metrics.record_bulk(*deleted),
        Err(_) => state.metrics.record_bulk_error(),
    }
    result
}

async fn dispatch(
    state: &AppState,
    resource: &str,
    request: BulkActionRequest,
    caller: Option<&AdminUser>,
) -> Result<BulkOutcome, AppError> {
    let model = state.admin.registry.resolve(resource)?;
    let kind = model.resolve_action(&request.action_name)?;
    let keys = request.unique_keys();
    if keys.is_empty() {
        return Err(AppError::EmptyKeyList);
    }
    ensure_permission(state, caller, model.name(), kind.required_permission()).await?;

    match kind {
        BulkActionKind::TestBulk => {
            let data = fetch_records(state, model, &keys).await?;
            Ok(BulkOutcome::Records { data })
        }
        BulkActionKind::Delete => {
            let deleted = state
                .record_repo
                .delete_by_keys(&model.schema, &keys)
                .await
                .map_err(|err| {
                    error!("bulk delete on {} failed: {}", model.name(), err);
                    AppError::Internal(err)
                })?;
            info!(
                resource = model.name(),
                requested = keys.len(),
                deleted,
                user = caller.map(|user| user.username.as_str()).unwrap_or("<anonymous>"),
                "bulk delete executed"
            );
            Ok(BulkOutcome::Deleted { deleted })
        }
    }
}

/// Matching records in `keys` order, projected onto the model's visible fields.
pub async fn fetch_records(
    state: &AppState,
    model: &RegisteredModel,
    keys: &[PrimaryKey],
) -> Result<Vec<Record>, AppError> {
    let pk = model.schema.pk.clone();
    let mut columns = model.visible_columns();
    if !columns.contains(&pk) {
        columns.push(pk.clone());
    }

    let mut records = state
        .record_repo
        .fetch_by_keys(&model.schema, &columns, keys)
        .await
        .map_err(|err| {
            error!("failed to fetch {} records: {}", model.name(), err);
            AppError::Internal(err)
        })?;

    let position = keys
        .iter()
        .enumerate()
        .map(|(idx, key)| (*key, idx))
        .collect::<HashMap<_, _>>();
    records.sort_by_key(|record| {
        record
            .get(&pk)
            .and_then(|value| value.as_i64())
            .and_then(|key| position.get(&key).copied())
            .unwrap_or(usize::MAX)
    });

    Ok(records
        .into_iter()
        .map(|record| model.serialize(record))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_state, seed_products, seed_users};
    use admin_domain::BulkIn;
    use serde_json::json;

    fn request(action: &str, keys: &[PrimaryKey]) -> BulkActionRequest {
        BulkActionRequest::new(
            action,
            BulkIn {
                pk_list: keys.to_vec(),
            },
        )
    }

    #[tokio::test]
    async fn test_bulk_returns_only_existing_records() {
        let (state, store) = demo_state(false).await;
        seed_products(&store, &[1, 3]).await;

        let outcome = run_bulk_action(&state, "Product", request("test_bulk", &[1, 2, 3]), None)
            .await
            .expect("bulk");
        let BulkOutcome::Records { data } = outcome else {
            panic!("expected records");
        };
        let ids = data
            .iter()
            .map(|record| record.get("id").cloned())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![Some(json!(1)), Some(json!(3))]);
    }

    #[tokio::test]
    async fn records_follow_request_order() {
        let (state, store) = demo_state(false).await;
        seed_products(&store, &[1, 2, 3]).await;

        let outcome = run_bulk_action(&state, "Product", request("test_bulk", &[3, 1, 3]), None)
            .await
            .expect("bulk");
        let BulkOutcome::Records { data } = outcome else {
            panic!("expected records");
        };
        let ids = data
            .iter()
            .filter_map(|record| record.get("id").and_then(|value| value.as_i64()))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1]);
    }

    #[tokio::test]
    async fn rejects_unknown_action_empty_keys_and_unknown_model() {
        let (state, _) = demo_state(false).await;

        let err = run_bulk_action(&state, "Product", request("unknown_action", &[1]), None)
            .await
            .expect_err("unknown action");
        assert!(matches!(err, AppError::UnknownAction { .. }));

        let err = run_bulk_action(&state, "Product", request("test_bulk", &[]), None)
            .await
            .expect_err("empty keys");
        assert!(matches!(err, AppError::EmptyKeyList));

        let err = run_bulk_action(&state, "Widget", request("test_bulk", &[1]), None)
            .await
            .expect_err("unresolved");
        assert!(matches!(err, AppError::UnresolvedModel(_)));
        assert!(state.metrics.render_prometheus().contains("admin_bulk_errors_total 3\n"));
    }

    #[tokio::test]
    async fn delete_is_gated_by_action_overrides() {
        let (state, _) = demo_state(false).await;
        let err = run_bulk_action(&state, "Role", request("delete", &[1]), None)
            .await
            .expect_err("disabled");
        assert!(matches!(err, AppError::ActionDisabled { .. }));
    }

    #[tokio::test]
    async fn delete_removes_matching_records() {
        let (state, store) = demo_state(false).await;
        seed_products(&store, &[1, 2, 3]).await;

        let outcome = run_bulk_action(&state, "Product", request("delete", &[1, 3, 9]), None)
            .await
            .expect("delete");
        assert_eq!(outcome, BulkOutcome::Deleted { deleted: 2 });

        let remaining = run_bulk_action(&state, "Product", request("test_bulk", &[1, 2, 3]), None)
            .await
            .expect("bulk");
        let BulkOutcome::Records { data } = remaining else {
            panic!("expected records");
        };
        assert_eq!(data.len(), 1);
    }

    #[tokio::test]
    async fn excluded_fields_never_serialized() {
        let (state, store) = demo_state(false).await;
        seed_users(&store).await;
        let model = state.admin.registry.resolve("User").expect("user");

        let records = fetch_records(&state, model, &[1, 2]).await.expect("records");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| !record.contains_key("password")));
        assert!(records.iter().all(|record| record.contains_key("username")));
    }

    #[tokio::test]
    async fn permission_enforced_for_destructive_actions() {
        let (state, store) = demo_state(true).await;
        let (_, staff) = seed_users(&store).await;
        seed_products(&store, &[1]).await;

        let err = run_bulk_action(&state, "Product", request("delete", &[1]), Some(&staff))
            .await
            .expect_err("forbidden");
        assert!(matches!(err, AppError::Forbidden(_)));

        run_bulk_action(&state, "Product", request("test_bulk", &[1]), Some(&staff))
            .await
            .expect("read allowed");
    }
}
