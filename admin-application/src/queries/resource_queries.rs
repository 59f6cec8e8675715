use std::collections::BTreeMap;

use tracing::error;

use admin_domain::{
    title_case, AdminUser, ColumnDef, ColumnKind, DisplayWidget, FieldView, ResourceView,
    SelectOption,
};

use crate::auth::ensure_permission;
use crate::{AppError, AppState, RegisteredModel};

/// Field widgets, labels and options the dashboard needs to render `resource`.
pub async fn describe_resource(
    state: &AppState,
    resource: &str,
    caller: Option<&AdminUser>,
) -> Result<ResourceView, AppError> {
    let model = state.admin.registry.resolve(resource)?;
    ensure_permission(state, caller, model.name(), "read").await?;

    let options = model.options();
    let mut fields = Vec::new();
    if model.pk_visible() {
        fields.push(FieldView {
            name: model.schema.pk.clone(),
            label: title_case(&model.schema.pk),
            widget: options
                .field_types
                .get(&model.schema.pk)
                .copied()
                .unwrap_or(DisplayWidget::Number),
            required: true,
            sortable: options.sort_fields.contains(&model.schema.pk),
            disabled: true,
            multiple: false,
            options: Vec::new(),
            cols: options.layout.get(&model.schema.pk).copied(),
        });
    }

    for column in model
        .schema
        .columns
        .iter()
        .filter(|column| model.column_visible(column))
    {
        fields.push(describe_field(state, model, column).await?);
    }

    Ok(ResourceView {
        title: model.schema.title(),
        pk: model.schema.pk.clone(),
        fields,
        search_fields: options.search_fields.clone(),
        actions: options
            .action_overrides
            .iter()
            .map(|(action, enabled)| (action.clone(), *enabled))
            .collect::<BTreeMap<_, _>>(),
    })
}

async fn describe_field(
    state: &AppState,
    model: &RegisteredModel,
    column: &ColumnDef,
) -> Result<FieldView, AppError> {
    let options = model.options();
    let name = column.column_name().unwrap_or_else(|| column.name.clone());
    let raw_id = matches!(column.kind, ColumnKind::ForeignKey { .. })
        && (options.raw_id_fields.contains(&column.name) || options.raw_id_fields.contains(&name));
    let widget = options
        .field_types
        .get(&column.name)
        .or_else(|| options.field_types.get(&name))
        .copied()
        .unwrap_or_else(|| {
            if raw_id {
                DisplayWidget::Number
            } else {
                column.kind.default_widget()
            }
        });

    // Raw id foreign keys are typed in by hand; the related table is never read.
    let choices = match &column.kind {
        ColumnKind::ForeignKey { .. } if raw_id => Vec::new(),
        ColumnKind::ForeignKey { model: related } | ColumnKind::ManyToMany { model: related, .. } => {
            related_options(state, related).await?
        }
        kind => kind.choices().to_vec(),
    };

    Ok(FieldView {
        label: column.label(),
        widget,
        required: !column.nullable && !column.readonly && !column.kind.is_many_to_many(),
        sortable: options.sort_fields.contains(&column.name) || options.sort_fields.contains(&name),
        disabled: column.readonly,
        multiple: column.kind.is_many_to_many(),
        options: if widget.has_choices() || widget == DisplayWidget::Tree {
            choices
        } else {
            Vec::new()
        },
        cols: options
            .layout
            .get(&column.name)
            .or_else(|| options.layout.get(&name))
            .copied(),
        name,
    })
}

async fn related_options(state: &AppState, related: &str) -> Result<Vec<SelectOption>, AppError> {
    let Some(schema) = state.admin.registry.schema(related) else {
        return Ok(Vec::new());
    };
    state.record_repo.list_options(schema).await.map_err(|err| {
        error!("failed to load {} options: {}", related, err);
        AppError::Internal(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_state, seed_categories, seed_users};
    use admin_domain::{ModelSchema, NavLink, ResourceOptions};
    use serde_json::json;

    fn field<'a>(view: &'a ResourceView, name: &str) -> &'a FieldView {
        view.fields
            .iter()
            .find(|field| field.name == name)
            .unwrap_or_else(|| panic!("missing field {name}"))
    }

    #[tokio::test]
    async fn widget_overrides_win_over_column_kind() {
        let (state, _) = demo_state(false).await;
        let view = describe_resource(&state, "Product", None).await.expect("view");

        assert_eq!(view.title, "Product");
        assert_eq!(field(&view, "id").label, "Id");
        assert!(field(&view, "id").required);
        assert_eq!(field(&view, "type").widget, DisplayWidget::Radiolist);
        assert!(!field(&view, "type").options.is_empty());
        assert_eq!(field(&view, "image").widget, DisplayWidget::Link);
        assert_eq!(field(&view, "body").widget, DisplayWidget::Textarea);
        assert_eq!(field(&view, "name").cols, Some(6));
        assert_eq!(view.search_fields, vec!["type".to_string()]);
    }

    #[tokio::test]
    async fn relations_expose_related_options() {
        let (state, store) = demo_state(false).await;
        seed_categories(&store).await;
        let view = describe_resource(&state, "Product", None).await.expect("view");

        let categories = field(&view, "categories");
        assert_eq!(categories.widget, DisplayWidget::Tree);
        assert!(categories.multiple);
        assert_eq!(categories.options[0].value, json!(1));
        assert_eq!(categories.options[0].text, "Books");
    }

    #[tokio::test]
    async fn excluded_fields_and_overrides_are_reported() {
        let (state, store) = demo_state(false).await;
        seed_users(&store).await;

        let user = describe_resource(&state, "User", None).await.expect("user");
        assert!(user.fields.iter().all(|field| field.name != "password"));

        let role = describe_resource(&state, "Role", None).await.expect("role");
        assert_eq!(role.actions.get("delete"), Some(&false));
        let rendered = serde_json::to_value(&role).expect("json");
        assert_eq!(rendered["_actions"], json!({"delete": false}));
    }

    #[tokio::test]
    async fn raw_id_foreign_keys_skip_related_options() {
        let (state, store) = demo_state(false).await;
        seed_categories(&store).await;
        let category = ColumnDef::new(
            "category",
            ColumnKind::ForeignKey {
                model: "Category".into(),
            },
        );
        let model = |options: ResourceOptions| RegisteredModel {
            schema: ModelSchema::new("Article", "article").column(category.clone()),
            link: NavLink::new("Article", "/rest/Article").options(options),
        };

        let select = describe_field(&state, &model(ResourceOptions::default()), &category)
            .await
            .expect("select");
        assert_eq!(select.name, "category_id");
        assert_eq!(select.widget, DisplayWidget::Select);
        assert_eq!(select.options.len(), 2);

        for listed in ["category", "category_id"] {
            let options = ResourceOptions::default().raw_id([listed]);
            let raw = describe_field(&state, &model(options), &category)
                .await
                .expect("raw id");
            assert_eq!(raw.name, "category_id");
            assert_eq!(raw.widget, DisplayWidget::Number);
            assert!(raw.options.is_empty());
        }
    }
}
