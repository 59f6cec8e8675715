use std::collections::{HashMap, HashSet};

use admin_domain::{
    BulkActionKind, ColumnDef, MenuEntry, ModelSchema, NavLink, Record, ResourceOptions,
    SiteConfig,
};
use tracing::debug;

use crate::{AppError, ConfigurationError};

/// A model reachable from the navigation menu, with the link's display options.
#[derive(Debug, Clone)]
pub struct RegisteredModel {
    pub schema: ModelSchema,
    pub link: NavLink,
}

impl RegisteredModel {
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn options(&self) -> &ResourceOptions {
        &self.link.options
    }

    pub fn pk_visible(&self) -> bool {
        !self.options().is_excluded(&self.schema.pk)
    }

    /// A whitelist hit on the field name or the raw column includes the field;
    /// an exclusion of either hides it.
    pub fn column_visible(&self, column: &ColumnDef) -> bool {
        let options = self.options();
        let raw = column.column_name().filter(|raw| *raw != column.name);
        let names = std::iter::once(column.name.as_str()).chain(raw.as_deref());

        let mut included = options.included_fields.is_none();
        for name in names {
            if options.excluded_fields.contains(name) {
                return false;
            }
            if let Some(whitelist) = &options.included_fields {
                included |= whitelist.contains(name);
            }
        }
        included
    }

    /// Stored columns that may appear in a serialized record.
    pub fn visible_columns(&self) -> Vec<String> {
        let mut columns = Vec::new();
        if self.pk_visible() {
            columns.push(self.schema.pk.clone());
        }
        columns.extend(
            self.schema
                .columns
                .iter()
                .filter(|column| self.column_visible(column))
                .filter_map(ColumnDef::column_name),
        );
        columns
    }

    /// Checks the action is declared for this model and not switched off.
    pub fn resolve_action(&self, action: &str) -> Result<BulkActionKind, AppError> {
        let options = self.options();
        let kind = options
            .declared_action(action)
            .and_then(|decl| BulkActionKind::parse(&decl.value))
            .ok_or_else(|| AppError::UnknownAction {
                resource: self.name().to_string(),
                action: action.to_string(),
            })?;
        if !options.action_enabled(kind.as_str()) {
            return Err(AppError::ActionDisabled {
                resource: self.name().to_string(),
                action: action.to_string(),
            });
        }
        Ok(kind)
    }

    /// Drops every key that is not a visible stored column.
    pub fn serialize(&self, mut record: Record) -> Record {
        let visible: HashSet<String> = self.visible_columns().into_iter().collect();
        record.retain(|key, _| visible.contains(key));
        record
    }
}

/// Resource name -> model, built once from the site menus.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    schemas: HashMap<String, ModelSchema>,
    models: HashMap<String, RegisteredModel>,
}

impl ModelRegistry {
    pub fn build(site: &SiteConfig, schemas: &[ModelSchema]) -> Result<Self, ConfigurationError> {
        let mut by_name = HashMap::new();
        for schema in schemas {
            if by_name.insert(schema.name.clone(), schema.clone()).is_some() {
                return Err(ConfigurationError::DuplicateModel(schema.name.clone()));
            }
        }

        let mut seen_urls = HashSet::new();
        let mut models = HashMap::new();
        for (index, entry) in site.menus.iter().enumerate() {
            if entry.name().trim().is_empty() {
                return Err(ConfigurationError::EmptyMenuName(index));
            }
            let MenuEntry::Link(link) = entry else {
                continue;
            };
            let path = link.path().trim();
            if path.is_empty() {
                return Err(ConfigurationError::EmptyUrl(link.name.clone()));
            }
            if !seen_urls.insert(path.to_string()) {
                return Err(ConfigurationError::DuplicateMenuUrl(path.to_string()));
            }

            let Some(schema) = link.resource_segment().and_then(|name| by_name.get(name)) else {
                continue;
            };
            validate_options(link, schema)?;
            debug!(resource = %schema.name, url = %link.url, "registered admin resource");
            models.insert(
                schema.name.clone(),
                RegisteredModel {
                    schema: schema.clone(),
                    link: link.clone(),
                },
            );
        }

        Ok(Self {
            schemas: by_name,
            models,
        })
    }

    pub fn resolve(&self, resource: &str) -> Result<&RegisteredModel, AppError> {
        self.models
            .get(resource)
            .ok_or_else(|| AppError::UnresolvedModel(resource.to_string()))
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.models.contains_key(resource)
    }

    /// Any known schema, registered in the menu or not.
    pub fn schema(&self, name: &str) -> Option<&ModelSchema> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn validate_options(link: &NavLink, schema: &ModelSchema) -> Result<(), ConfigurationError> {
    if let Some(field) = link
        .options
        .referenced_fields()
        .find(|field| !schema.has_field(field))
    {
        return Err(ConfigurationError::UnknownField {
            menu: link.name.clone(),
            field: field.to_string(),
        });
    }
    if let Some(decl) = link
        .options
        .bulk_actions
        .iter()
        .find(|decl| BulkActionKind::parse(&decl.value).is_none())
    {
        return Err(ConfigurationError::UnsupportedBulkAction {
            menu: link.name.clone(),
            action: decl.value.clone(),
        });
    }
    Ok(())
}
