// Navigation menu entities

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::value_objects::DisplayWidget;

/// A bulk action button offered on a resource list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkActionDecl {
    pub value: String,
    pub label: String,
}

impl BulkActionDecl {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Links that declare no bulk actions still offer bulk deletion.
pub fn default_bulk_actions() -> Vec<BulkActionDecl> {
    vec![BulkActionDecl::new("delete", "delete_all")]
}

/// Per-resource display and behaviour hints attached to a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOptions {
    #[serde(default)]
    pub search_fields: Vec<String>,
    #[serde(default)]
    pub sort_fields: Vec<String>,
    #[serde(default)]
    pub field_types: BTreeMap<String, DisplayWidget>,
    #[serde(default = "default_bulk_actions")]
    pub bulk_actions: Vec<BulkActionDecl>,
    #[serde(default)]
    pub excluded_fields: BTreeSet<String>,
    /// Whitelist; when set, every other field is hidden.
    #[serde(default)]
    pub included_fields: Option<BTreeSet<String>>,
    /// Foreign keys edited as a plain id; related rows are not loaded as options.
    #[serde(default)]
    pub raw_id_fields: BTreeSet<String>,
    /// Field -> column span in the edit form.
    #[serde(default)]
    pub layout: BTreeMap<String, u8>,
    #[serde(default)]
    pub action_overrides: BTreeMap<String, bool>,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            sort_fields: Vec::new(),
            field_types: BTreeMap::new(),
            bulk_actions: default_bulk_actions(),
            excluded_fields: BTreeSet::new(),
            included_fields: None,
            raw_id_fields: BTreeSet::new(),
            layout: BTreeMap::new(),
            action_overrides: BTreeMap::new(),
        }
    }
}

impl ResourceOptions {
    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn sort_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn field_type(mut self, field: impl Into<String>, widget: DisplayWidget) -> Self {
        self.field_types.insert(field.into(), widget);
        self
    }

    pub fn bulk_actions(mut self, actions: Vec<BulkActionDecl>) -> Self {
        self.bulk_actions = actions;
        self
    }

    pub fn exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn raw_id<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw_id_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn cols(mut self, field: impl Into<String>, span: u8) -> Self {
        self.layout.insert(field.into(), span);
        self
    }

    pub fn action(mut self, action: impl Into<String>, enabled: bool) -> Self {
        self.action_overrides.insert(action.into(), enabled);
        self
    }

    pub fn is_excluded(&self, field: &str) -> bool {
        if let Some(included) = &self.included_fields {
            if !included.contains(field) {
                return true;
            }
        }
        self.excluded_fields.contains(field)
    }

    pub fn action_enabled(&self, action: &str) -> bool {
        self.action_overrides.get(action).copied().unwrap_or(true)
    }

    pub fn declared_action(&self, value: &str) -> Option<&BulkActionDecl> {
        self.bulk_actions.iter().find(|decl| decl.value == value)
    }

    /// Every field name the options refer to, for validation.
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        self.search_fields
            .iter()
            .chain(self.sort_fields.iter())
            .chain(self.field_types.keys())
            .chain(self.excluded_fields.iter())
            .chain(self.included_fields.iter().flatten())
            .chain(self.raw_id_fields.iter())
            .chain(self.layout.keys())
            .map(String::as_str)
    }
}

/// A clickable navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Opens outside the admin shell; never resolved as a resource.
    #[serde(default)]
    pub external: bool,
    #[serde(default)]
    pub options: ResourceOptions,
}

impl NavLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: None,
            external: false,
            options: ResourceOptions::default(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    pub fn options(mut self, options: ResourceOptions) -> Self {
        self.options = options;
        self
    }

    /// The url without its query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    /// Last path segment, which names the resource served by this link.
    pub fn resource_segment(&self) -> Option<&str> {
        if self.external {
            return None;
        }
        self.path()
            .rsplit('/')
            .next()
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

/// One node of the navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Section title; not navigable.
    Header { name: String },
    Link(NavLink),
}

impl MenuEntry {
    pub fn header(name: impl Into<String>) -> Self {
        MenuEntry::Header { name: name.into() }
    }

    pub fn link(link: NavLink) -> Self {
        MenuEntry::Link(link)
    }

    pub fn name(&self) -> &str {
        match self {
            MenuEntry::Header { name } => name,
            MenuEntry::Link(link) => &link.name,
        }
    }

    pub fn as_link(&self) -> Option<&NavLink> {
        match self {
            MenuEntry::Header { .. } => None,
            MenuEntry::Link(link) => Some(link),
        }
    }
}
