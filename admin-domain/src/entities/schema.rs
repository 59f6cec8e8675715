// Model schema entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::DisplayWidget;

/// A `{value, text}` pair offered by select-like widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: Value,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: impl Into<Value>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnKind {
    SmallInt,
    Int,
    BigInt,
    Boolean,
    Decimal,
    Float,
    Char { max_length: u32 },
    Text,
    Json,
    Datetime,
    Date,
    CharEnum { choices: Vec<SelectOption> },
    IntEnum { choices: Vec<SelectOption> },
    /// Stored as `<name>_id`.
    ForeignKey { model: String },
    /// Not stored on the table; lives in `through`.
    ManyToMany { model: String, through: String },
}

impl ColumnKind {
    pub fn default_widget(&self) -> DisplayWidget {
        match self {
            ColumnKind::SmallInt
            | ColumnKind::Int
            | ColumnKind::BigInt
            | ColumnKind::Decimal
            | ColumnKind::Float => DisplayWidget::Number,
            ColumnKind::Boolean => DisplayWidget::Checkbox,
            ColumnKind::Datetime => DisplayWidget::Datetime,
            ColumnKind::Date => DisplayWidget::Date,
            ColumnKind::CharEnum { .. } | ColumnKind::IntEnum { .. } => DisplayWidget::Select,
            ColumnKind::Text => DisplayWidget::Textarea,
            ColumnKind::Json => DisplayWidget::Json,
            ColumnKind::ForeignKey { .. } => DisplayWidget::Select,
            ColumnKind::ManyToMany { .. } => DisplayWidget::Tree,
            ColumnKind::Char { .. } => DisplayWidget::Text,
        }
    }

    pub fn choices(&self) -> &[SelectOption] {
        match self {
            ColumnKind::CharEnum { choices } | ColumnKind::IntEnum { choices } => choices,
            _ => &[],
        }
    }

    pub fn is_many_to_many(&self) -> bool {
        matches!(self, ColumnKind::ManyToMany { .. })
    }

    pub fn related_model(&self) -> Option<&str> {
        match self {
            ColumnKind::ForeignKey { model } | ColumnKind::ManyToMany { model, .. } => Some(model),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
    pub nullable: bool,
    pub readonly: bool,
    pub description: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            readonly: false,
            description: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Column holding the value on the model's own table, if any.
    pub fn column_name(&self) -> Option<String> {
        match &self.kind {
            ColumnKind::ManyToMany { .. } => None,
            ColumnKind::ForeignKey { .. } => Some(format!("{}_id", self.name)),
            _ => Some(self.name.clone()),
        }
    }

    pub fn label(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| title_case(&self.name))
    }
}

/// Table-level description of an admin-managed model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub name: String,
    pub table: String,
    pub pk: String,
    pub description: Option<String>,
    /// Column used as the option label when other models reference this one.
    pub display_field: String,
    pub columns: Vec<ColumnDef>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            pk: "id".to_string(),
            description: None,
            display_field: "id".to_string(),
            columns: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn display_field(mut self, field: impl Into<String>) -> Self {
        self.display_field = field.into();
        self
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn field(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// True for the primary key, any declared field, or a foreign key's raw column.
    pub fn has_field(&self, name: &str) -> bool {
        name == self.pk
            || self.columns.iter().any(|column| {
                column.name == name || column.column_name().as_deref() == Some(name)
            })
    }

    pub fn title(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| title_case(&self.name))
    }
}

/// `view_num` -> `View Num`.
pub fn title_case(value: &str) -> String {
    value
        .split(|ch: char| ch == '_' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
