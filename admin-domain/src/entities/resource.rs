// Resource description returned to the dashboard

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::schema::SelectOption;
use crate::value_objects::DisplayWidget;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub widget: DisplayWidget,
    pub required: bool,
    pub sortable: bool,
    pub disabled: bool,
    pub multiple: bool,
    pub options: Vec<SelectOption>,
    pub cols: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceView {
    pub title: String,
    pub pk: String,
    pub fields: Vec<FieldView>,
    pub search_fields: Vec<String>,
    #[serde(rename = "_actions")]
    pub actions: BTreeMap<String, bool>,
}
