// Display widget value object

use serde::{Deserialize, Serialize};

/// How the dashboard renders a field in lists and forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayWidget {
    Text,
    Number,
    Checkbox,
    Datetime,
    Date,
    Select,
    Textarea,
    Json,
    Radiolist,
    Link,
    Image,
    Tree,
}

impl DisplayWidget {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayWidget::Text => "text",
            DisplayWidget::Number => "number",
            DisplayWidget::Checkbox => "checkbox",
            DisplayWidget::Datetime => "datetime",
            DisplayWidget::Date => "date",
            DisplayWidget::Select => "select",
            DisplayWidget::Textarea => "textarea",
            DisplayWidget::Json => "json",
            DisplayWidget::Radiolist => "radiolist",
            DisplayWidget::Link => "link",
            DisplayWidget::Image => "image",
            DisplayWidget::Tree => "tree",
        }
    }

    /// Widgets whose options come from a fixed choice list.
    pub fn has_choices(&self) -> bool {
        matches!(self, DisplayWidget::Select | DisplayWidget::Radiolist)
    }
}
