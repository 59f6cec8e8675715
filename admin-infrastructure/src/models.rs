// Model schemas served by the bundled dashboard

use admin_domain::{ColumnDef, ColumnKind, ModelSchema, SelectOption};

fn char(name: &str, max_length: u32) -> ColumnDef {
    ColumnDef::new(name, ColumnKind::Char { max_length })
}

fn created_at() -> ColumnDef {
    ColumnDef::new("created_at", ColumnKind::Datetime).readonly()
}

fn many_to_many(name: &str, model: &str, through: &str) -> ColumnDef {
    ColumnDef::new(
        name,
        ColumnKind::ManyToMany {
            model: model.to_string(),
            through: through.to_string(),
        },
    )
}

pub fn product_type_choices() -> Vec<SelectOption> {
    vec![SelectOption::new(1, "article"), SelectOption::new(2, "page")]
}

pub fn status_choices() -> Vec<SelectOption> {
    vec![SelectOption::new(1, "on"), SelectOption::new(0, "off")]
}

pub fn permission_action_choices() -> Vec<SelectOption> {
    vec![
        SelectOption::new(1, "create"),
        SelectOption::new(2, "delete"),
        SelectOption::new(3, "update"),
        SelectOption::new(4, "read"),
    ]
}

/// Category, Product, Config, User, Role and Permission.
pub fn builtin_models() -> Vec<ModelSchema> {
    vec![
        ModelSchema::new("Category", "category")
            .display_field("name")
            .column(char("slug", 200))
            .column(char("name", 200))
            .column(created_at()),
        ModelSchema::new("Product", "product")
            .display_field("name")
            .column(many_to_many("categories", "Category", "product_category"))
            .column(char("name", 50))
            .column(ColumnDef::new("view_num", ColumnKind::Int).describe("View Num"))
            .column(ColumnDef::new("sort", ColumnKind::Int))
            .column(ColumnDef::new("is_reviewed", ColumnKind::Boolean).describe("Is Reviewed"))
            .column(
                ColumnDef::new(
                    "type",
                    ColumnKind::IntEnum {
                        choices: product_type_choices(),
                    },
                )
                .describe("Product Type"),
            )
            .column(char("image", 200))
            .column(ColumnDef::new("body", ColumnKind::Text))
            .column(created_at()),
        ModelSchema::new("Config", "config")
            .display_field("label")
            .column(char("label", 200))
            .column(char("key", 20).describe("Unique key for config"))
            .column(ColumnDef::new("value", ColumnKind::Json))
            .column(ColumnDef::new(
                "status",
                ColumnKind::IntEnum {
                    choices: status_choices(),
                },
            )),
        ModelSchema::new("User", "user")
            .display_field("username")
            .column(char("username", 20))
            .column(char("password", 200))
            .column(ColumnDef::new("last_login", ColumnKind::Datetime).nullable().describe("Last Login"))
            .column(ColumnDef::new("is_active", ColumnKind::Boolean).describe("Is Active"))
            .column(ColumnDef::new("is_superuser", ColumnKind::Boolean).describe("Is Superuser"))
            .column(char("avatar", 200).nullable())
            .column(ColumnDef::new("intro", ColumnKind::Text).nullable())
            .column(created_at()),
        ModelSchema::new("Permission", "permission")
            .display_field("label")
            .column(char("label", 50))
            .column(char("model", 50))
            .column(ColumnDef::new(
                "action",
                ColumnKind::IntEnum {
                    choices: permission_action_choices(),
                },
            )),
        ModelSchema::new("Role", "role")
            .display_field("label")
            .column(char("label", 50))
            .column(many_to_many("users", "User", "role_user"))
            .column(many_to_many("permissions", "Permission", "role_permission")),
    ]
}

/// Maps a bulk permission name to the stored `Permission.action` value.
pub fn permission_action_value(action: &str) -> Option<i64> {
    permission_action_choices()
        .into_iter()
        .find(|choice| choice.text == action)
        .and_then(|choice| choice.value.as_i64())
}
