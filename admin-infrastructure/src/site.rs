// Site descriptor of the bundled dashboard

use admin_domain::{BulkActionDecl, DisplayWidget, MenuEntry, NavLink, ResourceOptions, SiteConfig};

/// Menus and branding served by the `admin-dashboard` binary.
pub fn dashboard_site() -> SiteConfig {
    SiteConfig {
        name: "Admin Dashboard".to_string(),
        logo_url: Some("/static/img/logo.png".to_string()),
        login_footer: Some("ADMIN DASHBOARD".to_string()),
        login_description: Some("Admin Dashboard".to_string()),
        locale: "en-US".to_string(),
        locale_switcher_enabled: true,
        theme_switcher_enabled: true,
        menus: vec![
            MenuEntry::link(NavLink::new("Home", "/").icon("fa fa-home")),
            MenuEntry::header("Content"),
            MenuEntry::link(
                NavLink::new("Product", "/rest/Product")
                    .icon("icon-list")
                    .options(
                        ResourceOptions::default()
                            .search_fields(["type"])
                            .field_type("type", DisplayWidget::Radiolist)
                            .field_type("image", DisplayWidget::Link)
                            .bulk_actions(vec![
                                BulkActionDecl::new("delete", "delete_all"),
                                BulkActionDecl::new("test_bulk", "TestBulk"),
                            ])
                            .cols("name", 6)
                            .cols("view_num", 3)
                            .cols("sort", 3)
                            .cols("created_at", 6)
                            .cols("categories", 6),
                    ),
            ),
            MenuEntry::link(NavLink::new("Category", "/rest/Category").icon("icon-list")),
            MenuEntry::link(NavLink::new("Config", "/rest/Config").icon("fa fa-pencil")),
            MenuEntry::header("External"),
            MenuEntry::link(
                NavLink::new("Github", "https://github.com/")
                    .icon("fa fa-github")
                    .external(),
            ),
            MenuEntry::header("Auth"),
            MenuEntry::link(
                NavLink::new("User", "/rest/User")
                    .icon("fa fa-user")
                    .options(
                        ResourceOptions::default()
                            .exclude(["password"])
                            .search_fields(["username"])
                            .field_type("avatar", DisplayWidget::Image),
                    ),
            ),
            MenuEntry::link(
                NavLink::new("Role", "/rest/Role")
                    .icon("fa fa-group")
                    .options(ResourceOptions::default().action("delete", false)),
            ),
            MenuEntry::link(
                NavLink::new("Permission", "/rest/Permission")
                    .icon("fa fa-user-plus")
                    .options(ResourceOptions::default().action("delete", false)),
            ),
            MenuEntry::link(
                NavLink::new("Logout", "/logout")
                    .icon("fa fa-lock")
                    .options(ResourceOptions::default().action("delete", false)),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin_models;

    #[test]
    fn every_resource_link_names_a_builtin_model() {
        let models = builtin_models();
        let linked = dashboard_site()
            .menus
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Link(link) if !link.external => link.resource_segment(),
                _ => None,
            })
            .filter(|name| name.chars().next().is_some_and(char::is_uppercase))
            .map(str::to_string)
            .collect::<Vec<_>>();
        assert_eq!(linked, ["Product", "Category", "Config", "User", "Role", "Permission"]);
        for name in &linked {
            assert!(models.iter().any(|model| &model.name == name), "{name} has no schema");
        }
    }
}
