use admin_domain::{MenuEntry, NavItem, SiteView};

use crate::AdminSite;

/// Branding plus the navigation list in menu order.
pub fn site_view(admin: &AdminSite) -> SiteView {
    let site = &admin.site;
    SiteView {
        name: site.name.clone(),
        logo_url: site.logo_url.clone(),
        login_footer: site.login_footer.clone(),
        login_description: site.login_description.clone(),
        locale: site.locale.clone(),
        locale_switcher: site.locale_switcher_enabled,
        theme_switcher: site.theme_switcher_enabled,
        menus: site.menus.iter().map(nav_item).collect(),
    }
}

fn nav_item(entry: &MenuEntry) -> NavItem {
    match entry {
        MenuEntry::Header { name } => NavItem::Header { name: name.clone() },
        MenuEntry::Link(link) => NavItem::Link {
            name: link.name.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
            external: link.external,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::demo_admin_site;
    use serde_json::json;

    #[test]
    fn headers_render_without_link_attributes() {
        let view = site_view(&demo_admin_site());
        assert_eq!(view.name, "Admin Demo");
        let rendered_names = view
            .menus
            .iter()
            .map(|item| match item {
                NavItem::Header { name } | NavItem::Link { name, .. } => name.clone(),
            })
            .collect::<Vec<_>>();
        let menu_names = demo_admin_site()
            .site
            .menus
            .iter()
            .map(|entry| entry.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(rendered_names, menu_names);

        let rendered = serde_json::to_value(&view.menus).expect("json");
        let header = rendered
            .as_array()
            .and_then(|items| items.iter().find(|item| item["kind"] == "header"))
            .cloned()
            .expect("header");
        assert_eq!(header, json!({"kind": "header", "name": "Content"}));

        let github = view
            .menus
            .iter()
            .find(|item| matches!(item, NavItem::Link { name, .. } if name == "Github"))
            .expect("github");
        assert!(matches!(github, NavItem::Link { external: true, .. }));
    }
}
