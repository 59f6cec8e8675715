use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::Value;
use tera::{Context, Tera};
use tracing::debug;

use admin_domain::PageRenderer;

/// Renders dashboard pages from `<template_dir>/**/*.html`.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;
        let tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), "loaded templates");
        Ok(Self { tera })
    }

    /// Single in-memory template, for tests and embedded pages.
    pub fn from_raw(name: &str, content: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, content)
            .with_context(|| format!("failed to parse template {name}"))?;
        Ok(Self { tera })
    }
}

impl PageRenderer for TeraRenderer {
    fn render(&self, template: &str, context: &Value) -> Result<String> {
        let context = match context {
            Value::Null => Context::new(),
            other => Context::from_value(other.clone())
                .context("template context must be a json object")?,
        };
        self.tera
            .render(template, &context)
            .with_context(|| format!("failed to render {template}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_context_values() {
        let renderer =
            TeraRenderer::from_raw("home.html", "<h1>{{ site.name }}</h1>").expect("renderer");
        let html = renderer
            .render("home.html", &json!({"site": {"name": "Admin Demo"}}))
            .expect("html");
        assert_eq!(html, "<h1>Admin Demo</h1>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let renderer = TeraRenderer::from_raw("home.html", "hi").expect("renderer");
        assert!(renderer.render("other.html", &Value::Null).is_err());
        assert!(renderer.render("home.html", &json!([1, 2])).is_err());
    }
}
