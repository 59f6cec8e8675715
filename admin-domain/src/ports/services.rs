use serde_json::Value;

pub trait PageRenderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> anyhow::Result<String>;
}
