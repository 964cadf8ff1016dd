//! Catalog export and chart listings shared by the CLI commands.

use vizmap_model::GraphDefinition;
use vizmap_registry::ChartRegistry;

/// Serializes every registered definition as pretty JSON, ordered by
/// chart type.
pub fn catalog_json(registry: &ChartRegistry) -> serde_json::Result<String> {
    let definitions: Vec<&GraphDefinition> = registry.available_graphs().collect();
    let mut text = serde_json::to_string_pretty(&definitions)?;
    text.push('\n');
    Ok(text)
}

/// Splits a definition's roles into the ones validation demands and the
/// ones it merely accepts, each joined for table display.
pub fn role_summary(definition: &GraphDefinition) -> (String, String) {
    let required: Vec<&str> = definition
        .required_inputs
        .iter()
        .filter(|input| input.required)
        .map(|input| input.role.as_str())
        .collect();
    let optional: Vec<&str> = definition
        .inputs()
        .filter(|input| !input.required)
        .map(|input| input.role.as_str())
        .collect();
    (join_or_dash(&required), join_or_dash(&optional))
}

fn join_or_dash(roles: &[&str]) -> String {
    if roles.is_empty() {
        "-".to_string()
    } else {
        roles.join(", ")
    }
}
