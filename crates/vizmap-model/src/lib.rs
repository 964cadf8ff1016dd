pub mod data;
pub mod definition;
pub mod error;
pub mod mapping;
pub mod render;
pub mod validation;

pub use data::{
    ChartData, DEFAULT_GROUP, HierarchyNode, NetworkData, NetworkLink, NetworkNode, NormalizedRow,
};
pub use definition::{DataShape, GraphDefinition, InputDef, NumberPolicy};
pub use error::{DefinitionError, Result};
pub use mapping::{MappingValue, RoleMapping};
pub use render::RenderConfig;
pub use validation::MappingValidation;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_definition() -> GraphDefinition {
        GraphDefinition {
            name: "Bar Chart".to_string(),
            graph_type: "bar-chart".to_string(),
            description: "Vertical bars per category".to_string(),
            shape: DataShape::Rows,
            numbers: Some(NumberPolicy::ZeroFill),
            required_inputs: vec![
                InputDef::required("x", "X Axis", "Category for each bar"),
                InputDef::required("y", "Y Axis", "Bar height"),
            ],
            optional_inputs: vec![InputDef::optional("color", "Color", "Bar color")],
        }
    }

    #[test]
    fn definition_serializes_camel_case() {
        let json = serde_json::to_value(sample_definition()).expect("serialize definition");
        assert_eq!(json["type"], "bar-chart");
        assert_eq!(json["shape"], "rows");
        assert_eq!(json["requiredInputs"][0]["role"], "x");
        assert_eq!(json["optionalInputs"][0]["required"], false);

        let round: GraphDefinition = serde_json::from_value(json).expect("deserialize definition");
        assert_eq!(round, sample_definition());
    }

    #[test]
    fn definition_verify_rejects_duplicate_roles() {
        let mut definition = sample_definition();
        definition
            .optional_inputs
            .push(InputDef::optional("x", "X again", "duplicate"));
        assert_eq!(
            definition.verify(),
            Err(DefinitionError::DuplicateRole {
                graph_type: "bar-chart".to_string(),
                role: "x".to_string(),
            })
        );
    }

    #[test]
    fn role_mapping_drops_nulls_and_types_values() {
        let object = json!({
            "x": "data.category",
            "y": null,
            "stroke-width": 2,
        });
        let mapping = RoleMapping::from_object(object.as_object().expect("object"));

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.path("x"), Some("data.category"));
        assert!(!mapping.contains("y"), "null mapping must read as absent");
        assert_eq!(
            mapping.get("stroke-width").and_then(MappingValue::as_constant),
            Some(&json!(2))
        );
    }

    #[test]
    fn hierarchy_node_counts_and_depth() {
        let mut root = HierarchyNode::new("Root");
        let mut left = HierarchyNode::new("left");
        left.children.push(HierarchyNode::with_value("leaf", 3.0));
        root.children.push(left);
        root.children.push(HierarchyNode::new("right"));

        assert_eq!(root.count(), 4);
        assert_eq!(root.depth(), 3);
        assert!(!root.is_leaf());
    }

    #[test]
    fn validation_errors_flip_valid() {
        let mut validation = MappingValidation::ok();
        assert!(validation.valid);

        validation.push_warning("unknown role");
        assert!(validation.valid, "warnings alone must not invalidate");

        validation.push_error("missing x");
        assert!(!validation.valid);
        assert_eq!(validation.error_count(), 1);
        assert_eq!(validation.warning_count(), 1);
    }
}
