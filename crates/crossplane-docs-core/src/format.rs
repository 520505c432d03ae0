//! Display strings for schema types, defaults and validation constraints

use serde_json::Value;

use crate::value::display_value;
use crate::xrd::SchemaNode;

/// Format a node's type terraform-docs style
///
/// Arrays become `list(<item type>)`, enums are always shown as `string`,
/// and any other type is passed through verbatim, even when empty.
pub fn format_type(node: &SchemaNode) -> String {
    if node.is_array()
        && let Some(items) = &node.items
    {
        return format!("list({})", format_type(items));
    }
    if node.is_object() {
        return "object".to_string();
    }
    if !node.enum_values.is_empty() {
        return "string".to_string();
    }
    node.type_.clone()
}

/// Format a default value, empty when there is none
pub fn format_default(default: Option<&Value>) -> String {
    default.map(display_value).unwrap_or_default()
}

/// Format validation constraints as a comma-joined list
///
/// Order is fixed: allowed values, minimum, maximum, min items, max items.
pub fn format_constraints(node: &SchemaNode) -> String {
    let mut constraints = Vec::new();

    if !node.enum_values.is_empty() {
        let allowed: Vec<String> = node
            .enum_values
            .iter()
            .map(|v| format!("`{}`", display_value(v)))
            .collect();
        constraints.push(format!("Allowed: {}", allowed.join(", ")));
    }

    if let Some(min) = node.minimum {
        constraints.push(format!("Min: {}", min));
    }

    if let Some(max) = node.maximum {
        constraints.push(format!("Max: {}", max));
    }

    if let Some(min_items) = node.min_items {
        constraints.push(format!("MinItems: {}", min_items));
    }

    if let Some(max_items) = node.max_items {
        constraints.push(format!("MaxItems: {}", max_items));
    }

    constraints.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_type_list() {
        let node = SchemaNode::array(SchemaNode::typed("string"));
        assert_eq!(format_type(&node), "list(string)");
    }

    #[test]
    fn test_format_type_nested_list() {
        let node = SchemaNode::array(SchemaNode::array(SchemaNode::typed("integer")));
        assert_eq!(format_type(&node), "list(list(integer))");

        let objects = SchemaNode::array(SchemaNode::typed("object"));
        assert_eq!(format_type(&objects), "list(object)");
    }

    #[test]
    fn test_format_type_object() {
        assert_eq!(format_type(&SchemaNode::typed("object")), "object");
    }

    #[test]
    fn test_format_type_enum_forces_string() {
        let node = SchemaNode {
            enum_values: vec![json!(1), json!(2)],
            ..SchemaNode::typed("integer")
        };
        assert_eq!(format_type(&node), "string");

        let untyped = SchemaNode {
            enum_values: vec![json!("a")],
            ..Default::default()
        };
        assert_eq!(format_type(&untyped), "string");
    }

    #[test]
    fn test_format_type_passthrough() {
        assert_eq!(format_type(&SchemaNode::typed("string")), "string");
        assert_eq!(format_type(&SchemaNode::typed("boolean")), "boolean");
        assert_eq!(format_type(&SchemaNode::default()), "");
    }

    #[test]
    fn test_format_type_array_without_items() {
        assert_eq!(format_type(&SchemaNode::typed("array")), "array");
    }

    #[test]
    fn test_format_default() {
        assert_eq!(format_default(None), "");
        assert_eq!(format_default(Some(&json!(5))), "5");
        assert_eq!(format_default(Some(&json!(0.5))), "0.5");
        assert_eq!(format_default(Some(&json!(false))), "false");
        assert_eq!(format_default(Some(&json!("eu-west-1"))), "eu-west-1");
    }

    #[test]
    fn test_format_constraints_partial() {
        let node = SchemaNode {
            minimum: Some(1.0),
            max_items: Some(5),
            ..Default::default()
        };
        assert_eq!(format_constraints(&node), "Min: 1, MaxItems: 5");
    }

    #[test]
    fn test_format_constraints_all() {
        let node = SchemaNode {
            enum_values: vec![json!("small"), json!("large")],
            minimum: Some(0.5),
            maximum: Some(10.0),
            min_items: Some(1),
            max_items: Some(3),
            ..Default::default()
        };
        assert_eq!(
            format_constraints(&node),
            "Allowed: `small`, `large`, Min: 0.5, Max: 10, MinItems: 1, MaxItems: 3"
        );
    }

    #[test]
    fn test_format_constraints_large_bounds_in_full() {
        let node = SchemaNode {
            minimum: Some(1e21),
            maximum: Some(-2.5e-7),
            ..Default::default()
        };
        assert_eq!(
            format_constraints(&node),
            "Min: 1000000000000000000000, Max: -0.00000025"
        );
    }

    #[test]
    fn test_format_constraints_none() {
        assert_eq!(format_constraints(&SchemaNode::typed("string")), "");
    }
}
