//! Trees decoded from builder JSON.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use linqdsl_core::{LinqSerializer, extract_roots, to_linq};
    use linqdsl_model::Expr;

    use crate::tree_from_json;

    const FILTER: &str = r#"{
        "kind": "operation",
        "node": {
            "operator": "and",
            "args": [
                {
                    "kind": "operation",
                    "node": {
                        "operator": "eq",
                        "args": [
                            {"kind": "path", "node": {
                                "kind": "property",
                                "parent": {"kind": "root", "name": "p1"},
                                "name": "firstname"
                            }},
                            {"kind": "constant", "node": {"type": "string", "value": "John"}}
                        ]
                    }
                },
                {
                    "kind": "operation",
                    "node": {
                        "operator": "or",
                        "args": [
                            {"kind": "operation", "node": {
                                "operator": "isNull",
                                "args": [{"kind": "path", "node": {
                                    "kind": "property",
                                    "parent": {"kind": "root", "name": "p2"},
                                    "name": "email"
                                }}]
                            }},
                            {"kind": "template", "node": {"text": "p3.Flag"}}
                        ]
                    }
                }
            ]
        }
    }"#;

    const PROJECTION: &str = r#"{
        "kind": "projection",
        "node": {
            "entries": [
                {"args": [
                    {"kind": "constant", "node": {"type": "string", "value": "name"}},
                    {"kind": "path", "node": {
                        "kind": "property",
                        "parent": {"kind": "root", "name": "person"},
                        "name": "firstname"
                    }}
                ]},
                {"args": [
                    {"kind": "constant", "node": {"type": "float", "value": 0.5}}
                ]},
                {"args": [
                    {"kind": "constant", "node": {"type": "string", "value": "born"}},
                    {"kind": "constant", "node": {"type": "other", "value": {"year": 1990}}}
                ]}
            ]
        }
    }"#;

    #[test]
    fn test_should_serialize_decoded_filter() -> anyhow::Result<()> {
        let expr = tree_from_json(FILTER)?;
        assert_eq!(
            to_linq(&expr)?,
            r#"p1.Firstname == "John" && (p2.Email == null || p3.Flag)"#
        );
        Ok(())
    }

    #[test]
    fn test_should_extract_roots_of_decoded_filter() -> anyhow::Result<()> {
        let expr = tree_from_json(FILTER)?;
        let expected: HashSet<String> = ["p1", "p2"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(extract_roots(&expr), expected);
        Ok(())
    }

    #[test]
    fn test_should_serialize_decoded_projection() -> anyhow::Result<()> {
        let expr = tree_from_json(PROJECTION)?;
        let rendered = LinqSerializer::default().serialize(&expr)?;
        assert_eq!(rendered.text, "new {name = person.Firstname, 0.5, born = $p1}");
        assert_eq!(rendered.params["p1"], serde_json::json!({"year": 1990}));
        Ok(())
    }

    #[test]
    fn test_should_reject_invalid_path_shape() {
        let json = r#"{"kind": "path", "node": {"kind": "root"}}"#;
        assert!(tree_from_json(json).is_err());
    }

    #[test]
    fn test_should_reject_decoded_subquery() -> anyhow::Result<()> {
        let json = r#"{"kind": "subQuery", "node": {
            "body": {"kind": "template", "node": {"text": "x"}}
        }}"#;
        let expr: Expr = tree_from_json(json)?;
        assert!(to_linq(&expr).is_err());
        assert!(extract_roots(&expr).is_empty());
        Ok(())
    }
}
