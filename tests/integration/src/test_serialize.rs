//! Serialization of builder-shaped trees.

#[cfg(test)]
mod tests {
    use linqdsl_core::{IdentifierCase, LinqConfig, LinqSerializer, SerializeError, to_linq};
    use linqdsl_model::{Constant, Expr, Operator, Path, Projection, ProjectionEntry};

    use crate::{init_tracing, person};

    #[test]
    fn test_should_serialize_where_clause() {
        init_tracing();
        let p = person();
        let expr = Expr::from(p.get("firstname"))
            .eq("John")
            .and(Expr::from(p.get("age")).binary(Operator::Ge, 18))
            .and(Expr::operation(
                Operator::StartsWith,
                vec![p.get("lastname").into(), "Sm".into()],
            ));
        assert_eq!(
            to_linq(&expr).unwrap(),
            r#"person.Firstname == "John" && person.Age >= 18 && person.Lastname.StartsWith("Sm")"#
        );
    }

    #[test]
    fn test_should_serialize_join_condition() {
        init_tracing();
        let expr = Expr::from(Path::root("p1").get("id")).eq(Path::root("p2").get("managerId"));
        assert_eq!(to_linq(&expr).unwrap(), "p1.Id == p2.ManagerId");
    }

    #[test]
    fn test_should_serialize_select_projection() {
        init_tracing();
        let p = person();
        let projection = Projection::new()
            .with("name", p.get("firstname"))
            .with("count", Expr::constant(1));
        assert_eq!(
            to_linq(&projection.into()).unwrap(),
            "new {name = person.Firstname, count = 1}"
        );
    }

    #[test]
    fn test_should_abort_without_partial_output() {
        init_tracing();
        let p = person();
        let projection = Projection::new()
            .with("name", p.get("firstname"))
            .with_entry(ProjectionEntry { args: Vec::new() });
        let result = LinqSerializer::default().serialize(&projection.into());
        assert!(matches!(
            result,
            Err(SerializeError::MalformedProjection { index: 1, .. })
        ));
    }

    #[test]
    fn test_should_reject_subquery_in_filter() {
        init_tracing();
        let inner = Expr::from(Path::root("friend").get("age")).binary(Operator::Gt, 30);
        let expr = Expr::from(person().get("active"))
            .eq(true)
            .or(Expr::sub_query(inner).not());
        let err = to_linq(&expr).unwrap_err();
        assert_eq!(err.to_string(), "unsupported construct: subquery");
    }

    #[test]
    fn test_should_render_with_env_style_config() {
        init_tracing();
        let config = LinqConfig::from_lookup(|key| match key {
            "LINQ_IDENTIFIER_CASE" => Some("preserve".to_owned()),
            "LINQ_PARAMETER_PREFIX" => Some("v".to_owned()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.identifier_case, IdentifierCase::Preserve);

        let expr = Expr::from(person().get("birthDate"))
            .binary(Operator::Lt, Constant::Other(serde_json::json!("2000-01-01")));
        let rendered = LinqSerializer::new(config).serialize(&expr).unwrap();
        assert_eq!(rendered.text, "person.birthDate < $v1");
        assert_eq!(rendered.params["v1"], serde_json::json!("2000-01-01"));
    }
}
