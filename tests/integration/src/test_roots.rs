//! Root extraction alongside serialization of the same trees.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use linqdsl_core::{extract_roots, to_linq};
    use linqdsl_model::{Expr, Operator, Path, Projection};

    use crate::{init_tracing, person};

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn test_should_extract_roots_of_join() {
        init_tracing();
        let expr =
            Expr::from(Path::root("root1").get("field")).eq(Path::root("root2").get("field"));
        assert_eq!(extract_roots(&expr), set(&["root1", "root2"]));
    }

    #[test]
    fn test_should_extract_from_projection() {
        init_tracing();
        let projection = Projection::new()
            .with("name", person().get("firstname"))
            .with("count", Expr::constant(1));
        assert_eq!(extract_roots(&projection.into()), set(&["person"]));
    }

    #[test]
    fn test_should_extract_even_when_serialization_fails() {
        init_tracing();
        let expr = Expr::from(person().get("age"))
            .binary(Operator::Gt, 1)
            .and(Expr::sub_query(Expr::from(Path::root("hidden").get("x"))));
        assert!(to_linq(&expr).is_err());
        assert_eq!(extract_roots(&expr), set(&["person"]));
    }

    #[test]
    fn test_should_ignore_template_lookalikes() {
        init_tracing();
        let expr = Expr::template("person.Firstname == \"John\"")
            .and(Expr::template("p2.Age > 3"));
        assert!(extract_roots(&expr).is_empty());
    }
}
