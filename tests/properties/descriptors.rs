//! Property tests for shape descriptor parsing.

use proptest::prelude::*;

use solidkit::{parse_descriptor, parse_shapes, Shape, ShapeKind};

fn dimension() -> impl Strategy<Value = f64> {
    1e-3f64..1e4f64
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(":"), Just(" "), Just(": "), Just("  ")]
}

fn param_separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(","), Just(" "), Just(", ")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any separator style yields the same rectangle.
    #[test]
    fn property_separator_style_does_not_matter(
        l in dimension(),
        w in dimension(),
        sep in separator(),
        psep in param_separator(),
    ) {
        let text = format!("rectangle{}{}{}{}", sep, l, psep, w);
        let d = parse_descriptor(&text, 1).unwrap().unwrap();
        prop_assert_eq!(d.kind, ShapeKind::Rectangle);
        prop_assert_eq!(d.build().unwrap(), Shape::rectangle(l, w).unwrap());
    }

    /// PROPERTY: Parsing a list preserves input order.
    #[test]
    fn property_list_preserves_order(
        sides in proptest::collection::vec(dimension(), 1..12)
    ) {
        let content: String = sides.iter().map(|s| format!("square {}\n", s)).collect();
        let shapes = parse_shapes(&content).unwrap();
        let parsed: Vec<f64> = shapes.iter().map(|s| s.dimensions()[0]).collect();
        prop_assert_eq!(parsed, sides);
    }

    /// PROPERTY: Wrong arity always fails, whatever the values.
    #[test]
    fn property_wrong_arity_fails(values in proptest::collection::vec(dimension(), 0..5)) {
        let text = format!(
            "circle {}",
            values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
        );
        let d = parse_descriptor(&text, 1).unwrap().unwrap();
        prop_assert_eq!(d.build().is_ok(), values.len() == 1);
    }
}
