//! Property tests for shape construction and area.

use std::f64::consts::PI;

use proptest::prelude::*;

use solidkit::{area, total_area, DimensionIssue, Shape, SolidError};

fn dimension() -> impl Strategy<Value = f64> {
    // Wide but finite: products stay well inside f64 range.
    1e-6f64..1e6f64
}

fn invalid_dimension() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1e6f64..=0.0f64,
    ]
}

fn huge_dimension() -> impl Strategy<Value = f64> {
    // Any product of two of these is at least 1e300.
    1e150f64..1e308f64
}

fn is_overflow(result: &Result<Shape, SolidError>) -> bool {
    matches!(
        result,
        Err(SolidError::InvalidDimension {
            reason: DimensionIssue::Overflow,
            ..
        })
    )
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (dimension(), dimension()).prop_map(|(l, w)| Shape::rectangle(l, w).unwrap()),
        dimension().prop_map(|s| Shape::square(s).unwrap()),
        dimension().prop_map(|r| Shape::circle(r).unwrap()),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rectangle area is exactly length * width.
    #[test]
    fn property_rectangle_area(l in dimension(), w in dimension()) {
        let shape = Shape::rectangle(l, w).unwrap();
        prop_assert_eq!(area(&shape), l * w);
    }

    /// PROPERTY: Square area is side * side and equals the equal-sided rectangle.
    #[test]
    fn property_square_matches_rectangle(s in dimension()) {
        let square = Shape::square(s).unwrap();
        let rect = Shape::rectangle(s, s).unwrap();
        prop_assert_eq!(area(&square), s * s);
        prop_assert_eq!(area(&square), area(&rect));
    }

    /// PROPERTY: Circle area is pi * r^2 within floating-point tolerance.
    #[test]
    fn property_circle_area(r in dimension()) {
        let shape = Shape::circle(r).unwrap();
        prop_assert!(close(area(&shape), PI * r.powi(2)));
    }

    /// PROPERTY: Non-positive or non-finite dimensions never build a shape.
    #[test]
    fn property_invalid_dimensions_rejected(bad in invalid_dimension(), good in dimension()) {
        let is_invalid = |r: Result<Shape, SolidError>| {
            matches!(r, Err(SolidError::InvalidDimension { .. }))
        };
        prop_assert!(is_invalid(Shape::square(bad)));
        prop_assert!(is_invalid(Shape::circle(bad)));
        prop_assert!(is_invalid(Shape::rectangle(bad, good)));
        prop_assert!(is_invalid(Shape::rectangle(good, bad)));
    }

    /// PROPERTY: Huge dimensions either build a shape with a finite area or
    /// fail with an overflow; an infinite area is never produced.
    #[test]
    fn property_huge_dimensions_never_give_infinite_area(
        a in huge_dimension(),
        b in huge_dimension(),
    ) {
        for result in [Shape::rectangle(a, b), Shape::square(a), Shape::circle(a)] {
            match &result {
                Ok(shape) => {
                    prop_assert!(area(shape).is_finite());
                }
                Err(_) => {
                    prop_assert!(is_overflow(&result));
                }
            }
        }
        prop_assert_eq!(Shape::rectangle(a, b).is_ok(), (a * b).is_finite());
    }

    /// PROPERTY: Beyond sqrt(f64::MAX) a square always overflows.
    #[test]
    fn property_square_past_sqrt_max_overflows(side in 1.35e154f64..1e308f64) {
        prop_assert!(is_overflow(&Shape::square(side)));
    }

    /// PROPERTY: total_area does not depend on the order of shapes.
    #[test]
    fn property_total_area_order_independent(
        shapes in proptest::collection::vec(shape(), 0..16).prop_shuffle()
    ) {
        let mut reversed = shapes.clone();
        reversed.reverse();

        let mut sorted = shapes.clone();
        sorted.sort_by_key(|s| s.kind().as_str());

        let total = total_area(&shapes);
        prop_assert!(close(total, total_area(&reversed)));
        prop_assert!(close(total, total_area(&sorted)));
    }

    /// PROPERTY: total_area is the sum of per-shape areas for any mix of variants.
    #[test]
    fn property_total_area_is_sum(shapes in proptest::collection::vec(shape(), 0..16)) {
        let expected: f64 = shapes.iter().map(|s| s.area()).sum();
        prop_assert_eq!(total_area(&shapes), expected);
    }

    /// PROPERTY: Any shape reports non-negative, finite area.
    #[test]
    fn property_area_is_positive_and_finite(shape in shape()) {
        let a = area(&shape);
        prop_assert!(a.is_finite());
        prop_assert!(a > 0.0);
    }
}

#[test]
fn mixed_example_total() {
    let shapes = [
        Shape::rectangle(1.0, 2.0).unwrap(),
        Shape::square(2.0).unwrap(),
        Shape::circle(2.0).unwrap(),
    ];
    let total = total_area(&shapes);
    assert!(close(total, 2.0 + 4.0 + 4.0 * PI));
    assert!((total - 18.566).abs() < 1e-3);
}
