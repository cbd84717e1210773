use graph_rs::core::{AnalysisBehavior, find_intersections};
use graph_rs::eval::Expression;

#[test]
fn parabola_meets_constant_twice() {
    let parabola = Expression::parse("x^2").expect("valid expression");
    let constant = Expression::parse("4").expect("valid expression");

    let crossings = find_intersections(
        &parabola,
        &constant,
        -10.0,
        10.0,
        AnalysisBehavior::default(),
    )
    .expect("scan succeeds");

    assert_eq!(crossings.len(), 2);
    assert!((crossings[0].x + 2.0).abs() < 1e-2);
    assert!((crossings[1].x - 2.0).abs() < 1e-2);
    for crossing in &crossings {
        assert!((crossing.y - 4.0).abs() < 0.1);
    }
}

#[test]
fn reported_y_comes_from_the_first_expression() {
    let line = Expression::parse("x").expect("valid expression");
    let other = Expression::parse("2-x").expect("valid expression");

    let crossings =
        find_intersections(&line, &other, -10.0, 10.0, AnalysisBehavior::default())
            .expect("scan succeeds");

    assert_eq!(crossings.len(), 1);
    // f_a(x) = x at the refined crossing near x = 1.
    assert!((crossings[0].x - 1.0).abs() < 1e-2);
    assert!((crossings[0].y - crossings[0].x).abs() < 1e-12);
}

#[test]
fn tangent_curves_do_not_intersect_by_sign_change() {
    // x^2 and 0 touch at the origin without the difference changing sign.
    let parabola = Expression::parse("x^2").expect("valid expression");
    let zero = Expression::parse("0").expect("valid expression");

    let crossings =
        find_intersections(&parabola, &zero, -10.0, 10.0, AnalysisBehavior::default())
            .expect("scan succeeds");

    assert!(crossings.is_empty());
}

#[test]
fn disjoint_curves_yield_nothing() {
    let parabola = Expression::parse("x^2 + 1").expect("valid expression");
    let below = Expression::parse("-1").expect("valid expression");

    let crossings =
        find_intersections(&parabola, &below, -10.0, 10.0, AnalysisBehavior::default())
            .expect("scan succeeds");

    assert!(crossings.is_empty());
}

#[test]
fn argument_order_flips_nothing_but_reported_y_source() {
    let sine = Expression::parse("sin(x)").expect("valid expression");
    let half = Expression::parse("0.5").expect("valid expression");
    let behavior = AnalysisBehavior::default();

    let forward = find_intersections(&sine, &half, 0.0, 3.0, behavior).expect("scan succeeds");
    let reverse = find_intersections(&half, &sine, 0.0, 3.0, behavior).expect("scan succeeds");

    assert_eq!(forward.len(), 2);
    assert_eq!(reverse.len(), 2);
    for (a, b) in forward.iter().zip(&reverse) {
        assert!((a.x - b.x).abs() < 1e-9);
    }
}
