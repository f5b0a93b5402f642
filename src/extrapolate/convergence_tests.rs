use super::*;

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

#[test]
fn cannot_extrapolate_with_no_data() {
    assert_eq!(convergence_of(&[], &[]), None);
    assert_eq!(analyze_convergence(&[], &[]), Convergence::TooFewPoints);
}

#[test]
fn cannot_extrapolate_with_one_item_of_data() {
    let one = points(&[(0.0, 0.0)]);
    let two = points(&[(0.0, 0.0), (1.0, 1.0)]);

    assert_eq!(convergence_of(&one, &one), None);
    assert_eq!(convergence_of(&[], &one), None);
    assert_eq!(convergence_of(&one, &[]), None);
    assert_eq!(convergence_of(&one, &two), None);
    assert_eq!(convergence_of(&two, &one), None);
}

#[test]
fn cannot_extrapolate_when_both_lines_are_flat() {
    let first = points(&[(1.0, 1.0), (1.0, 1.0)]);
    let second = points(&[(2.0, 2.0), (2.0, 2.0)]);
    assert_eq!(convergence_of(&first, &second), None);
    assert_eq!(
        analyze_convergence(&first, &second),
        Convergence::VerticalSegment
    );
}

#[test]
fn vertical_segment_in_second_series_only() {
    let first = points(&[(0.0, 0.0), (1.0, 1.0)]);
    let second = points(&[(0.0, 5.0), (1.0, 4.0), (1.0, 3.0)]);
    assert_eq!(
        analyze_convergence(&first, &second),
        Convergence::VerticalSegment
    );
    assert_eq!(convergence_of(&first, &second), None);
}

#[test]
fn can_extrapolate_when_both_lines_are_same() {
    let line = points(&[(1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(convergence_of(&line, &line), Some(Point::new(2.0, 2.0)));
    assert_eq!(
        analyze_convergence(&line, &line),
        Convergence::Coincident {
            point: Point::new(2.0, 2.0)
        }
    );
}

#[test]
fn coincident_lines_report_last_point_of_first_series() {
    let first = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    let second = points(&[(5.0, 5.0), (9.0, 9.0)]);
    assert_eq!(convergence_of(&first, &second), Some(Point::new(2.0, 2.0)));
}

#[test]
fn cannot_extrapolate_when_lines_are_divergent() {
    let first = points(&[(1.0, 1.0), (2.0, 2.0)]);
    let second = points(&[(1.0, 1.0), (3.0, 2.0)]);
    assert_eq!(convergence_of(&first, &second), None);
    assert_eq!(
        analyze_convergence(&first, &second),
        Convergence::Diverged {
            intersection: Point::new(1.0, 1.0)
        }
    );
}

#[test]
fn can_extrapolate_when_one_line_is_flat_and_other_meets_it() {
    let first = points(&[(1.0, 1.0), (2.0, 2.0)]);
    let second = points(&[(2.0, 3.0), (3.0, 3.0)]);
    assert_eq!(convergence_of(&first, &second), Some(Point::new(3.0, 3.0)));
}

#[test]
fn extrapolation_from_different_origin_to_target() {
    let first = points(&[(0.0, 2.0), (1.0, 3.0)]);
    let second = points(&[(0.0, 0.0), (1.0, 2.0)]);
    assert_eq!(convergence_of(&first, &second), Some(Point::new(2.0, 4.0)));
}

#[test]
fn convergence_exactly_at_last_point_is_reported() {
    let first = points(&[(0.0, 0.0), (2.0, 2.0)]);
    let second = points(&[(0.0, 4.0), (1.0, 3.0)]);
    assert_eq!(convergence_of(&first, &second), Some(Point::new(2.0, 2.0)));
}

#[test]
fn parallel_lines_never_converge() {
    let first = points(&[(0.0, 0.0), (1.0, 1.0)]);
    let second = points(&[(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(analyze_convergence(&first, &second), Convergence::Parallel);
    assert_eq!(convergence_of(&first, &second), None);
}

#[test]
fn divergence_is_judged_against_first_series() {
    // lines cross at x = 3; first ends at 2, second ends at 5
    let first = points(&[(0.0, 0.0), (2.0, 2.0)]);
    let second = points(&[(4.0, 5.0), (5.0, 7.0)]);
    assert_eq!(convergence_of(&first, &second), Some(Point::new(3.0, 3.0)));
    assert_eq!(
        analyze_convergence(&second, &first),
        Convergence::Diverged {
            intersection: Point::new(3.0, 3.0)
        }
    );
}

#[test]
fn convergence_of_line_with_y() {
    let data = points(&[(0.0, 0.0), (6.0, 10.0)]);
    assert_eq!(convergence_with_y(&data, 20.0), Some(Point::new(12.0, 20.0)));
}

#[test]
fn convergence_with_y_in_the_past_when_line_is_going_wrong_way() {
    let data = points(&[(1.0, 1.0), (2.0, 0.0)]);
    assert_eq!(
        convergence_with_y(&data, 20.0),
        Some(Point::new(-18.0, 20.0))
    );
}

#[test]
fn no_convergence_with_y_for_vertical_line() {
    assert_eq!(
        convergence_with_y(&points(&[(0.0, 0.0), (0.0, 0.0)]), 20.0),
        None
    );
}

#[test]
fn no_convergence_with_y_for_flat_line() {
    assert_eq!(
        convergence_with_y(&points(&[(0.0, 0.0), (1.0, 0.0)]), 20.0),
        None
    );
}

#[test]
fn can_provide_a_y_for_x_when_flat() {
    let data = points(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(convergence_with_x(&data, 12.0), Some(Point::new(12.0, 0.0)));
}

#[test]
fn can_provide_a_y_for_x_when_going_downhill() {
    let data = points(&[(1.0, 1.0), (2.0, 0.0)]);
    assert_eq!(
        convergence_with_x(&data, 12.0),
        Some(Point::new(12.0, -10.0))
    );
}

#[test]
fn single_point_has_no_projection() {
    let data = points(&[(1.0, 1.0)]);
    assert_eq!(convergence_with_x(&data, 12.0), None);
    assert_eq!(convergence_with_y(&data, 12.0), None);
}

#[test]
fn outcome_point_only_for_converging_variants() {
    let point = Point::new(1.0, 2.0);
    assert_eq!(Convergence::Converges { point }.point(), Some(point));
    assert_eq!(Convergence::Coincident { point }.point(), Some(point));
    assert_eq!(Convergence::Parallel.point(), None);
    assert_eq!(Convergence::TooFewPoints.point(), None);
    assert_eq!(Convergence::VerticalSegment.point(), None);
    assert_eq!(
        Convergence::Diverged {
            intersection: point
        }
        .point(),
        None
    );
}

#[test]
fn convergence_serializes_with_outcome_tag() {
    let json = serde_json::to_value(Convergence::Converges {
        point: Point::new(3.0, 3.0),
    })
    .unwrap();
    assert_eq!(json["outcome"], "converges");
    assert_eq!(json["point"]["x"], 3.0);

    let json = serde_json::to_value(Convergence::Parallel).unwrap();
    assert_eq!(json["outcome"], "parallel");
}

#[test]
fn convergence_is_idempotent() {
    let first = points(&[(0.0, 0.1), (1.3, 0.9), (2.2, 2.05)]);
    let second = points(&[(0.0, 3.3), (1.1, 3.1), (2.4, 3.0)]);
    let a = convergence_of(&first, &second).unwrap();
    let b = convergence_of(&first, &second).unwrap();
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
}
