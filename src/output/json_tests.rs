use super::*;
use crate::extrapolate::Convergence;
use crate::geometry::Gradient;

#[test]
fn json_contains_summary_and_reports() {
    let reports = [
        Report::Gradient {
            series: "a".to_string(),
            gradient: Some(Gradient::new(1.5, 0.0)),
        },
        Report::Convergence {
            first: "a".to_string(),
            second: "b".to_string(),
            result: Convergence::Parallel,
        },
    ];

    let output = JsonFormatter.format(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["found"], 1);
    assert_eq!(value["reports"][0]["kind"], "gradient");
    assert_eq!(value["reports"][0]["gradient"]["slope"], 1.5);
    assert_eq!(value["reports"][1]["result"]["outcome"], "parallel");
}

#[test]
fn missing_point_is_null() {
    let reports = [Report::Projection {
        series: "flat".to_string(),
        axis: crate::output::Axis::Y,
        target: 3.0,
        point: None,
    }];
    let output = JsonFormatter.format(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(value["reports"][0]["point"].is_null());
}
