use workout_core::{print_training_report, process_packages, render_report, sample_packages, OutputFormat, Package, WorkoutError};

#[test]
fn test_process_keeps_order_and_isolates_failures() {
    let packages = vec![
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("XYZ", vec![1.0]),
        Package::new("RUN", vec![1.0, 2.0]),
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let results = process_packages(&packages);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().training_type, "Running");
    assert!(matches!(results[1], Err(WorkoutError::UnknownWorkoutType(_))));
    assert!(matches!(results[2], Err(WorkoutError::ArityMismatch { .. })));
    assert_eq!(results[3].as_ref().unwrap().training_type, "Swimming");
}

#[test]
fn test_text_report_for_samples() {
    let mut out = Vec::new();
    let failed = print_training_report(&sample_packages(), OutputFormat::Text, &mut out).unwrap();
    assert_eq!(failed, 0);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].starts_with("Training type: Running;"));
    assert!(lines[2].starts_with("Training type: SportsWalking;"));
}

#[test]
fn test_json_report_counts_failures() {
    let packages = vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
    ];
    let (lines, failed) = render_report(&packages, OutputFormat::Json);
    assert_eq!(failed, 1);
    assert_eq!(lines.len(), 1);

    let v: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(v["training_type"], "Swimming");
    assert_eq!(v["distance"].as_f64().unwrap(), 0.994);
    assert_eq!(v["calories"].as_f64().unwrap(), 336.0);
}
