use workout_core::{load_packages, parse_packages, sample_packages, save_packages, Package, WorkoutError};
use std::fs;

#[test]
fn test_save_and_load_packages() {
    let path = "tests/tmp_packages.json";
    let _ = fs::remove_file(path);

    let packages = sample_packages();
    save_packages(&packages, path).expect("save_packages failed");

    let loaded = load_packages(path).expect("load_packages failed");
    assert_eq!(loaded, packages);

    let _ = fs::remove_file(path);
}

#[test]
fn test_parse_object_and_pair_forms() {
    let json = r#"[
        {"workout_type": "RUN", "data": [15000, 1, 75]},
        ["WLK", [9000, 1, 75, 180]]
    ]"#;
    let packages = parse_packages(json).unwrap();
    assert_eq!(packages[0], Package::new("RUN", vec![15000.0, 1.0, 75.0]));
    assert_eq!(packages[1], Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]));
}

#[test]
fn test_parse_error_reports_path() {
    let json = r#"[["RUN", [15000, 1, 75]], {"workout_type": "SWM"}]"#;
    match parse_packages(json).unwrap_err() {
        WorkoutError::Json { path, .. } => assert!(path.contains('1'), "path was {}", path),
        other => panic!("expected Json error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_packages("tests/does_not_exist.json").unwrap_err();
    assert!(matches!(err, WorkoutError::Io(_)));
}

#[test]
fn test_sample_packages_cover_all_codes() {
    let codes: Vec<_> = sample_packages().into_iter().map(|p| p.workout_type).collect();
    assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
}
