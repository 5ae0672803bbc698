use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use model_tester::reporting::load_test_results;
use model_tester::{
    base_test, DisplayMode, Error, LogRegClassifier, ModelTest, TestConfig, TestOptions,
    TreeClassifier,
};
use tempfile::{tempdir, TempDir};

/// Two well separated clusters with an id column, a noise text column and a
/// missing cell.
fn write_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("clusters.csv");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "patient_id,age,score,comment,outcome").unwrap();
    for i in 0..50 {
        let positive = i % 2 == 1;
        let age = if positive { 60.0 + (i % 7) as f64 } else { 25.0 + (i % 5) as f64 };
        let score = if positive { 3.0 * (i % 10) as f64 + 3.0 } else { 1.0 + (i % 4) as f64 * 0.1 };
        // Imputed with the training mean, which sits well inside the positive range.
        let score_cell = if i == 11 { String::new() } else { score.to_string() };
        writeln!(
            file,
            "p{:03},{},{},free text {},{}",
            i,
            age,
            score_cell,
            i,
            if positive { 1 } else { 0 }
        )
        .unwrap();
    }
    path
}

fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let csv = write_dataset(dir.path());
    let out = dir.path().join("test-results");
    fs::create_dir(&out).unwrap();
    (dir, csv, out)
}

fn options(out: &Path) -> TestOptions {
    TestOptions {
        exclude_cols: vec!["comment".to_string()],
        output_dir: out.to_path_buf(),
        display: DisplayMode::Hidden,
        ..TestOptions::default()
    }
}

#[test]
fn tree_run_writes_report_named_after_model() {
    let (_dir, csv, out) = workspace();

    let results = base_test(&csv, Box::new(TreeClassifier::new()), "patient_id", "outcome", options(&out)).unwrap();

    assert_eq!(results.confusion_matrix.total(), 10);
    assert_eq!(results.accuracy, 1.0);
    assert_eq!(results.confusion_matrix.fp, 0);
    assert_eq!(results.confusion_matrix.fn_, 0);

    let saved = load_test_results(&out.join("DecisionTreeClassifier.json")).unwrap();
    assert_eq!(saved.model, "DecisionTreeClassifier");
    assert_eq!(saved.results, results);
}

#[test]
fn logistic_regression_run() {
    let (_dir, csv, out) = workspace();

    let results = base_test(&csv, Box::new(LogRegClassifier::new()), "patient_id", "outcome", options(&out)).unwrap();

    let cm = results.confusion_matrix;
    assert_eq!(cm.tn + cm.fp + cm.fn_ + cm.tp, 10);
    assert!(results.accuracy >= 0.9, "accuracy {}", results.accuracy);
    assert!(out.join("LogisticRegression.json").exists());
}

#[test]
fn same_inputs_give_same_report() {
    let (_dir, csv, out) = workspace();
    let first = base_test(&csv, Box::new(TreeClassifier::new()), "patient_id", "outcome", options(&out)).unwrap();
    let second = base_test(&csv, Box::new(TreeClassifier::new()), "patient_id", "outcome", options(&out)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn text_column_must_be_excluded() {
    let (_dir, csv, out) = workspace();
    let opts = TestOptions {
        output_dir: out,
        display: DisplayMode::Hidden,
        ..TestOptions::default()
    };
    let err = base_test(&csv, Box::new(TreeClassifier::new()), "patient_id", "outcome", opts).unwrap_err();
    assert!(matches!(err, Error::Parse { ref column, .. } if column == "comment"));
}

#[test]
fn missing_output_directory_fails_after_scoring() {
    let (dir, csv, _out) = workspace();
    let opts = TestOptions {
        output_dir: dir.path().join("absent"),
        ..options(dir.path())
    };
    let err = base_test(&csv, Box::new(TreeClassifier::new()), "patient_id", "outcome", opts).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!dir.path().join("absent").exists());
}

#[test]
fn missing_csv_fails() {
    let dir = tempdir().unwrap();
    let err = base_test(
        dir.path().join("nope.csv"),
        Box::new(TreeClassifier::new()),
        "id",
        "y",
        options(dir.path()),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Csv(_) | Error::Io(_)));
}

#[test]
fn builder_run_with_svg_display() {
    let (dir, csv, out) = workspace();
    let svg = dir.path().join("cm.svg");

    let results = ModelTest::builder()
        .csv_path(&csv)
        .model_named("knn")
        .unwrap()
        .model_param("k", "3")
        .unwrap()
        .index_col("patient_id")
        .target_col("outcome")
        .exclude_col("comment")
        .test_size(0.3)
        .output_dir(&out)
        .display(DisplayMode::Svg { path: svg.clone() })
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(results.confusion_matrix.total(), 15);
    assert!(svg.exists());
    assert!(out.join("KNNClassifier.json").exists());
}

#[test]
fn json_config_run() {
    let (dir, csv, out) = workspace();
    let config_path = dir.path().join("run.json");
    let config = serde_json::json!({
        "csv_path": csv,
        "model": "tree",
        "model_params": {"max_depth": "3"},
        "index_col": "patient_id",
        "target_col": "outcome",
        "exclude_cols": ["comment"],
        "processors": ["null_handler"],
        "output_dir": out,
        "display": {"mode": "hidden"}
    });
    fs::write(&config_path, config.to_string()).unwrap();

    let results = TestConfig::from_json_file(&config_path)
        .unwrap()
        .into_model_test()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(results.accuracy, 1.0);
    let raw = fs::read_to_string(out.join("DecisionTreeClassifier.json")).unwrap();
    assert!(raw.starts_with("{\n    \"model\": \"DecisionTreeClassifier\",\n    \"results\": {"));
}
