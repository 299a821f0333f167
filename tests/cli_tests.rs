use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    dataset_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let dataset_path = dir.path().join("pairs.csv");

        let mut file = File::create(&dataset_path).unwrap();
        writeln!(file, "id,raw_comp_writers_text,CLEAN_TEXT").unwrap();
        writeln!(file, "1,Иван Петров,Ivan Petrov").unwrap();
        writeln!(file, "2,山田太郎,山田太郎").unwrap();
        writeln!(file, "3,\"Smith, John\",John Smith").unwrap();
        writeln!(file, "4,ACME PUBLISHING LTD,ACME").unwrap();
        writeln!(file, "5,中文,").unwrap();
        writeln!(file, "6,,orphan").unwrap();
        for i in 0..4 {
            writeln!(file, "{},Ελένη {},Eleni", 7 + i, i).unwrap();
        }

        Self { dir, dataset_path }
    }

    fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    fn run(&self, extra: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_normaudit"))
            .arg(&self.dataset_path)
            .arg("--output-dir")
            .arg(self.out_dir())
            .args(extra)
            .output()
            .expect("Failed to execute binary")
    }
}

#[test]
fn test_cli_writes_all_outputs() {
    let ctx = TestContext::new();
    let output = ctx.run(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out = ctx.out_dir();
    assert!(out.join("script_stats.json").exists());
    assert!(out.join("pattern_stats.json").exists());
    assert!(out.join("normalization_analysis.svg").exists());

    let patterns: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("pattern_stats.json")).unwrap())
            .unwrap();
    assert_eq!(patterns["total_analyzed"], 10);
    assert_eq!(patterns["name_structure_changed"], 1);
    assert_eq!(patterns["publishing_terms_removed"], 1);
    assert_eq!(patterns["business_entities_removed"], 1);
    assert_eq!(patterns["non_latin_rows_empty"], 1);

    let scripts: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("script_stats.json")).unwrap())
            .unwrap();
    assert_eq!(scripts["GREEK"]["total"], 4);
    assert_eq!(scripts["CJK"]["total"], 2);
    assert_eq!(scripts["overall"]["total"], 7);
    assert_eq!(scripts["overall"]["preserved"], 1);

    assert!(stdout.contains("TEXT NORMALIZATION ANALYSIS SUMMARY"));
    assert!(stdout.contains("Overall preservation rate: 14.29%"));
    assert!(stdout.contains("Name structure changed"));
    assert!(stdout.contains("1 rows with non-Latin characters were normalized to empty strings"));

    let svg = std::fs::read_to_string(out.join("normalization_analysis.svg")).unwrap();
    assert!(svg.contains("Script Preservation Rates"));
    assert!(svg.contains("n=4"));
}

#[test]
fn test_cli_sample_size_caps_rows() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--sample-size", "5"]);
    assert!(output.status.success());

    let patterns: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(ctx.out_dir().join("pattern_stats.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(patterns["total_analyzed"], 5);
}

#[test]
fn test_cli_fails_on_missing_dataset() {
    let ctx = TestContext::new();
    let output = Command::new(env!("CARGO_BIN_EXE_normaudit"))
        .arg(ctx.dir.path().join("nope.csv"))
        .arg("--output-dir")
        .arg(ctx.out_dir())
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    assert!(!ctx.out_dir().join("script_stats.json").exists());
}

#[test]
fn test_cli_fails_on_missing_column() {
    let ctx = TestContext::new();
    let output = ctx.run(&["--raw-column", "writer"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("writer"), "stderr: {}", stderr);
}
