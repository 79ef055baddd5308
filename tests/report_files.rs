use latency_report::cli::{build_config, Cli};
use latency_report::model::Kind;
use latency_report::report::generate_report;
use std::path::Path;
use std::process::Command;

fn write_csv(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("results.csv");
    std::fs::write(&path, body).unwrap();
    path
}

fn summary_json_blocks(text: &str, kind: &str) -> Vec<serde_json::Value> {
    let header = format!("{}\n", kind.to_uppercase());
    text.split("\n\n")
        .filter_map(|block| block.strip_prefix(header.as_str()))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

#[test]
fn three_row_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        "kind,latency_ns\nenqueue,1000000\nenqueue,2000000\ndequeue,500000\n",
    );
    let cfg = build_config(&Cli { input }, dir.path().to_path_buf());
    let outcome = generate_report(&cfg).unwrap();

    let enq = &outcome.kinds[0];
    assert_eq!(enq.kind, Kind::Enqueue);
    assert_eq!(enq.stats.count, 2);
    assert_eq!(enq.stats.avg_ms, Some(1.5));
    assert_eq!(enq.stats.max_ms, Some(2.0));

    let deq = &outcome.kinds[1];
    assert_eq!(deq.stats.count, 1);
    assert_eq!(deq.stats.avg_ms, Some(0.5));
    assert_eq!(deq.stats.max_ms, Some(0.5));

    let text = std::fs::read_to_string(dir.path().join("summary.txt")).unwrap();
    let enq_blocks = summary_json_blocks(&text, "enqueue");
    assert_eq!(enq_blocks.len(), 1);
    assert_eq!(enq_blocks[0]["count"], 2);
    assert_eq!(enq_blocks[0]["avg_ms"], 1.5);
    assert_eq!(summary_json_blocks(&text, "dequeue").len(), 1);
    assert!(text.find("ENQUEUE").unwrap() < text.find("DEQUEUE").unwrap());

    assert!(dir.path().join("histogram_enqueue.png").exists());
    assert!(dir.path().join("histogram_dequeue.png").exists());
}

#[test]
fn header_only_input_produces_degenerate_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "kind,latency_ns\n");
    let cfg = build_config(&Cli { input }, dir.path().to_path_buf());
    let outcome = generate_report(&cfg).unwrap();

    assert!(outcome.kinds.iter().all(|k| k.stats.count == 0));
    let text = std::fs::read_to_string(dir.path().join("summary.txt")).unwrap();
    for kind in ["enqueue", "dequeue"] {
        let blocks = summary_json_blocks(&text, kind);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["count"], 0);
        assert!(blocks[0]["p50_ms"].is_null());
    }
}

#[test]
fn rerun_duplicates_summary_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), "kind,latency_ns\nenqueue,10\nnoop,20\n");
    let cfg = build_config(&Cli { input }, dir.path().to_path_buf());
    generate_report(&cfg).unwrap();
    generate_report(&cfg).unwrap();

    let text = std::fs::read_to_string(dir.path().join("summary.txt")).unwrap();
    assert_eq!(summary_json_blocks(&text, "enqueue").len(), 2);
    assert_eq!(summary_json_blocks(&text, "dequeue").len(), 2);
    assert!(!text.contains("NOOP"));
}

#[test]
fn percentiles_are_ordered_for_larger_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::from("kind,latency_ns\n");
    for i in 0..500u64 {
        body.push_str(&format!("enqueue,{}\n", (i * 104_729) % 9_000_000 + 1_000));
    }
    let input = write_csv(dir.path(), &body);
    let cfg = build_config(&Cli { input }, dir.path().to_path_buf());
    let stats = &generate_report(&cfg).unwrap().kinds[0].stats;

    assert_eq!(stats.count, 500);
    let p50 = stats.p50_ms.unwrap();
    let p95 = stats.p95_ms.unwrap();
    let p99 = stats.p99_ms.unwrap();
    assert!(p50 <= p95 && p95 <= p99 && p99 <= stats.max_ms.unwrap());
}

#[test]
fn binary_writes_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "kind,latency_ns\nenqueue,1000000\ndequeue,500000\n");

    let output = Command::new(env!("CARGO_BIN_EXE_latency-report"))
        .arg("results.csv")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Report files generated: "));
    assert!(!stdout.contains('[') && !stdout.contains('"'));
    assert!(stdout.contains("summary.txt"));
    assert!(stdout.contains("histogram_enqueue.png"));
}

#[test]
fn binary_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_latency-report"))
        .arg("nope.csv")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.csv"));
    assert!(!dir.path().join("summary.txt").exists());
}

#[test]
fn binary_fails_on_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(dir.path(), "kind,latency\nenqueue,1\n");
    let output = Command::new(env!("CARGO_BIN_EXE_latency-report"))
        .arg("results.csv")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("latency_ns"));
}
