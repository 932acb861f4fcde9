// Integration tests for the split engine
// Tests cover: anchor boundaries, thresholds, encodings, errors, progress

use std::path::{Path, PathBuf};

use splitrs::{AnchorSet, ChannelProgress, SplitConfig, SplitError, SplitReport, Splitter};
use tempfile::TempDir;

// ============================================================================
// Helpers
// ============================================================================

fn write_input(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }
    std::fs::write(&path, contents).unwrap();
    path
}

fn utf8_config(rows_per_file: usize) -> SplitConfig {
    SplitConfig::default()
        .with_rows_per_file(rows_per_file)
        .with_encoding("utf-8")
}

/// Reads every part back as decoded lines, in index order.
fn read_parts(report: &SplitReport) -> Vec<Vec<String>> {
    report
        .parts
        .iter()
        .map(|part| {
            let text = std::fs::read_to_string(&part.path).unwrap();
            text.lines().map(str::to_string).collect()
        })
        .collect()
}

fn reconstruct(report: &SplitReport) -> Vec<String> {
    read_parts(report).into_iter().flatten().collect()
}

/// 2500 lines where only the given 1-based line numbers carry the "2000"
/// anchor code in their first field.
fn journal_lines(anchor_at: &[usize]) -> Vec<String> {
    (1..=2500)
        .map(|i| {
            let code = if anchor_at.contains(&i) { "2000" } else { "5000" };
            format!("{},row{:04}", code, i)
        })
        .collect()
}

// ============================================================================
// Boundary Placement
// ============================================================================

#[test]
fn test_concrete_scenario_2500_lines() {
    let dir = TempDir::new().unwrap();
    let lines = journal_lines(&[987, 1900, 2450]);
    let input = write_input(dir.path(), "journal.csv", &lines);

    let splitter = Splitter::new(utf8_config(1000).with_anchors(AnchorSet::new(["2000"])));
    let report = splitter.split(&input, &dir.path().join("out")).unwrap();

    assert_eq!(report.total_lines, 2500);
    assert_eq!(report.parts_written(), 3);

    let parts = read_parts(&report);
    // Line 987 is the last anchor at or before line 1000.
    assert_eq!(parts[0].len(), 987);
    assert_eq!(parts[0].first().unwrap(), "5000,row0001");
    assert_eq!(parts[0].last().unwrap(), "2000,row0987");
    // The next window is lines 988..=1987; its rightmost anchor is line 1900.
    assert_eq!(parts[1].len(), 913);
    assert_eq!(parts[1].first().unwrap(), "5000,row0988");
    assert_eq!(parts[1].last().unwrap(), "2000,row1900");
    // The remainder never fills a window again and flushes whole.
    assert_eq!(parts[2].len(), 600);
    assert_eq!(parts[2].last().unwrap(), "5000,row2500");
}

#[test]
fn test_no_anchor_window_flushes_at_threshold() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=1500).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "plain.csv", &lines);

    let splitter = Splitter::new(utf8_config(1000).with_anchors(AnchorSet::new(["2000"])));
    let report = splitter.split(&input, &dir.path().join("out")).unwrap();

    let parts = read_parts(&report);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].len(), 1000, "no-anchor window must cut at threshold");
    assert_eq!(parts[1].len(), 500);
    assert_eq!(reconstruct(&report), lines);
}

#[test]
fn test_anchor_exactly_on_threshold_line() {
    let dir = TempDir::new().unwrap();
    let mut lines: Vec<String> = (1..=15).map(|i| format!("5000,row{}", i)).collect();
    lines[9] = "2000,row10".to_string();
    let input = write_input(dir.path(), "edge.csv", &lines);

    let splitter = Splitter::new(utf8_config(10));
    let report = splitter.split(&input, &dir.path().join("out")).unwrap();

    let parts = read_parts(&report);
    assert_eq!(parts[0].len(), 10);
    assert_eq!(parts[0].last().unwrap(), "2000,row10");
    assert_eq!(parts[1].len(), 5);
}

#[test]
fn test_every_boundary_except_last_is_safe() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (0..730)
        .map(|i| {
            if i % 13 == 0 {
                format!("2111,head{}", i)
            } else {
                format!("5000,row{}", i)
            }
        })
        .collect();
    let input = write_input(dir.path(), "data.csv", &lines);

    let splitter = Splitter::new(utf8_config(100));
    let report = splitter.split(&input, &dir.path().join("out")).unwrap();

    let parts = read_parts(&report);
    let anchors = AnchorSet::default();
    for part in &parts[..parts.len() - 1] {
        assert!(
            anchors.qualifies(part.last().unwrap()),
            "non-final part must end on an anchor line"
        );
        assert!(part.len() <= 100);
    }
    assert_eq!(reconstruct(&report), lines);
}

// ============================================================================
// Threshold Edges
// ============================================================================

#[test]
fn test_short_input_yields_single_part() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=7).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "short.csv", &lines);

    let report = Splitter::new(utf8_config(1000))
        .split(&input, &dir.path().join("out"))
        .unwrap();

    assert_eq!(report.total_lines, 7);
    assert_eq!(report.parts_written(), 1);
    assert_eq!(reconstruct(&report), lines);
}

#[test]
fn test_empty_input_yields_zero_parts() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "empty.csv", &[]);
    let out = dir.path().join("out");

    let report = Splitter::new(utf8_config(1000)).split(&input, &out).unwrap();

    assert_eq!(report.total_lines, 0);
    assert_eq!(report.parts_written(), 0);
    // The output directory is still created during validation.
    assert!(out.is_dir());
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_input_length_multiple_of_threshold() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=200).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "data.csv", &lines);

    let report = Splitter::new(utf8_config(100).with_anchors(AnchorSet::new(["2000"])))
        .split(&input, &dir.path().join("out"))
        .unwrap();

    // Two exact windows, nothing left for a final flush.
    assert_eq!(report.parts_written(), 2);
    assert_eq!(report.parts[0].lines, 100);
    assert_eq!(report.parts[1].lines, 100);
    assert_eq!(reconstruct(&report), lines);
}

// ============================================================================
// Naming and Determinism
// ============================================================================

#[test]
fn test_part_names_are_zero_padded_and_contiguous() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=25).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "data.csv", &lines);

    let report = Splitter::new(utf8_config(10))
        .split(&input, &dir.path().join("out"))
        .unwrap();

    let names: Vec<String> = report.parts.iter().map(|p| p.file_name()).collect();
    assert_eq!(
        names,
        vec!["data_part001.csv", "data_part002.csv", "data_part003.csv"]
    );
    let indices: Vec<u32> = report.parts.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
}

#[test]
fn test_input_without_extension() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "journal", &["5000,row1".to_string()]);

    let report = Splitter::new(utf8_config(10))
        .split(&input, &dir.path().join("out"))
        .unwrap();

    assert_eq!(report.parts[0].file_name(), "journal_part001");
}

#[test]
fn test_custom_file_name_template() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "data.csv", &["5000,row1".to_string()]);

    let config = utf8_config(10).with_file_name_template("slice-{index}.out");
    let report = Splitter::new(config)
        .split(&input, &dir.path().join("out"))
        .unwrap();

    assert_eq!(report.parts[0].file_name(), "slice-001.out");
}

#[test]
fn test_rerun_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let lines = journal_lines(&[300, 987, 1500, 2100]);
    let input = write_input(dir.path(), "journal.csv", &lines);
    let splitter = Splitter::new(utf8_config(1000).with_anchors(AnchorSet::new(["2000"])));

    let first = splitter.split(&input, &dir.path().join("out_a")).unwrap();
    let second = splitter.split(&input, &dir.path().join("out_b")).unwrap();

    assert_eq!(first.total_lines, second.total_lines);
    assert_eq!(first.parts_written(), second.parts_written());
    for (a, b) in first.parts.iter().zip(&second.parts) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.lines, b.lines);
        assert_eq!(std::fs::read(&a.path).unwrap(), std::fs::read(&b.path).unwrap());
    }
}

#[test]
fn test_rerun_overwrites_existing_parts() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=5).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "data.csv", &lines);
    let out = dir.path().join("out");
    let splitter = Splitter::new(utf8_config(10));

    let report = splitter.split(&input, &out).unwrap();
    let part_path = report.parts[0].path.clone();
    std::fs::write(&part_path, "junk left behind").unwrap();

    splitter.split(&input, &out).unwrap();
    let rebuilt: Vec<String> = std::fs::read_to_string(&part_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(rebuilt, lines);
}

// ============================================================================
// Encodings
// ============================================================================

#[test]
fn test_shift_jis_round_trip() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = vec![
        "2000,売掛金,100".to_string(),
        "5000,買掛金,200".to_string(),
        "2000,現金,300".to_string(),
        "5000,雑費,400".to_string(),
    ];
    let mut contents = lines.join("\r\n");
    contents.push_str("\r\n");
    let (encoded, _, _) = encoding_rs::SHIFT_JIS.encode(&contents);
    let input = dir.path().join("journal.csv");
    std::fs::write(&input, encoded.as_ref()).unwrap();

    let splitter = Splitter::new(
        SplitConfig::default()
            .with_rows_per_file(3)
            .with_anchors(AnchorSet::new(["2000"])),
    );
    let report = splitter.split(&input, &dir.path().join("out")).unwrap();

    assert_eq!(report.total_lines, 4);
    assert_eq!(report.parts_written(), 2);

    let mut rebuilt = Vec::new();
    for part in &report.parts {
        let bytes = std::fs::read(&part.path).unwrap();
        let (text, _, _) = encoding_rs::SHIFT_JIS.decode(&bytes);
        rebuilt.extend(text.lines().map(str::to_string));
    }
    assert_eq!(rebuilt, lines);
    // Window [1..=3] cuts after the rightmost anchor, line 3.
    assert_eq!(report.parts[0].lines, 3);
}

#[test]
fn test_crlf_input_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.csv");
    std::fs::write(&input, "5000,a\r\n2000,b\r\n5000,c\r\n").unwrap();

    let report = Splitter::new(utf8_config(2))
        .split(&input, &dir.path().join("out"))
        .unwrap();

    assert_eq!(report.total_lines, 3);
    assert_eq!(
        reconstruct(&report),
        vec!["5000,a", "2000,b", "5000,c"]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_input_fails_before_any_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    let err = Splitter::new(utf8_config(10))
        .split(&dir.path().join("absent.csv"), &out)
        .unwrap_err();

    assert!(matches!(err, SplitError::InputNotFound { .. }));
    assert!(!out.exists(), "no output may exist after a failed INIT");
}

#[test]
fn test_unknown_encoding_fails_before_any_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "data.csv", &["5000,row1".to_string()]);
    let out = dir.path().join("out");

    let config = SplitConfig::default().with_encoding("klingon-8");
    let err = Splitter::new(config).split(&input, &out).unwrap_err();

    assert!(matches!(err, SplitError::InvalidArgument { .. }));
    assert!(!out.exists());
}

#[test]
fn test_blank_output_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), "data.csv", &["5000,row1".to_string()]);

    let err = Splitter::new(utf8_config(10))
        .split(&input, Path::new(""))
        .unwrap_err();
    assert!(matches!(err, SplitError::InvalidArgument { .. }));
}

// ============================================================================
// Background-Thread Wiring
// ============================================================================

#[test]
fn test_split_on_worker_thread_with_channel_progress() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (1..=50).map(|i| format!("5000,row{}", i)).collect();
    let input = write_input(dir.path(), "data.csv", &lines);
    let out = dir.path().join("out");

    let (tx, rx) = std::sync::mpsc::channel();
    let splitter = Splitter::new(utf8_config(20).with_progress_interval(10));

    let handle = std::thread::spawn(move || {
        let mut sink = ChannelProgress::new(tx);
        splitter.split_with_progress(&input, &out, &mut sink)
    });

    let messages: Vec<String> = rx.into_iter().collect();
    let report = handle.join().unwrap().unwrap();

    assert_eq!(report.total_lines, 50);
    assert!(messages.iter().any(|m| m == "processed 10 lines"));
    assert_eq!(
        messages.last().unwrap(),
        &format!("done: split 50 lines into {} files", report.parts_written())
    );
}
