// tests/integration/end_to_end.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::SanctuaryFixture;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sanctuary-stats"))
}

fn two_group_fixture() -> (SanctuaryFixture, std::path::PathBuf) {
    let fx = SanctuaryFixture::new();
    fx.write("a/0x01/Token.sol", "contract Token {}");
    fx.write("a/0x02/Vault.sol", "contract Vault {}");
    fx.write("a/README.md", "not a source unit");
    fx.write(
        "a/contracts.json",
        "{\"name\":\"Token\",\"compiler\":\"v0.8.7\",\"date\":\"4/30/2021\"}\n\n{\"err\":\"timeout\",\"name\":\"Ghost\"}\n",
    );
    fx.empty_group("b");
    let plan = fx.plan("Ethereum", &[("A", "a"), ("B", "b")]);
    (fx, plan)
}

#[test]
fn markdown_report_for_two_groups() {
    let (fx, plan) = two_group_fixture();

    let output = binary()
        .args(["--config", plan.to_str().unwrap(), "--root", fx.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = String::from_utf8(output).unwrap();

    assert!(report.starts_with("# Smart-Contract-Sanctuary - STATS"));
    assert!(report.contains("* [Ethereum](#ethereum)\n  * A\n  * B\n"));
    assert!(report.contains("last updated: "));

    let a = report.find("### A\n").expect("group A section");
    let b = report.find("### B\n").expect("group B section");
    let totals = report.find("### ___totals___").expect("totals section");
    assert!(a < b && b < totals);

    let section_a = &report[a..b];
    assert!(section_a.contains("**SourceUnits:** `2`"));
    assert!(section_a.contains("**Unique Submissions (Name):** `1`"));
    assert!(section_a.contains("**First Submission:** `4/30/2021`"));
    assert!(section_a.contains("`v0.8.7` (1)"));
    assert!(!section_a.contains("Ghost"));
    assert_eq!(section_a.matches("   * ").count(), 3);

    let section_b = &report[b..totals];
    assert!(section_b.contains("**SourceUnits:** `0`"));
    assert_eq!(section_b.matches("   * ").count(), 0);

    assert!(report[totals..].contains("**SourceUnits:** `2`"));
    assert!(report[totals..].contains("**Unique Contract Names (submissions):** `1`"));
}

#[test]
fn jsonl_report_to_file() {
    let (fx, plan) = two_group_fixture();
    let out = fx.path().join("out/stats.jsonl");

    binary()
        .args([
            "--config",
            plan.to_str().unwrap(),
            "--root",
            fx.path().to_str().unwrap(),
            "--format",
            "jsonl",
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["type"], "report");
    assert_eq!(lines[1]["name"], "A");
    assert_eq!(lines[1]["file_count"], 2);
    assert_eq!(lines[2]["name"], "B");
    assert!(lines[2]["first_date"].is_null());
    assert_eq!(lines[3]["type"], "total");
    assert_eq!(lines[3]["file_count"], 2);
    assert_eq!(lines[3]["unique_name_count"], 1);
}

#[test]
fn missing_group_directory_aborts() {
    let fx = SanctuaryFixture::new();
    fx.empty_group("a");
    let plan = fx.plan("Ethereum", &[("A", "a"), ("Gone", "gone")]);

    let assert = binary()
        .args(["--config", plan.to_str().unwrap(), "--root", fx.path().to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("### A"))
        .stdout(predicate::str::contains("### Gone").not())
        .stderr(predicate::str::contains("Gone"))
        .stderr(predicate::str::contains("Path not found"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("Path not found").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("Failed to summarize group 'Gone'").count(), 1, "{stderr}");
}

#[test]
fn malformed_log_line_aborts() {
    let fx = SanctuaryFixture::new();
    fx.write("a/contracts.json", "{\"name\":\"ok\"}\nnot json\n");
    let plan = fx.plan("Tron", &[("Mainnet", "a")]);

    binary()
        .args(["--config", plan.to_str().unwrap(), "--root", fx.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record"))
        .stderr(predicate::str::contains(":2:"));
}
