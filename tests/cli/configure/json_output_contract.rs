use crate::harness::{FEED_URL, TestContext};
use std::fs;

#[test]
fn json_flag_prints_outcome_and_appends_github_output() {
    let ctx = TestContext::new();
    let github_output = ctx.work_dir().join("github_output");

    let assert =
        ctx.cli().env("GITHUB_OUTPUT", &github_output).args([FEED_URL, "--json"]).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed["source_keys"][0], "Source");
    assert_eq!(parsed["synthesized_source"], true);

    let recorded = fs::read_to_string(&github_output).unwrap();
    assert_eq!(recorded.trim(), format!("json={}", stdout.trim()));
}
