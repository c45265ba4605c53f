use crate::harness::{FEED_URL, TestContext};
use predicates::prelude::*;

#[test]
fn configure_requires_auth_token() {
    let ctx = TestContext::new();

    ctx.bare_cli()
        .env("GITHUB_REPOSITORY", "repo-owner/widgets")
        .arg(FEED_URL)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NUGET_AUTH_TOKEN environment variable was not provided"));

    ctx.assert_no_output();
}

#[test]
fn configure_rejects_empty_auth_token() {
    let ctx = TestContext::new();

    ctx.cli().env("NUGET_AUTH_TOKEN", "").arg(FEED_URL).assert().failure();

    ctx.assert_no_output();
}
