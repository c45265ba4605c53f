use crate::harness::{FEED_URL, TestContext, config_with_sources};
use predicates::prelude::*;

#[test]
fn configure_rejects_invalid_source_key() {
    let ctx = TestContext::new();
    ctx.write_existing_config("nuget.config", &config_with_sources(&[("My Feed!", FEED_URL)]));

    ctx.cli()
        .arg(FEED_URL)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("letters, numbers, and '-', '_', '.' symbols only"));

    ctx.assert_no_output();
}
