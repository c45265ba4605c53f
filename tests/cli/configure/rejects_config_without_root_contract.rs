use crate::harness::{FEED_URL, TestContext};
use predicates::prelude::*;

#[test]
fn configure_rejects_config_without_root_element() {
    let ctx = TestContext::new();
    ctx.write_existing_config(
        "nuget.config",
        "<settings><packageSources><add key=\"A\" value=\"x\" /></packageSources></settings>",
    );

    ctx.cli()
        .arg(FEED_URL)
        .assert()
        .failure()
        .stderr(predicate::str::contains("seems invalid"));

    ctx.assert_no_output();
}
