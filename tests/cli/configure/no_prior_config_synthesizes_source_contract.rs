use crate::harness::{FEED_URL, TOKEN, TestContext};
use predicates::prelude::*;

#[test]
fn configure_without_existing_config_synthesizes_source() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg(FEED_URL)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote credentials for Source"));

    let expected = format!(
        r#"<?xml version="1.0"?>
<configuration>
  <config>
    <add key="defaultPushSource" value="{feed}"/>
  </config>
  <packageSources>
    <add key="Source" value="{feed}"/>
  </packageSources>
  <packageSourceCredentials>
    <Source>
      <add key="Username" value="repo-owner"/>
      <add key="ClearTextPassword" value="{token}"/>
    </Source>
  </packageSourceCredentials>
</configuration>
"#,
        feed = FEED_URL,
        token = TOKEN
    );
    assert_eq!(ctx.read_output(), expected);
}

#[test]
fn configure_overwrites_previous_output() {
    let ctx = TestContext::new();
    std::fs::write(ctx.output_path(), "stale").unwrap();

    ctx.cli().arg(FEED_URL).assert().success();

    assert!(ctx.read_output().starts_with("<?xml"));
}
