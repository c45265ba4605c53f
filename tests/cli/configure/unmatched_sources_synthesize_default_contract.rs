use crate::harness::{FEED_URL, TestContext, config_with_sources};

#[test]
fn configure_with_no_matching_entry_synthesizes_source_only() {
    let ctx = TestContext::new();
    ctx.write_existing_config(
        "nuget.config",
        &config_with_sources(&[
            ("nuget.org", "https://api.nuget.org/v3/index.json"),
            ("Internal", "https://internal.example.org/packages"),
        ]),
    );

    ctx.cli().arg(FEED_URL).assert().success();

    let output = ctx.read_output();
    assert!(output.contains(r#"<add key="Source" value="https://example.com/feed"/>"#));
    assert!(output.contains("<Source>"));
    assert!(!output.contains("nuget.org"));
    assert!(!output.contains("Internal"));
}
