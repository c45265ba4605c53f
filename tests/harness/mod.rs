#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;

pub(crate) use test_context::{FEED_URL, TOKEN, TestContext, config_with_sources};
