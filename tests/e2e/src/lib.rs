//! Browser and HTTP harness for end-to-end tests against the web package.

pub mod browser;
pub mod test_server;
