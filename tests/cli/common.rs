use std::path::PathBuf;
use tempfile::TempDir;

/// Helper struct for managing test resources
pub struct TestContext {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::new()?;
        Ok(TestContext { temp_dir })
    }

    /// Get the path to the temporary directory
    pub fn temp_path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Create a file with the given content
    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf, std::io::Error> {
        let file_path = self.temp_path().join(name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new().expect("Failed to create test context")
    }
}

/// Get the mock-class command, run from inside the test context so no
/// project config leaks in.
#[allow(deprecated)]
pub fn cmd(ctx: &TestContext) -> assert_cmd::Command {
    let mut cmd =
        assert_cmd::Command::cargo_bin("mock-class").expect("Failed to find mock-class binary");
    cmd.current_dir(ctx.temp_path()).env("NO_COLOR", "1");
    cmd
}

/// Manifest for the SimplePrint class
pub fn simple_print_manifest() -> String {
    r#"{
  "name": "SimplePrint",
  "members": [
    { "name": "constructor", "kind": "constructor", "params": [{ "name": "console" }] },
    { "name": "print", "params": [{ "name": "something", "type": "String" }], "returns": "i64" },
    { "name": "toString", "inherited": true }
  ]
}"#
    .to_string()
}
