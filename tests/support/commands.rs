//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a pouch command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - POUCH_CONFIG pointing at the test config file
    /// - colors disabled
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pouch").expect("failed to find pouch binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("POUCH_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("POUCH_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run pouch with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run pouch")
    }

    /// Run pouch with `args` in JSON mode and parse the envelope.
    pub fn json(&self, args: &[&str]) -> (Output, serde_json::Value) {
        let output = self
            .cmd()
            .args(args)
            .arg("--json")
            .output()
            .expect("failed to run pouch");
        let value = serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not a JSON envelope ({}): {}",
                e,
                String::from_utf8_lossy(&output.stdout)
            )
        });
        (output, value)
    }

    /// Shortcut for `pouch list`.
    pub fn list(&self) -> Output {
        self.run(&["list"])
    }

    /// Shortcut for `pouch folders list`.
    pub fn folders(&self) -> Output {
        self.run(&["folders", "list"])
    }
}
