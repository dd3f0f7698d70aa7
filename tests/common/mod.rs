//! Shared testing utilities for vgen CLI and library tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CATALOG: &str = r#"models:
  - name: App.Models.Product
    properties:
      - { name: ProductId, type: int, key: true, generated: true }
      - { name: Name, type: string }
      - { name: Price, type: decimal }
      - { name: CategoryId, type: int, foreign_key: true }
    navigations:
      - { name: Category, target: App.Models.Category, display: Title, foreign_keys: [CategoryId] }
  - name: App.Models.Category
    properties:
      - { name: CategoryId, type: int, key: true }
      - { name: Title, type: string }
  - name: App.Models.Order
  - name: Legacy.Order
contexts:
  - name: App.Data.ShopContext
    entity_sets:
      Products: App.Models.Product
      Categories: App.Models.Category
"#;

/// Testing harness providing an isolated application directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an application directory with the shared model catalog.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        fs::write(root.path().join("models.yml"), CATALOG).expect("Failed to write catalog");
        Self { root }
    }

    /// Application base path.
    pub fn app_base(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `vgen` binary in the app directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vgen").expect("Failed to locate vgen binary");
        cmd.current_dir(self.app_base());
        cmd
    }

    /// Path of a view for `model` under the default views folder.
    pub fn view_path(&self, model: &str, view: &str) -> PathBuf {
        self.app_base().join("Views").join(model).join(format!("{view}.cshtml"))
    }

    /// Write a file relative to the application base.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.app_base().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}
