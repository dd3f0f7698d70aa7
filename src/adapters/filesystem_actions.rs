//! Template rendering and file output on the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, ViewBindingRecord, is_plain_file_name};
use crate::ports::{CodeGeneratorActions, WriteMode};

use super::embedded_templates::embedded_template;

/// Renders templates with minijinja and writes them to disk.
///
/// Search folders are consulted in order; when none holds the template the
/// copy bundled for `generator_name` is used.
pub struct FilesystemCodeGeneratorActions {
    generator_name: String,
    env: Environment<'static>,
}

impl FilesystemCodeGeneratorActions {
    pub fn new(generator_name: impl Into<String>) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Self { generator_name: generator_name.into(), env }
    }

    fn load_template(
        &self,
        template_name: &str,
        search_folders: &[PathBuf],
    ) -> Result<String, AppError> {
        if !is_plain_file_name(template_name) {
            return Err(AppError::validation(format!(
                "Template name '{}' must be a file name without path segments",
                template_name
            )));
        }

        for folder in search_folders {
            let candidate = folder.join(template_name);
            if candidate.is_file() {
                return Ok(fs::read_to_string(candidate)?);
            }
        }

        if let Some(content) = embedded_template(&self.generator_name, template_name) {
            return Ok(content.to_string());
        }

        let mut searched: Vec<String> =
            search_folders.iter().map(|folder| folder.display().to_string()).collect();
        searched.push(format!("<embedded>/{}", self.generator_name));
        Err(AppError::TemplateNotFound {
            name: template_name.to_string(),
            searched: searched.join(", "),
        })
    }

    fn render(
        &self,
        template_name: &str,
        source: &str,
        model: &ViewBindingRecord,
    ) -> Result<String, AppError> {
        self.env.render_named_str(template_name, source, model).map_err(|err| {
            AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
        })
    }
}

impl CodeGeneratorActions for FilesystemCodeGeneratorActions {
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        search_folders: &[PathBuf],
        model: &ViewBindingRecord,
        mode: WriteMode,
    ) -> Result<(), AppError> {
        let source = self.load_template(template_name, search_folders)?;
        let content = self.render(template_name, &source, model)?;

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_output(output_path, content.as_bytes(), mode)
    }
}

fn write_output(path: &Path, content: &[u8], mode: WriteMode) -> Result<(), AppError> {
    match mode {
        WriteMode::Overwrite => fs::write(path, content)?,
        WriteMode::CreateNew => {
            let mut file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|err| match err.kind() {
                    io::ErrorKind::AlreadyExists => AppError::Conflict { path: path.to_path_buf() },
                    _ => AppError::Io(err),
                })?;
            file.write_all(content)?;
        }
    }
    Ok(())
}
