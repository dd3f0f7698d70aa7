use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ViewBindingRecord};
use crate::ports::{CodeGeneratorActions, WriteMode};

/// One recorded `add_file_from_template` call.
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub output_path: PathBuf,
    pub template_name: String,
    pub search_folders: Vec<PathBuf>,
    pub model: ViewBindingRecord,
    pub mode: WriteMode,
}

/// Rendering service that records calls instead of touching disk.
#[derive(Debug, Default)]
pub struct RecordingActions {
    pub calls: RefCell<Vec<RenderCall>>,
    pub failure: Option<String>,
}

#[allow(dead_code)]
impl RecordingActions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<RenderCall> {
        self.calls.borrow().last().cloned()
    }
}

impl CodeGeneratorActions for RecordingActions {
    fn add_file_from_template(
        &self,
        output_path: &Path,
        template_name: &str,
        search_folders: &[PathBuf],
        model: &ViewBindingRecord,
        mode: WriteMode,
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push(RenderCall {
            output_path: output_path.to_path_buf(),
            template_name: template_name.to_string(),
            search_folders: search_folders.to_vec(),
            model: model.clone(),
            mode,
        });
        match &self.failure {
            Some(message) => Err(AppError::TemplateNotFound {
                name: template_name.to_string(),
                searched: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
