//! Default view templates compiled into the binary.

use include_dir::{Dir, include_dir};

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Content of an embedded template for `generator`, if bundled.
pub fn embedded_template(generator: &str, template_name: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(format!("{}/{}", generator, template_name))?.contents_utf8()
}

/// File names of the templates bundled for `generator`, sorted.
pub fn embedded_template_names(generator: &str) -> Vec<String> {
    let Some(dir) = TEMPLATES_DIR.get_dir(generator) else {
        return Vec::new();
    };

    let mut names: Vec<String> = dir
        .files()
        .filter_map(|file| file.path().file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
