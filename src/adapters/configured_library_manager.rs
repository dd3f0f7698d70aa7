use crate::domain::LibraryInfo;
use crate::ports::LibraryManager;

/// Library manager fed by the `[[libraries]]` entries of `vgen.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLibraryManager {
    libraries: Vec<LibraryInfo>,
}

impl ConfiguredLibraryManager {
    pub fn new(libraries: &[LibraryInfo]) -> Self {
        Self { libraries: libraries.to_vec() }
    }
}

impl LibraryManager for ConfiguredLibraryManager {
    fn libraries(&self) -> Vec<LibraryInfo> {
        self.libraries.clone()
    }
}
