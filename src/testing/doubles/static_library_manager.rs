use crate::domain::LibraryInfo;
use crate::ports::LibraryManager;

#[derive(Debug, Default)]
pub struct StaticLibraryManager {
    libraries: Vec<LibraryInfo>,
}

impl StaticLibraryManager {
    pub fn new(libraries: Vec<LibraryInfo>) -> Self {
        Self { libraries }
    }
}

impl LibraryManager for StaticLibraryManager {
    fn libraries(&self) -> Vec<LibraryInfo> {
        self.libraries.clone()
    }
}
