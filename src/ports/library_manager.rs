use crate::domain::LibraryInfo;

/// Port for discovering libraries referenced by the application.
pub trait LibraryManager {
    /// Libraries in declaration order.
    fn libraries(&self) -> Vec<LibraryInfo>;
}
