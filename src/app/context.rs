use std::path::{Path, PathBuf};

use crate::domain::ScaffoldConfig;
use crate::ports::{
    CodeGeneratorActions, LibraryManager, Logger, ModelMetadataService, ModelTypesLocator,
};

/// Application context holding dependencies for command execution.
pub struct AppContext<L, M, B, A, G>
where
    L: ModelTypesLocator,
    M: ModelMetadataService,
    B: LibraryManager,
    A: CodeGeneratorActions,
    G: Logger,
{
    app_base_path: PathBuf,
    config: ScaffoldConfig,
    types: L,
    metadata: M,
    libraries: B,
    actions: A,
    logger: G,
}

impl<L, M, B, A, G> AppContext<L, M, B, A, G>
where
    L: ModelTypesLocator,
    M: ModelMetadataService,
    B: LibraryManager,
    A: CodeGeneratorActions,
    G: Logger,
{
    /// Create a new application context.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        app_base_path: impl Into<PathBuf>,
        config: ScaffoldConfig,
        types: L,
        metadata: M,
        libraries: B,
        actions: A,
        logger: G,
    ) -> Self {
        Self { app_base_path: app_base_path.into(), config, types, metadata, libraries, actions, logger }
    }

    pub fn app_base_path(&self) -> &Path {
        &self.app_base_path
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn types(&self) -> &L {
        &self.types
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn libraries(&self) -> &B {
        &self.libraries
    }

    pub fn actions(&self) -> &A {
        &self.actions
    }

    pub fn logger(&self) -> &G {
        &self.logger
    }
}
