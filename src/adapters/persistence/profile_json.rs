//! Implements ProfileStorePort over `id.json` and `info.json`.

use super::json_doc::read_document;
use crate::domain::{Identity, LoadOutcome, NodeInfo};
use crate::ports::ProfileStorePort;
use std::path::{Path, PathBuf};

pub struct ProfileJson {
    id_path: PathBuf,
    info_path: PathBuf,
}

impl ProfileJson {
    pub fn new(id_path: impl AsRef<Path>, info_path: impl AsRef<Path>) -> Self {
        Self {
            id_path: id_path.as_ref().to_path_buf(),
            info_path: info_path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ProfileStorePort for ProfileJson {
    async fn load_identity(&self) -> LoadOutcome<Identity> {
        read_document(&self.id_path).await
    }

    async fn load_node_info(&self) -> LoadOutcome<NodeInfo> {
        read_document(&self.info_path).await
    }
}
