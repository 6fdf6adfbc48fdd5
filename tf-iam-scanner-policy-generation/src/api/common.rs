use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::KnowledgeBase;

/// Load the knowledge base from `permissions_file`, or use the embedded one
pub(crate) fn load_knowledge_base(permissions_file: Option<&Path>) -> Result<Arc<KnowledgeBase>> {
    match permissions_file {
        Some(path) => {
            info!("Loading permission knowledge base from {}", path.display());
            let knowledge_base = KnowledgeBase::load_from_path(path).context(format!(
                "Failed to load permission knowledge base: {}",
                path.display()
            ))?;
            Ok(Arc::new(knowledge_base))
        }
        None => KnowledgeBase::embedded().context("Failed to load embedded permission knowledge base"),
    }
}
