//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read
//! requests.
//!
//! Resources are defined in `definitions/` and registered via
//! `registry.rs`. Adding a new resource does NOT require modifying this
//! file.

use std::collections::HashMap;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// Static text content served for this resource.
    pub content: String,
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with all registered resources.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(entry.content.clone(), uri)],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
