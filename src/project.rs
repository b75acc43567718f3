//! Project layout.
//!
//! The provisioned application has a fixed two-tier shape: a `server/`
//! directory (Express-style API with Prisma) and a `client/` directory
//! (Vite-style frontend). [`ProjectLayout`] maps a project root to every
//! path the sequencer consumes or produces. Pure path arithmetic, no I/O.

use std::path::{Path, PathBuf};

/// Fixed paths of the two-tier application, anchored at a project root.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Create a layout anchored at the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project root itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The server project directory.
    pub fn server_dir(&self) -> PathBuf {
        self.root.join("server")
    }

    /// The client project directory.
    pub fn client_dir(&self) -> PathBuf {
        self.root.join("client")
    }

    /// The root manifest (may declare helper tools like concurrently).
    pub fn root_manifest(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// The server environment file.
    pub fn server_env(&self) -> PathBuf {
        self.server_dir().join(".env")
    }

    /// The client environment file.
    pub fn client_env(&self) -> PathBuf {
        self.client_dir().join(".env")
    }

    /// Runtime directories the server expects to exist.
    pub fn runtime_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.server_dir().join("logs"),
            self.server_dir().join("uploads"),
        ]
    }

    /// The Prisma schema file; its presence triggers the schema flow.
    pub fn schema_file(&self) -> PathBuf {
        self.server_dir().join("prisma").join("schema.prisma")
    }

    /// The Prisma migrations directory; its presence gates `migrate deploy`.
    pub fn migrations_dir(&self) -> PathBuf {
        self.server_dir().join("prisma").join("migrations")
    }
}
