// Model loading
//
// Real model parsing (glTF, skeletons, geometry) is an engine concern and
// out of scope here; what the controller needs from a load is only the
// list of animation clip names and whether the model has any meshes to
// drive. Loading is a single-shot background operation: `load_model`
// spawns a loader thread and hands back a `PendingModel` the frame loop
// polls until the result arrives.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

/// Model loading errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model manifest not found: {0}")]
    NotFound(String),

    #[error("Invalid manifest line {line}: {text}")]
    InvalidManifest { line: usize, text: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a completed model load: the parts the player controller
/// consumes. Meshes and skeletons themselves stay with the engine.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub name: String,
    pub mesh_count: usize,
    pub clip_names: Vec<String>,
}

impl LoadedModel {
    pub fn new(name: &str, mesh_count: usize, clip_names: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            mesh_count,
            clip_names,
        }
    }

    /// Whether the model has a mesh that can serve as the root body
    pub fn has_body(&self) -> bool {
        self.mesh_count > 0
    }

    /// Built-in rigged walker used when no model file is given,
    /// carrying the standard Survey/Walk/Run clip set
    pub fn builtin_walker() -> Self {
        Self::new(
            "walker",
            1,
            vec!["Survey".to_string(), "Walk".to_string(), "Run".to_string()],
        )
    }
}

/// In-flight model load; poll once per frame until it yields
pub struct PendingModel {
    rx: mpsc::Receiver<Result<LoadedModel, ModelError>>,
    delivered: bool,
}

impl PendingModel {
    /// Take the load result if it has arrived. Returns `None` while the
    /// load is still running and after the result has been taken.
    pub fn poll(&mut self) -> Option<Result<LoadedModel, ModelError>> {
        if self.delivered {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.delivered = true;
                Some(result)
            }
            Err(_) => None,
        }
    }
}

/// Start loading a model manifest in the background.
///
/// Manifest format, one entry per line: `model <name>`, `mesh <name>`,
/// `clip <name>`; blank lines and `#` comments are skipped.
pub fn load_model<P: AsRef<Path>>(path: P) -> PendingModel {
    let path: PathBuf = path.as_ref().to_path_buf();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let _ = tx.send(load_manifest(&path));
    });

    PendingModel {
        rx,
        delivered: false,
    }
}

fn load_manifest(path: &Path) -> Result<LoadedModel, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound(path.to_string_lossy().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_manifest(&text)
}

fn parse_manifest(text: &str) -> Result<LoadedModel, ModelError> {
    let mut name = String::from("model");
    let mut mesh_count = 0;
    let mut clip_names = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(char::is_whitespace) {
            Some(("model", rest)) => name = rest.trim().to_string(),
            Some(("mesh", _)) => mesh_count += 1,
            Some(("clip", rest)) => clip_names.push(rest.trim().to_string()),
            _ => {
                return Err(ModelError::InvalidManifest {
                    line: index + 1,
                    text: line.to_string(),
                })
            }
        }
    }

    Ok(LoadedModel {
        name,
        mesh_count,
        clip_names,
    })
}
