//! Scene tree records and recursive queries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between group keys and the model key in a mesh path.
pub const PATH_SEPARATOR: char = '/';

/// Errors produced while loading a scene description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The scene JSON did not match the expected node shape.
    #[error("scene json is malformed: {0}")]
    Malformed(String),
    /// A group or mesh carried an empty key.
    #[error("scene node under `{parent}` has an empty key")]
    EmptyKey {
        /// Path of the enclosing group (empty for roots).
        parent: String,
    },
    /// A group had no children.
    #[error("scene group `{0}` has no children")]
    EmptyGroup(String),
}

/// Color scheme for a mesh's info banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentTheme {
    /// Light banner with dark text.
    #[default]
    Light,
    /// Dark banner with light text.
    Dark,
}

/// Behavior attached to a mesh beyond showing its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeshAction {
    /// Clicking the mesh sets the fan speed directly.
    SetFanSpeed {
        /// Requested speed step.
        speed: u8,
    },
    /// The mesh's banner offers a button that enters the simulated PC.
    LogIntoPc,
}

/// One clickable piece of furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    /// Model key of the mesh inside the room model.
    pub model_key: String,
    /// Text shown in the info banner when the mesh is selected.
    #[serde(default)]
    pub clicked_content: Option<String>,
    /// Tooltip shown while hovering the mesh.
    #[serde(default)]
    pub hovered_content: Option<String>,
    /// Banner color scheme.
    #[serde(default)]
    pub content_theme: ContentTheme,
    /// Whether the banner carries a "coming soon" label.
    #[serde(default)]
    pub coming_soon: bool,
    /// Whether this mesh is the spinning fan blades.
    #[serde(default)]
    pub fan_blades: bool,
    /// Optional mesh behavior.
    #[serde(default)]
    pub action: Option<MeshAction>,
}

impl MeshNode {
    /// Human readable label derived from the model key.
    pub fn label(&self) -> String {
        self.model_key.replace('_', " ")
    }

    /// Returns whether the mesh has any banner or hover text.
    pub fn is_labeled(&self) -> bool {
        self.clicked_content.is_some() || self.hovered_content.is_some()
    }
}

/// Node of the room tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    /// Leaf mesh.
    Mesh(MeshNode),
    /// Named group of child nodes.
    Group {
        /// Group key inside the room model.
        group_key: String,
        /// Ordered children.
        children: Vec<SceneNode>,
    },
}

impl SceneNode {
    fn key(&self) -> &str {
        match self {
            Self::Mesh(mesh) => &mesh.model_key,
            Self::Group { group_key, .. } => group_key,
        }
    }
}

/// Validated room tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneTree {
    roots: Vec<SceneNode>,
}

impl SceneTree {
    /// Builds a tree from root nodes, validating keys and group contents.
    pub fn new(roots: Vec<SceneNode>) -> Result<Self, SceneError> {
        validate_nodes(&roots, "")?;
        Ok(Self { roots })
    }

    /// Parses and validates a JSON array of root nodes.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let roots: Vec<SceneNode> =
            serde_json::from_str(json).map_err(|err| SceneError::Malformed(err.to_string()))?;
        Self::new(roots)
    }

    /// Root nodes in declaration order.
    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    /// First mesh with `model_key` in depth-first order.
    pub fn find_mesh(&self, model_key: &str) -> Option<&MeshNode> {
        let mut found = None;
        self.visit_meshes(|_, mesh| {
            if found.is_none() && mesh.model_key == model_key {
                found = Some(mesh);
            }
        });
        found
    }

    /// Mesh at a full `Group/.../Model` path.
    pub fn mesh_at(&self, path: &str) -> Option<&MeshNode> {
        let mut nodes = self.roots.as_slice();
        let mut segments = path.split(PATH_SEPARATOR).peekable();
        while let Some(segment) = segments.next() {
            let node = nodes.iter().find(|node| node.key() == segment)?;
            let is_last = segments.peek().is_none();
            match node {
                SceneNode::Mesh(mesh) if is_last => return Some(mesh),
                SceneNode::Mesh(_) => return None,
                SceneNode::Group { children, .. } => nodes = children,
            }
        }
        None
    }

    /// Total number of meshes in the tree.
    pub fn mesh_count(&self) -> usize {
        let mut count = 0;
        self.visit_meshes(|_, _| count += 1);
        count
    }

    /// Paths and meshes carrying banner or hover text, depth-first.
    pub fn labeled_meshes(&self) -> Vec<(String, &MeshNode)> {
        let mut labeled = Vec::new();
        self.visit_meshes(|path, mesh| {
            if mesh.is_labeled() {
                labeled.push((path.to_string(), mesh));
            }
        });
        labeled
    }

    /// Calls `visit` for every mesh with its full path, depth-first.
    pub fn visit_meshes<'a>(&'a self, mut visit: impl FnMut(&str, &'a MeshNode)) {
        fn walk<'a>(
            nodes: &'a [SceneNode],
            parent: &str,
            visit: &mut impl FnMut(&str, &'a MeshNode),
        ) {
            for node in nodes {
                let path = node_path(parent, node.key());
                match node {
                    SceneNode::Mesh(mesh) => visit(&path, mesh),
                    SceneNode::Group { children, .. } => walk(children, &path, visit),
                }
            }
        }

        walk(&self.roots, "", &mut visit);
    }
}

/// Joins a parent path and a node key.
pub fn node_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{key}")
    }
}

fn validate_nodes(nodes: &[SceneNode], parent: &str) -> Result<(), SceneError> {
    for node in nodes {
        if node.key().trim().is_empty() {
            return Err(SceneError::EmptyKey {
                parent: parent.to_string(),
            });
        }
        if let SceneNode::Group { children, .. } = node {
            let path = node_path(parent, node.key());
            if children.is_empty() {
                return Err(SceneError::EmptyGroup(path));
            }
            validate_nodes(children, &path)?;
        }
    }
    Ok(())
}
