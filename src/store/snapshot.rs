// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{Connection, Diagram, DiagramKind, Node, NodeType};

#[derive(Debug)]
pub enum StoreError {
    EmptyName,
    InvalidName {
        name: String,
    },
    /// Neither the canonical nor the legacy snapshot file exists.
    NotFound {
        path: PathBuf,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidNodeType {
        path: PathBuf,
        value: String,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("snapshot name must not be empty"),
            Self::InvalidName { name } => {
                write!(f, "snapshot name must not contain path separators: {name:?}")
            }
            Self::NotFound { path } => write!(f, "snapshot not found at {path:?}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidNodeType { path, value } => {
                write!(f, "unknown node type {value:?} in snapshot at {path:?}")
            }
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::EmptyName
            | Self::InvalidName { .. }
            | Self::NotFound { .. }
            | Self::InvalidNodeType { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiagramJson {
    #[serde(default)]
    nodes: Vec<NodeJson>,
    // Older documents store the connection list under "flows".
    #[serde(default, alias = "flows")]
    connections: Vec<ConnectionJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeJson {
    name: String,
    #[serde(rename = "type")]
    node_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConnectionJson {
    source: String,
    destination: String,
    label: String,
    #[serde(default)]
    bidirectional: bool,
}

fn diagram_to_json(diagram: &Diagram) -> DiagramJson {
    DiagramJson {
        nodes: diagram
            .nodes()
            .iter()
            .map(|node| NodeJson {
                name: node.name().to_owned(),
                node_type: node.node_type().as_str().to_owned(),
            })
            .collect(),
        connections: diagram
            .connections()
            .iter()
            .map(|connection| ConnectionJson {
                source: connection.source().to_owned(),
                destination: connection.destination().to_owned(),
                label: connection.label().to_owned(),
                bidirectional: connection.bidirectional(),
            })
            .collect(),
    }
}

fn diagram_from_json(
    kind: DiagramKind,
    diagram_json: DiagramJson,
    path: &Path,
) -> Result<Diagram, StoreError> {
    let mut nodes = Vec::with_capacity(diagram_json.nodes.len());
    for node_json in diagram_json.nodes {
        let node_type: NodeType =
            node_json.node_type.parse().map_err(|_| StoreError::InvalidNodeType {
                path: path.to_path_buf(),
                value: node_json.node_type.clone(),
            })?;
        nodes.push(Node::new(node_json.name, node_type));
    }

    let connections = diagram_json
        .connections
        .into_iter()
        .map(|connection_json| {
            Connection::new(
                connection_json.source,
                connection_json.destination,
                connection_json.label,
                connection_json.bidirectional,
            )
        })
        .collect();

    Ok(Diagram::from_parts(kind, nodes, connections))
}

fn validate_snapshot_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if name.contains('/') || name.contains('\\') {
        return Err(StoreError::InvalidName { name: name.to_owned() });
    }
    Ok(())
}

fn write_atomic(root: &Path, path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    fs::create_dir_all(root)
        .map_err(|source| StoreError::Io { path: root.to_path_buf(), source })?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("snapshot.json");
    let tmp_path = root.join(format!(".{file_name}.tmp-{}", std::process::id()));

    fs::write(&tmp_path, contents)
        .map_err(|source| StoreError::Io { path: tmp_path.clone(), source })?;

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io { path: path.to_path_buf(), source });
    }

    Ok(())
}

/// Named JSON snapshots of diagrams, one independent namespace per
/// diagram kind, all kept flat in a root directory.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The canonical path for a snapshot: `{kind}_data_{name}.json`.
    pub fn snapshot_path(&self, kind: DiagramKind, name: &str) -> PathBuf {
        self.root.join(format!("{}_data_{name}.json", kind.as_str()))
    }

    fn legacy_snapshot_path(&self, kind: DiagramKind, name: &str) -> PathBuf {
        self.root.join(format!("{}_flows_{name}.json", kind.as_str()))
    }

    /// Persists the diagram under `name`, overwriting any existing snapshot
    /// of the same derived filename without confirmation. Returns the
    /// written path.
    pub fn save(&self, diagram: &Diagram, name: &str) -> Result<PathBuf, StoreError> {
        validate_snapshot_name(name)?;

        let path = self.snapshot_path(diagram.kind(), name);
        let diagram_json = diagram_to_json(diagram);
        let json_str = serde_json::to_string_pretty(&diagram_json)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;

        write_atomic(&self.root, &path, format!("{json_str}\n").as_bytes())?;
        Ok(path)
    }

    /// Loads the snapshot named `name` for `kind`.
    ///
    /// Falls back to the legacy `{kind}_flows_{name}.json` file when the
    /// canonical one is missing. The loaded diagram is returned by value:
    /// a failed load can never disturb the caller's current state.
    pub fn load(&self, kind: DiagramKind, name: &str) -> Result<Diagram, StoreError> {
        validate_snapshot_name(name)?;

        let path = self.snapshot_path(kind, name);
        let (path, json_str) = match fs::read_to_string(&path) {
            Ok(json_str) => (path, json_str),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                let legacy_path = self.legacy_snapshot_path(kind, name);
                match fs::read_to_string(&legacy_path) {
                    Ok(json_str) => (legacy_path, json_str),
                    Err(legacy_source) if legacy_source.kind() == io::ErrorKind::NotFound => {
                        return Err(StoreError::NotFound { path });
                    }
                    Err(legacy_source) => {
                        return Err(StoreError::Io { path: legacy_path, source: legacy_source });
                    }
                }
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let diagram_json = match serde_json::from_str::<DiagramJson>(&json_str) {
            Ok(diagram_json) => diagram_json,
            Err(source) => {
                // The oldest files are a bare top-level array of connections.
                match serde_json::from_str::<Vec<ConnectionJson>>(&json_str) {
                    Ok(connections) => DiagramJson { nodes: Vec::new(), connections },
                    Err(_) => return Err(StoreError::Json { path, source }),
                }
            }
        };

        diagram_from_json(kind, diagram_json, &path)
    }

    /// Lists the snapshot names available for `kind`, covering both the
    /// canonical and the legacy filename convention, sorted and
    /// deduplicated.
    pub fn list(&self, kind: DiagramKind) -> Result<Vec<String>, StoreError> {
        // Kind identifiers are lowercase ASCII, so no escaping is needed.
        let pattern = Regex::new(&format!(r"^{}_(?:data|flows)_(.+)\.json$", kind.as_str()))
            .expect("snapshot filename pattern is valid");

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path: self.root.clone(), source }),
        };

        let mut names = Vec::new();
        for entry in entries.filter_map(|entry| entry.ok()) {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if let Some(captures) = pattern.captures(file_name) {
                names.push(captures[1].to_owned());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}
