// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::connection::Connection;
use super::node::{Node, NodeType};

/// The kind of diagram being built.
///
/// Each kind is an independent namespace: its node/connection lists and its
/// persisted snapshots never mix with another kind's. The per-kind
/// node-type vocabulary and connection term are configuration data for
/// front ends, not separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Dfd,
    Bpmn,
    Uml,
    Erd,
    ProcessFlow,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 5] = [
        DiagramKind::Dfd,
        DiagramKind::Bpmn,
        DiagramKind::Uml,
        DiagramKind::Erd,
        DiagramKind::ProcessFlow,
    ];

    /// The stable lowercase identifier used in snapshot filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dfd => "dfd",
            Self::Bpmn => "bpmn",
            Self::Uml => "uml",
            Self::Erd => "erd",
            Self::ProcessFlow => "process_flow",
        }
    }

    /// The node types a front end offers for this kind.
    pub fn node_types(&self) -> &'static [NodeType] {
        match self {
            Self::Dfd => &[NodeType::Process, NodeType::ExternalEntity, NodeType::DataStore],
            Self::Bpmn => &[NodeType::Event, NodeType::Gateway, NodeType::Process],
            Self::Uml => &[NodeType::Component, NodeType::Node, NodeType::Class],
            Self::Erd => &[NodeType::Entity, NodeType::Attribute],
            Self::ProcessFlow => &[NodeType::Process, NodeType::Decision, NodeType::StartEnd],
        }
    }

    /// What this kind calls its connections ("Data Flows", "Relationships", ...).
    pub fn connection_term(&self) -> &'static str {
        match self {
            Self::Dfd => "Data Flows",
            Self::Bpmn => "Sequence/Message Flows",
            Self::Uml => "Relationships",
            Self::Erd => "Relationships",
            Self::ProcessFlow => "Flows",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramKind {
    type Err = UnknownDiagramKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfd" => Ok(Self::Dfd),
            "bpmn" => Ok(Self::Bpmn),
            "uml" => Ok(Self::Uml),
            "erd" => Ok(Self::Erd),
            "process_flow" => Ok(Self::ProcessFlow),
            _ => Err(UnknownDiagramKind { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDiagramKind {
    value: String,
}

impl UnknownDiagramKind {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownDiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown diagram kind: {:?} (expected dfd, bpmn, uml, erd, or process_flow)",
            self.value
        )
    }
}

impl std::error::Error for UnknownDiagramKind {}

/// Entry-level validation failures for diagram mutations.
///
/// A rejected operation leaves the diagram unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyNodeName,
    MissingConnectionField { field: &'static str },
    SelfLoop { name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNodeName => f.write_str("node name must not be empty"),
            Self::MissingConnectionField { field } => {
                write!(f, "connection {field} must not be empty")
            }
            Self::SelfLoop { name } => {
                write!(f, "connection source and destination are both {name:?}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// The ordered node/connection lists for one diagram kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    kind: DiagramKind,
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl Diagram {
    pub fn new(kind: DiagramKind) -> Self {
        Self { kind, nodes: Vec::new(), connections: Vec::new() }
    }

    /// Reassemble a diagram from persisted sequences, bypassing entry-level
    /// validation so a snapshot loads back exactly as it was saved.
    pub(crate) fn from_parts(
        kind: DiagramKind,
        nodes: Vec<Node>,
        connections: Vec<Connection>,
    ) -> Self {
        Self { kind, nodes, connections }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }

    /// Appends a node.
    ///
    /// Duplicate names are accepted: distinct nodes may legitimately share
    /// a label, and rendering keys on the name as-is.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        node_type: NodeType,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyNodeName);
        }
        self.nodes.push(Node::new(name, node_type));
        Ok(())
    }

    /// Removes the node at `index`, returning it, or `None` when the index
    /// is out of range.
    ///
    /// Connections referencing the removed node's name are kept; dangling
    /// connections are allowed to remain.
    pub fn remove_node(&mut self, index: usize) -> Option<Node> {
        if index < self.nodes.len() {
            Some(self.nodes.remove(index))
        } else {
            None
        }
    }

    /// Appends a connection.
    ///
    /// Source, destination and label must be non-empty and the connection
    /// must not be a self-loop. Endpoint existence is not checked here;
    /// call sites offer the current node names as candidates.
    pub fn add_connection(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        label: impl Into<String>,
        bidirectional: bool,
    ) -> Result<(), ValidationError> {
        let source = source.into();
        let destination = destination.into();
        let label = label.into();

        if source.is_empty() {
            return Err(ValidationError::MissingConnectionField { field: "source" });
        }
        if destination.is_empty() {
            return Err(ValidationError::MissingConnectionField { field: "destination" });
        }
        if label.is_empty() {
            return Err(ValidationError::MissingConnectionField { field: "label" });
        }
        if source == destination {
            return Err(ValidationError::SelfLoop { name: source });
        }

        self.connections.push(Connection::new(source, destination, label, bidirectional));
        Ok(())
    }

    /// Removes the connection at `index`, returning it, or `None` when the
    /// index is out of range.
    pub fn remove_connection(&mut self, index: usize) -> Option<Connection> {
        if index < self.connections.len() {
            Some(self.connections.remove(index))
        } else {
            None
        }
    }

    /// Clears both sequences.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.connections.clear();
    }
}
