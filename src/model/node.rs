// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// The vocabulary of node types across all diagram kinds.
///
/// The display strings (`as_str`) are the exact strings persisted in
/// snapshot files, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Process,
    ExternalEntity,
    DataStore,
    Event,
    Gateway,
    Component,
    Node,
    Class,
    Entity,
    Attribute,
    Decision,
    StartEnd,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Process => "Process",
            Self::ExternalEntity => "External Entity",
            Self::DataStore => "Data Store",
            Self::Event => "Event",
            Self::Gateway => "Gateway",
            Self::Component => "Component",
            Self::Node => "Node",
            Self::Class => "Class",
            Self::Entity => "Entity",
            Self::Attribute => "Attribute",
            Self::Decision => "Decision",
            Self::StartEnd => "Start/End",
        }
    }

    /// The Graphviz shape this node type is drawn with.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Process => Shape::Ellipse,
            Self::ExternalEntity => Shape::Square,
            Self::DataStore => Shape::Cylinder,
            Self::Event => Shape::Circle,
            Self::Gateway => Shape::Diamond,
            Self::Component => Shape::Component,
            Self::Node => Shape::Box3d,
            Self::Class => Shape::Record,
            Self::Entity => Shape::Box,
            Self::Attribute => Shape::Oval,
            Self::Decision => Shape::Diamond,
            Self::StartEnd => Shape::Ellipse,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = UnknownNodeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Process" => Ok(Self::Process),
            "External Entity" => Ok(Self::ExternalEntity),
            "Data Store" => Ok(Self::DataStore),
            "Event" => Ok(Self::Event),
            "Gateway" => Ok(Self::Gateway),
            "Component" => Ok(Self::Component),
            "Node" => Ok(Self::Node),
            "Class" => Ok(Self::Class),
            "Entity" => Ok(Self::Entity),
            "Attribute" => Ok(Self::Attribute),
            "Decision" => Ok(Self::Decision),
            "Start/End" => Ok(Self::StartEnd),
            _ => Err(UnknownNodeType { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeType {
    value: String,
}

impl UnknownNodeType {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node type: {:?}", self.value)
    }
}

impl std::error::Error for UnknownNodeType {}

/// Graphviz node shapes used by the type→shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Ellipse,
    Square,
    Cylinder,
    Circle,
    Diamond,
    Component,
    Box3d,
    Record,
    Box,
    Oval,
}

impl Shape {
    /// The Graphviz `shape` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Square => "square",
            Self::Cylinder => "cylinder",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Component => "component",
            Self::Box3d => "box3d",
            Self::Record => "record",
            Self::Box => "box",
            Self::Oval => "oval",
        }
    }
}

/// A named node in a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    node_type: NodeType,
}

impl Node {
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self { name: name.into(), node_type }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeType, Shape};

    #[test]
    fn node_type_display_strings_roundtrip() {
        let types = [
            NodeType::Process,
            NodeType::ExternalEntity,
            NodeType::DataStore,
            NodeType::Event,
            NodeType::Gateway,
            NodeType::Component,
            NodeType::Node,
            NodeType::Class,
            NodeType::Entity,
            NodeType::Attribute,
            NodeType::Decision,
            NodeType::StartEnd,
        ];

        for node_type in types {
            let parsed: NodeType = node_type.as_str().parse().expect("parse display string");
            assert_eq!(parsed, node_type);
        }
    }

    #[test]
    fn node_type_rejects_unknown_strings() {
        let err = "Lollipop".parse::<NodeType>().unwrap_err();
        assert_eq!(err.value(), "Lollipop");
    }

    #[test]
    fn shape_table_matches_drawing_conventions() {
        assert_eq!(NodeType::Process.shape(), Shape::Ellipse);
        assert_eq!(NodeType::ExternalEntity.shape(), Shape::Square);
        assert_eq!(NodeType::DataStore.shape(), Shape::Cylinder);
        assert_eq!(NodeType::Event.shape(), Shape::Circle);
        assert_eq!(NodeType::Gateway.shape(), Shape::Diamond);
        assert_eq!(NodeType::Component.shape(), Shape::Component);
        assert_eq!(NodeType::Node.shape(), Shape::Box3d);
        assert_eq!(NodeType::Class.shape(), Shape::Record);
        assert_eq!(NodeType::Entity.shape(), Shape::Box);
        assert_eq!(NodeType::Attribute.shape(), Shape::Oval);
        assert_eq!(NodeType::Decision.shape(), Shape::Diamond);
        assert_eq!(NodeType::StartEnd.shape(), Shape::Ellipse);
    }
}
