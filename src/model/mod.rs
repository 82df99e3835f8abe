// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The diagram model: kinds, nodes, connections, and validated mutations.

pub mod connection;
pub mod diagram;
pub mod node;

pub use connection::Connection;
pub use diagram::{Diagram, DiagramKind, UnknownDiagramKind, ValidationError};
pub use node::{Node, NodeType, Shape, UnknownNodeType};
