// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flowstream: a diagram-building core for DFD, BPMN, UML deployment,
//! ER, and process-flow diagrams.
//!
//! The crate keeps three concerns apart:
//!
//! - [`model`]: diagram kinds, typed nodes, labeled connections, and the
//!   entry-level validation that guards mutations.
//! - [`render`]: deterministic DOT emission and the Graphviz process
//!   backend that turns a diagram into PNG/SVG/PDF bytes.
//! - [`store`]: named JSON snapshots with legacy-format fallbacks.
//!
//! Layout is never computed here; it is delegated to the Graphviz engine
//! selected in [`render::RenderOptions`].

pub mod model;
pub mod render;
pub mod store;
