// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering adapter: DOT emission plus the Graphviz process backend.
//!
//! Layout itself is delegated entirely to Graphviz; this module only
//! translates the model into draw instructions and shells out.

pub mod dot;
pub mod graphviz;
pub mod options;

pub use dot::export_dot;
pub use graphviz::{render, render_to_file, RenderError};
pub use options::{
    LabelPosition, LayoutEngine, OptionsError, OutputFormat, RenderOptions, UnknownOption,
};
