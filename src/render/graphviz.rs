// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::model::Diagram;

use super::dot::export_dot;
use super::options::{LayoutEngine, OptionsError, OutputFormat, RenderOptions};

#[derive(Debug)]
pub enum RenderError {
    InvalidOptions {
        source: OptionsError,
    },
    /// The engine binary could not be started (usually: Graphviz not installed).
    Spawn {
        engine: LayoutEngine,
        source: io::Error,
    },
    Pipe {
        engine: LayoutEngine,
        source: io::Error,
    },
    /// The engine ran but exited unsuccessfully.
    Backend {
        engine: LayoutEngine,
        status: Option<i32>,
        stderr: String,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions { source } => write!(f, "invalid render options: {source}"),
            Self::Spawn { engine, source } => {
                write!(f, "cannot start layout engine '{engine}': {source}")
            }
            Self::Pipe { engine, source } => {
                write!(f, "cannot feed DOT source to layout engine '{engine}': {source}")
            }
            Self::Backend { engine, status, stderr } => match status {
                Some(code) => {
                    write!(f, "layout engine '{engine}' failed (exit code {code}): {stderr}")
                }
                None => write!(f, "layout engine '{engine}' was terminated: {stderr}"),
            },
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOptions { source } => Some(source),
            Self::Spawn { source, .. } => Some(source),
            Self::Pipe { source, .. } => Some(source),
            Self::Backend { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Render a diagram to the configured output format.
///
/// The `dot` format returns the generated source without touching any
/// external process; every other format pipes the source through the
/// selected Graphviz engine binary and returns its stdout bytes.
pub fn render(diagram: &Diagram, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    options.validate().map_err(|source| RenderError::InvalidOptions { source })?;

    let dot_source = export_dot(diagram, options);
    if options.format() == OutputFormat::Dot {
        return Ok(dot_source.into_bytes());
    }

    let engine = options.engine();
    let mut child = Command::new(engine.as_str())
        .arg(format!("-T{}", options.format().as_str()))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| RenderError::Spawn { engine, source })?;

    // Scope the handle so stdin is closed before waiting.
    {
        let stdin = child.stdin.take();
        match stdin {
            Some(mut stdin) => stdin
                .write_all(dot_source.as_bytes())
                .map_err(|source| RenderError::Pipe { engine, source })?,
            None => {
                return Err(RenderError::Pipe {
                    engine,
                    source: io::Error::new(io::ErrorKind::BrokenPipe, "no stdin handle"),
                });
            }
        }
    }

    let output = child
        .wait_with_output()
        .map_err(|source| RenderError::Pipe { engine, source })?;

    if !output.status.success() {
        return Err(RenderError::Backend {
            engine,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(output.stdout)
}

/// Render a diagram and write it to `<stem>.<format>`.
///
/// An existing file of the same name is overwritten without confirmation,
/// matching the interactive tool. Returns the written path.
pub fn render_to_file(
    diagram: &Diagram,
    options: &RenderOptions,
    stem: impl Into<PathBuf>,
) -> Result<PathBuf, RenderError> {
    let bytes = render(diagram, options)?;

    let mut path = stem.into();
    let file_name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => format!("{name}.{}", options.format().as_str()),
        None => format!("diagram.{}", options.format().as_str()),
    };
    path.set_file_name(file_name);

    std::fs::write(&path, bytes).map_err(|source| RenderError::Io { path: path.clone(), source })?;
    Ok(path)
}
