// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A labeled directed connection between two nodes, referenced by name.
///
/// Endpoints are plain names rather than indices: a connection keeps
/// pointing at its names even after the node list changes, which is why
/// removing a node leaves its connections dangling on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    source: String,
    destination: String,
    label: String,
    bidirectional: bool,
}

impl Connection {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        label: impl Into<String>,
        bidirectional: bool,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            label: label.into(),
            bidirectional,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bidirectional(&self) -> bool {
        self.bidirectional
    }
}
