// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::Diagram;

use super::options::RenderOptions;

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Emit deterministic DOT source for a diagram.
///
/// Nodes and connections are emitted in insertion order. Each node gets its
/// type's shape; each connection becomes a directed `vee`-arrow edge, and a
/// bidirectional connection additionally emits an invisible reverse edge so
/// the layout engine reserves symmetric spacing.
pub fn export_dot(diagram: &Diagram, options: &RenderOptions) -> String {
    let font_size = options.font_size();
    let mut out = String::new();

    out.push_str("// ");
    out.push_str(&diagram.kind().as_str().to_ascii_uppercase());
    out.push_str(" Diagram\n");
    out.push_str("digraph {\n");
    out.push_str(&format!("\tnode [fontname=\"Arial\" fontsize=\"{font_size}\"]\n"));
    out.push_str(&format!(
        "\tedge [fontname=\"Arial\" fontsize=\"{font_size}\" color=\"#00000080\" bgcolor=\"#ffffffcc\" labeldistance=\"{}\" labelposition=\"{}\"]\n",
        options.label_distance(),
        options.label_position().as_str(),
    ));

    let prune = options.prune_unconnected() && !diagram.connections().is_empty();
    let referenced: BTreeSet<&str> = diagram
        .connections()
        .iter()
        .flat_map(|connection| [connection.source(), connection.destination()])
        .collect();

    for node in diagram.nodes() {
        if prune && !referenced.contains(node.name()) {
            continue;
        }
        out.push_str(&format!(
            "\t{} [label={} shape=\"{}\"]\n",
            quote(node.name()),
            quote(node.name()),
            node.node_type().shape().as_str(),
        ));
    }

    for connection in diagram.connections() {
        let source = quote(connection.source());
        let destination = quote(connection.destination());
        if connection.bidirectional() {
            out.push_str(&format!(
                "\t{source} -> {destination} [label={} arrowhead=\"vee\" arrowtail=\"vee\" dir=\"both\" minlen=\"2\"]\n",
                quote(connection.label()),
            ));
            // Reserves symmetric spacing; never drawn.
            out.push_str(&format!(
                "\t{destination} -> {source} [label=\"\" style=\"invis\" minlen=\"2\"]\n"
            ));
        } else {
            out.push_str(&format!(
                "\t{source} -> {destination} [label={} arrowhead=\"vee\" dir=\"forward\" minlen=\"2\"]\n",
                quote(connection.label()),
            ));
        }
    }

    out.push_str("}\n");
    out
}
