// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end walk through the library surface: build a diagram, emit DOT,
//! persist it, list it, and load it back.

use std::time::{SystemTime, UNIX_EPOCH};

use flowstream::model::{Diagram, DiagramKind, NodeType};
use flowstream::render::{export_dot, RenderOptions};
use flowstream::store::{SnapshotStore, StoreError};

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("flowstream-{prefix}-{}-{nanos}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[test]
fn build_render_save_list_load() {
    let tmp = TempDir::new("roundtrip");
    let store = SnapshotStore::new(tmp.path());

    let mut diagram = Diagram::new(DiagramKind::Dfd);
    diagram.add_node("Customer", NodeType::ExternalEntity).unwrap();
    diagram.add_node("OrderService", NodeType::Process).unwrap();
    diagram.add_node("OrdersDb", NodeType::DataStore).unwrap();
    diagram.add_connection("Customer", "OrderService", "Places Order", false).unwrap();
    diagram.add_connection("OrderService", "OrdersDb", "Persists Order", true).unwrap();

    let dot = export_dot(&diagram, &RenderOptions::default());
    assert!(dot.starts_with("// DFD Diagram\ndigraph {\n"));
    assert!(dot.contains("\"Customer\" [label=\"Customer\" shape=\"square\"]"));
    assert!(dot.contains("\"OrdersDb\" [label=\"OrdersDb\" shape=\"cylinder\"]"));
    assert!(dot.contains(
        "\"Customer\" -> \"OrderService\" [label=\"Places Order\" arrowhead=\"vee\" dir=\"forward\" minlen=\"2\"]"
    ));
    assert!(dot.contains("dir=\"both\""));

    let path = store.save(&diagram, "orders").unwrap();
    assert_eq!(path, tmp.path().join("dfd_data_orders.json"));

    assert_eq!(store.list(DiagramKind::Dfd).unwrap(), vec!["orders".to_owned()]);
    assert!(store.list(DiagramKind::Bpmn).unwrap().is_empty());

    let loaded = store.load(DiagramKind::Dfd, "orders").unwrap();
    assert_eq!(loaded, diagram);

    // A failed load has no state to disturb: the original diagram is
    // untouched and still renders identically.
    let err = store.load(DiagramKind::Dfd, "missing").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
    assert_eq!(export_dot(&diagram, &RenderOptions::default()), dot);
}

#[test]
fn legacy_documents_load_through_the_same_api() {
    let tmp = TempDir::new("legacy");
    let store = SnapshotStore::new(tmp.path());

    std::fs::write(
        tmp.path().join("process_flow_flows_approval.json"),
        r#"{
  "nodes": [
    {"name": "Start", "type": "Start/End"},
    {"name": "Review", "type": "Process"}
  ],
  "flows": [
    {"source": "Start", "destination": "Review", "label": "submit"}
  ]
}"#,
    )
    .unwrap();

    let loaded = store.load(DiagramKind::ProcessFlow, "approval").unwrap();
    assert_eq!(loaded.nodes().len(), 2);
    assert_eq!(loaded.nodes()[0].node_type(), NodeType::StartEnd);
    assert_eq!(loaded.connections().len(), 1);
    assert!(!loaded.connections()[0].bidirectional());

    // Saving the loaded diagram migrates it to the canonical filename.
    let path = store.save(&loaded, "approval").unwrap();
    assert_eq!(path, tmp.path().join("process_flow_data_approval.json"));
    assert_eq!(store.list(DiagramKind::ProcessFlow).unwrap(), vec!["approval".to_owned()]);
}
