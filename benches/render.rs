// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{SystemTime, UNIX_EPOCH};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use flowstream::model::{Diagram, DiagramKind, NodeType};
use flowstream::render::{export_dot, RenderOptions};
use flowstream::store::SnapshotStore;

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

fn diagram_small() -> Diagram {
    let mut diagram = Diagram::new(DiagramKind::Dfd);
    diagram.add_node("Customer", NodeType::ExternalEntity).unwrap();
    diagram.add_node("OrderService", NodeType::Process).unwrap();
    diagram.add_node("OrdersDb", NodeType::DataStore).unwrap();
    diagram.add_connection("Customer", "OrderService", "Places Order", false).unwrap();
    diagram.add_connection("OrderService", "OrdersDb", "Persists Order", true).unwrap();
    diagram
}

fn diagram_medium() -> Diagram {
    let mut diagram = Diagram::new(DiagramKind::ProcessFlow);
    for i in 0..100 {
        let node_type = match i % 3 {
            0 => NodeType::Process,
            1 => NodeType::Decision,
            _ => NodeType::StartEnd,
        };
        diagram.add_node(format!("Step {i}"), node_type).unwrap();
    }
    for i in 0..99 {
        diagram
            .add_connection(
                format!("Step {i}"),
                format!("Step {}", i + 1),
                format!("next {i}"),
                i % 7 == 0,
            )
            .unwrap();
    }
    diagram
}

// Benchmark identity (keep stable):
// - Group names in this file: `render.export_dot`, `store.save`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small`, `medium_chain`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_export_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.export_dot");

    let small = diagram_small();
    let options = RenderOptions::default();
    group.bench_function("small", |b| {
        b.iter(|| black_box(export_dot(black_box(&small), black_box(&options))).len())
    });

    let medium = diagram_medium();
    group.bench_function("medium_chain", |b| {
        b.iter(|| black_box(export_dot(black_box(&medium), black_box(&options))).len())
    });

    let pruning = RenderOptions::default().with_prune_unconnected(true);
    group.bench_function("medium_chain_pruned", |b| {
        b.iter(|| black_box(export_dot(black_box(&medium), black_box(&pruning))).len())
    });

    group.finish();
}

fn benches_store_save(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.save");

    let medium = diagram_medium();
    group.bench_function("io_medium_chain", move |b| {
        b.iter_batched_ref(
            || TempDir::new("store_save_io_medium"),
            |tmp| {
                let store = SnapshotStore::new(tmp.path());
                let path = store.save(black_box(&medium), "bench").expect("save");
                black_box(std::fs::metadata(path).expect("snapshot metadata").len())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benches_export_dot, benches_store_save);
criterion_main!(benches);
