// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flowstream-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flowstream and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Flowstream CLI entrypoint.
//!
//! `list` prints the snapshot names saved for a diagram kind; `render`
//! loads a snapshot and hands it to the Graphviz backend.

use std::error::Error;

use flowstream::model::DiagramKind;
use flowstream::render::{render_to_file, OutputFormat, RenderOptions};
use flowstream::store::SnapshotStore;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} list <kind> [--dir <root>]\n  {program} render <kind> <snapshot> [--format <png|svg|pdf|dot>] [--engine <dot|neato|fdp|sfdp|twopi|circo>] [--font-size <8..30>] [--label-distance <1.0..5.0>] [--label-position <n|ne|e|se|s|sw|w|nw|c>] [--prune] [--out <stem>] [--dir <root>]\n\n<kind> is one of dfd, bpmn, uml, erd, process_flow.\n\nSnapshots are read from the root directory (default: the current working\ndirectory). `render` writes `<stem>.<format>`; the default stem is the\nsnapshot name."
    );
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    List { kind: DiagramKind },
    Render { kind: DiagramKind, snapshot: String },
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    command: Command,
    options: RenderOptions,
    out: Option<String>,
    dir: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let command = args.next().ok_or(())?;
    let kind: DiagramKind = args.next().ok_or(())?.parse().map_err(|_| ())?;

    let command = match command.as_str() {
        "list" => Command::List { kind },
        "render" => {
            let snapshot = args.next().ok_or(())?;
            if snapshot.starts_with('-') {
                return Err(());
            }
            Command::Render { kind, snapshot }
        }
        _ => return Err(()),
    };

    let mut options = RenderOptions::default();
    let mut out = None;
    let mut dir = None;
    let mut seen_format = false;
    let mut seen_engine = false;
    let mut seen_font_size = false;
    let mut seen_label_distance = false;
    let mut seen_label_position = false;
    let mut seen_prune = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dir" => {
                if dir.is_some() {
                    return Err(());
                }
                dir = Some(args.next().ok_or(())?);
            }
            "--format" if matches!(command, Command::Render { .. }) => {
                if seen_format {
                    return Err(());
                }
                seen_format = true;
                let raw = args.next().ok_or(())?;
                options = options.with_format(raw.parse().map_err(|_| ())?);
            }
            "--engine" if matches!(command, Command::Render { .. }) => {
                if seen_engine {
                    return Err(());
                }
                seen_engine = true;
                let raw = args.next().ok_or(())?;
                options = options.with_engine(raw.parse().map_err(|_| ())?);
            }
            "--font-size" if matches!(command, Command::Render { .. }) => {
                if seen_font_size {
                    return Err(());
                }
                seen_font_size = true;
                let raw = args.next().ok_or(())?;
                options = options.with_font_size(raw.parse().map_err(|_| ())?);
            }
            "--label-distance" if matches!(command, Command::Render { .. }) => {
                if seen_label_distance {
                    return Err(());
                }
                seen_label_distance = true;
                let raw = args.next().ok_or(())?;
                options = options.with_label_distance(raw.parse().map_err(|_| ())?);
            }
            "--label-position" if matches!(command, Command::Render { .. }) => {
                if seen_label_position {
                    return Err(());
                }
                seen_label_position = true;
                let raw = args.next().ok_or(())?;
                options = options.with_label_position(raw.parse().map_err(|_| ())?);
            }
            "--prune" if matches!(command, Command::Render { .. }) => {
                if seen_prune {
                    return Err(());
                }
                seen_prune = true;
                options = options.with_prune_unconnected(true);
            }
            "--out" if matches!(command, Command::Render { .. }) => {
                if out.is_some() {
                    return Err(());
                }
                out = Some(args.next().ok_or(())?);
            }
            _ => return Err(()),
        }
    }

    Ok(CliOptions { command, options, out, dir })
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "flowstream".to_owned());

        let cli = match parse_options(args) {
            Ok(cli) => cli,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let store = SnapshotStore::new(cli.dir.unwrap_or_else(|| ".".to_owned()));

        match cli.command {
            Command::List { kind } => {
                for name in store.list(kind)? {
                    println!("{name}");
                }
            }
            Command::Render { kind, snapshot } => {
                let diagram = store.load(kind, &snapshot)?;
                let stem = cli.out.unwrap_or_else(|| snapshot.clone());
                let path = render_to_file(&diagram, &cli.options, stem)?;
                if cli.options.format() == OutputFormat::Dot {
                    println!("wrote DOT source to {}", path.display());
                } else {
                    println!("rendered {} to {}", snapshot, path.display());
                }
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("flowstream: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, Command};
    use flowstream::model::DiagramKind;
    use flowstream::render::{LayoutEngine, OutputFormat};

    fn args(parts: &[&str]) -> impl Iterator<Item = String> {
        parts.iter().map(|part| (*part).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_list() {
        let cli = parse_options(args(&["list", "dfd"])).expect("parse options");
        assert_eq!(cli.command, Command::List { kind: DiagramKind::Dfd });
        assert!(cli.dir.is_none());
    }

    #[test]
    fn parses_list_with_dir() {
        let cli = parse_options(args(&["list", "erd", "--dir", "snapshots"]))
            .expect("parse options");
        assert_eq!(cli.command, Command::List { kind: DiagramKind::Erd });
        assert_eq!(cli.dir.as_deref(), Some("snapshots"));
    }

    #[test]
    fn parses_render_with_defaults() {
        let cli = parse_options(args(&["render", "bpmn", "orders"])).expect("parse options");
        assert_eq!(
            cli.command,
            Command::Render { kind: DiagramKind::Bpmn, snapshot: "orders".to_owned() }
        );
        assert_eq!(cli.options.format(), OutputFormat::Png);
        assert!(cli.out.is_none());
    }

    #[test]
    fn parses_render_flags() {
        let cli = parse_options(args(&[
            "render",
            "dfd",
            "orders",
            "--format",
            "svg",
            "--engine",
            "neato",
            "--font-size",
            "16",
            "--label-distance",
            "2.5",
            "--label-position",
            "ne",
            "--prune",
            "--out",
            "build/orders",
        ]))
        .expect("parse options");

        assert_eq!(cli.options.format(), OutputFormat::Svg);
        assert_eq!(cli.options.engine(), LayoutEngine::Neato);
        assert_eq!(cli.options.font_size(), 16);
        assert_eq!(cli.options.label_distance(), 2.5);
        assert!(cli.options.prune_unconnected());
        assert_eq!(cli.out.as_deref(), Some("build/orders"));
    }

    #[test]
    fn rejects_unknown_kinds_and_commands() {
        parse_options(args(&["list", "flowchart"])).unwrap_err();
        parse_options(args(&["draw", "dfd"])).unwrap_err();
        parse_options(args(&[])).unwrap_err();
    }

    #[test]
    fn rejects_render_without_a_snapshot_name() {
        parse_options(args(&["render", "dfd"])).unwrap_err();
        parse_options(args(&["render", "dfd", "--prune"])).unwrap_err();
    }

    #[test]
    fn rejects_render_flags_on_list() {
        parse_options(args(&["list", "dfd", "--format", "svg"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags() {
        parse_options(args(&["render", "dfd", "x", "--prune", "--prune"])).unwrap_err();
        parse_options(args(&["render", "dfd", "x", "--format", "svg", "--format", "png"]))
            .unwrap_err();
        parse_options(args(&["list", "dfd", "--dir", "a", "--dir", "b"])).unwrap_err();
    }

    #[test]
    fn rejects_missing_flag_values() {
        parse_options(args(&["render", "dfd", "x", "--format"])).unwrap_err();
        parse_options(args(&["list", "dfd", "--dir"])).unwrap_err();
    }
}
