//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_ingest() {
    match parse(&["dropgate", "ingest", "a.png", "b.svg"]) {
        CliCommand::Ingest {
            paths,
            max_count,
            max_size,
            json,
        } => {
            assert_eq!(paths, vec![PathBuf::from("a.png"), PathBuf::from("b.svg")]);
            assert!(max_count.is_none());
            assert!(max_size.is_none());
            assert!(!json);
        }
        _ => panic!("expected Ingest"),
    }
}

#[test]
fn cli_parse_ingest_overrides() {
    match parse(&[
        "dropgate",
        "ingest",
        "a.png",
        "--max-count",
        "5",
        "--max-size",
        "1000000",
        "--json",
    ]) {
        CliCommand::Ingest {
            max_count,
            max_size,
            json,
            ..
        } => {
            assert_eq!(max_count, Some(5));
            assert_eq!(max_size, Some(1_000_000));
            assert!(json);
        }
        _ => panic!("expected Ingest with overrides"),
    }
}

#[test]
fn cli_parse_ingest_requires_paths() {
    assert!(Cli::try_parse_from(["dropgate", "ingest"]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["dropgate", "check", "photo.jpeg"]) {
        CliCommand::Check { path } => assert_eq!(path, PathBuf::from("photo.jpeg")),
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_types() {
    assert!(matches!(parse(&["dropgate", "types"]), CliCommand::Types));
}
