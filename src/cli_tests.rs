use clap::Parser;

use super::{Cli, Commands};

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(args)
}

#[test]
fn add_parses_fields() {
    let cli = parse(&[
        "showcase",
        "add",
        "My Site",
        "--desc",
        "A site",
        "--date",
        "2025-02-03",
        "--tags",
        "web, ui",
    ]);
    match cli.command {
        Commands::Add(args) => {
            assert_eq!(args.title, "My Site");
            assert_eq!(args.desc, "A site");
            assert_eq!(args.date.as_deref(), Some("2025-02-03"));
            assert_eq!(args.tags, "web, ui");
        }
        other => panic!("expected Add, got {:?}", other),
    }
}

#[test]
fn add_requires_description() {
    assert!(Cli::try_parse_from(["showcase", "add", "Title"]).is_err());
}

#[test]
fn ls_parses_filters() {
    let cli = parse(&["showcase", "ls", "-q", "java", "-t", "web", "-s", "za", "--json"]);
    match cli.command {
        Commands::Ls(args) => {
            assert_eq!(args.query.as_deref(), Some("java"));
            assert_eq!(args.tag.as_deref(), Some("web"));
            assert_eq!(args.sort.as_deref(), Some("za"));
            assert!(args.json);
        }
        other => panic!("expected Ls, got {:?}", other),
    }
}

#[test]
fn edit_fields_are_optional() {
    let cli = parse(&["showcase", "edit", "p_1", "--title", "New"]);
    match cli.command {
        Commands::Edit(args) => {
            assert_eq!(args.id, "p_1");
            assert_eq!(args.title.as_deref(), Some("New"));
            assert!(args.desc.is_none());
            assert!(args.date.is_none());
            assert!(args.tags.is_none());
        }
        other => panic!("expected Edit, got {:?}", other),
    }
}

#[test]
fn global_paths_parse() {
    let cli = parse(&[
        "showcase",
        "--db",
        "/tmp/x.sqlite",
        "--config",
        "/tmp/c.toml",
        "reset",
    ]);
    assert_eq!(cli.db, "/tmp/x.sqlite");
    assert_eq!(cli.config.to_str(), Some("/tmp/c.toml"));
    assert!(matches!(cli.command, Commands::Reset));
}

#[test]
fn command_definition_is_consistent() {
    super::styled_command().debug_assert();
}

#[test]
fn short_d_means_description_only() {
    assert!(Cli::try_parse_from(["showcase", "-d", "/tmp/x.sqlite", "reset"]).is_err());
    let cli = parse(&["showcase", "add", "Title", "-d", "Body"]);
    match cli.command {
        Commands::Add(args) => assert_eq!(args.desc, "Body"),
        other => panic!("expected Add, got {:?}", other),
    }
}
