//! Tests for decode, check, completions and manpage.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_decode() {
    match parse(&["grafiki", "decode", "https://www.grafiki.app/d#H4sI"]) {
        CliCommand::Decode { token } => assert_eq!(token, "https://www.grafiki.app/d#H4sI"),
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_check() {
    match parse(&["grafiki", "check", "https://h/d#abc"]) {
        CliCommand::Check { url, browser } => {
            assert_eq!(url, "https://h/d#abc");
            assert!(browser.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_browser() {
    match parse(&["grafiki", "check", "https://h/d#abc", "--browser", "firefox"]) {
        CliCommand::Check { browser, .. } => assert_eq!(browser.as_deref(), Some("firefox")),
        _ => panic!("expected Check with --browser"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["grafiki", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["grafiki", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_parse_manpage() {
    assert!(matches!(parse(&["grafiki", "manpage"]), CliCommand::Manpage));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
