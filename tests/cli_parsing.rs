//! Tests for CLI option parsing and conversion into the library config.

use clap::Parser;
use std::path::PathBuf;
use urlsift::filter::{DedupMode, LedgerMode};
use urlsift::{Config, LogFormat, LogLevel, Opt};

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["urlsift"]).unwrap();
    assert_eq!(opt.list, PathBuf::from("-"));
    assert!(opt.filters.is_empty());
    assert!(!opt.quiet);
    assert!(!opt.color);
    assert!(!opt.list_filters);
    assert_eq!(opt.log_level, LogLevel::Info);
    assert_eq!(opt.log_format, LogFormat::Plain);

    let config = Config::from(opt);
    assert!(config.reads_stdin());
    assert!(config.echo_stdout);
}

#[test]
fn test_short_flags() {
    let opt = Opt::try_parse_from([
        "urlsift",
        "-l",
        "urls.txt",
        "-f",
        "hasparams,nocontent",
        "-w",
        "php,json",
        "-p",
        "FUZZ",
        "-o",
        "out.txt",
        "-q",
        "-c",
    ])
    .unwrap();

    assert_eq!(opt.list, PathBuf::from("urls.txt"));
    assert_eq!(opt.filters, vec!["hasparams", "nocontent"]);
    assert_eq!(opt.whitelist.as_deref(), Some("php,json"));
    assert_eq!(opt.params.as_deref(), Some("FUZZ"));
    assert_eq!(opt.output, Some(PathBuf::from("out.txt")));
    assert!(opt.quiet);
    assert!(opt.color);
}

#[test]
fn test_long_flags() {
    let opt = Opt::try_parse_from([
        "urlsift",
        "--list",
        "urls.txt",
        "--filter",
        "vuln",
        "--filter",
        "xss",
        "--blacklist",
        "asp",
        "--output-json",
        "out.json",
        "--output-csv",
        "out.csv",
        "--patterns-dir",
        "/tmp/patterns",
        "--strict-params",
        "--literal-dedup",
        "--keep-js-bundles",
        "--log-level",
        "trace",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert_eq!(opt.filters, vec!["vuln", "xss"]);
    assert_eq!(opt.log_level, LogLevel::Trace);

    let config = Config::from(opt);
    assert_eq!(config.blacklist, vec!["asp"]);
    assert_eq!(config.output_json, Some(PathBuf::from("out.json")));
    assert_eq!(config.output_csv, Some(PathBuf::from("out.csv")));
    assert_eq!(config.patterns_dir, Some(PathBuf::from("/tmp/patterns")));
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.custom_filter_names(), vec!["xss"]);

    let filter_config = config.filter_config().unwrap();
    assert!(filter_config.vuln);
    assert!(!filter_config.drop_js_bundles);
    assert_eq!(filter_config.ledger_mode, LedgerMode::Strict);
    assert_eq!(filter_config.dedup_mode, DedupMode::Literal);
}

#[test]
fn test_quiet_lowers_log_level() {
    let opt = Opt::try_parse_from(["urlsift", "--quiet", "--log-level", "debug"]).unwrap();
    let config = Config::from(opt);
    assert!(config.quiet);
    assert_eq!(config.log_level, LogLevel::Error);
}

#[test]
fn test_list_filters_flag() {
    let opt = Opt::try_parse_from(["urlsift", "--list-filters", "-q"]).unwrap();
    assert!(opt.list_filters);
    assert!(opt.quiet);
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Opt::try_parse_from(["urlsift", "--log-level", "loud"]).is_err());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Opt::try_parse_from(["urlsift", "--threads", "4"]).is_err());
}

#[test]
fn test_conflicting_filters_surface_from_config() {
    let opt = Opt::try_parse_from(["urlsift", "-f", "hasparam,noparam"]).unwrap();
    let err = Config::from(opt).filter_config().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid filters provided! hasparams and noparams can't be used at the same time"
    );
}
