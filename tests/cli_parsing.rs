//! CLI argument parsing tests.

use std::path::PathBuf;

use clap::Parser;

use zone_exposure::{Config, MalformedIpPolicy};

#[test]
fn test_minimal_invocation() {
    let config = Config::parse_from(["zone_exposure", "zones.json"]);
    assert_eq!(config.zone_file, PathBuf::from("zones.json"));
    assert!(config.output.is_none());
}

#[test]
fn test_missing_zone_file_is_an_error() {
    let result = Config::try_parse_from(["zone_exposure"]);
    assert!(result.is_err());
}

#[test]
fn test_output_flag() {
    let config = Config::parse_from(["zone_exposure", "zones.json", "-o", "out.csv"]);
    assert_eq!(config.output, Some(PathBuf::from("out.csv")));

    let config =
        Config::parse_from(["zone_exposure", "zones.json", "--output", "inventory.csv"]);
    assert_eq!(config.output, Some(PathBuf::from("inventory.csv")));
}

#[test]
fn test_concurrency_flag() {
    let config = Config::parse_from(["zone_exposure", "zones.json", "--max-concurrency", "4"]);
    assert_eq!(config.max_concurrency, 4);
}

#[test]
fn test_malformed_ip_policy_values() {
    let config = Config::parse_from(["zone_exposure", "zones.json", "--malformed-ips", "public"]);
    assert_eq!(config.malformed_ips, MalformedIpPolicy::Public);

    let config = Config::parse_from(["zone_exposure", "zones.json", "--malformed-ips", "drop"]);
    assert_eq!(config.malformed_ips, MalformedIpPolicy::Drop);

    let result =
        Config::try_parse_from(["zone_exposure", "zones.json", "--malformed-ips", "bogus"]);
    assert!(result.is_err());
}
