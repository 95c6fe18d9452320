//! DNS module tests.

use super::*;
use crate::config::MAX_CHAIN_HOPS;

#[tokio::test]
async fn test_resolve_direct_a_record() {
    let lookup = StaticLookup::new().with_a("www.example.com", &["203.0.113.10"]);
    let ips = resolve_name(&lookup, "www.example.com").await.unwrap();
    assert_eq!(ips, vec!["203.0.113.10"]);
}

#[tokio::test]
async fn test_resolve_follows_cname_chain() {
    let lookup = StaticLookup::new()
        .with_cname("app.example.com", &["origin.example.com"])
        .with_a("origin.example.com", &["198.51.100.5"]);
    let ips = resolve_name(&lookup, "app.example.com").await.unwrap();
    assert_eq!(ips, vec!["198.51.100.5"]);
}

#[tokio::test]
async fn test_resolve_unknown_name_is_empty_not_error() {
    let lookup = StaticLookup::new();
    let ips = resolve_name(&lookup, "nothing.example.com").await.unwrap();
    assert!(ips.is_empty());
}

#[tokio::test]
async fn test_resolve_appends_a_records_before_cname_results() {
    // A name carrying both A records and a CNAME contributes its own
    // addresses first, then the chain's, in order.
    let lookup = StaticLookup::new()
        .with_a("both.example.com", &["192.0.2.1", "192.0.2.2"])
        .with_cname("both.example.com", &["next.example.com"])
        .with_a("next.example.com", &["192.0.2.3"]);
    let ips = resolve_name(&lookup, "both.example.com").await.unwrap();
    assert_eq!(ips, vec!["192.0.2.1", "192.0.2.2", "192.0.2.3"]);
}

#[tokio::test]
async fn test_resolve_multiple_cname_targets_in_record_order() {
    // DNS semantics discourage multiple CNAMEs on one name, but the walk
    // tolerates them and keeps record order.
    let lookup = StaticLookup::new()
        .with_cname("multi.example.com", &["first.example.com", "second.example.com"])
        .with_a("first.example.com", &["192.0.2.10"])
        .with_a("second.example.com", &["192.0.2.20"]);
    let ips = resolve_name(&lookup, "multi.example.com").await.unwrap();
    assert_eq!(ips, vec!["192.0.2.10", "192.0.2.20"]);
}

#[tokio::test]
async fn test_resolve_normalizes_trailing_dot_and_case() {
    let lookup = StaticLookup::new()
        .with_cname("App.Example.Com.", &["Origin.Example.Com."])
        .with_a("origin.example.com", &["198.51.100.7"]);
    let ips = resolve_name(&lookup, "app.example.com").await.unwrap();
    assert_eq!(ips, vec!["198.51.100.7"]);
}

#[tokio::test]
async fn test_resolve_deep_chain_terminates() {
    // A 10-hop chain is legitimate and resolves fully.
    let mut lookup = StaticLookup::new();
    for i in 0..9 {
        let target = format!("hop{}.example.com", i + 1);
        lookup = lookup.with_cname(&format!("hop{i}.example.com"), &[target.as_str()]);
    }
    lookup = lookup.with_a("hop9.example.com", &["203.0.113.99"]);

    let ips = resolve_name(&lookup, "hop0.example.com").await.unwrap();
    assert_eq!(ips, vec!["203.0.113.99"]);
}

#[tokio::test]
async fn test_resolve_rejects_self_referential_chain() {
    let lookup = StaticLookup::new().with_cname("loop.example.com", &["loop.example.com"]);
    let err = resolve_name(&lookup, "loop.example.com").await.unwrap_err();
    assert!(
        matches!(err, ResolveError::ChainLoop { ref name, .. } if name == "loop.example.com"),
        "expected ChainLoop, got: {err}"
    );
}

#[tokio::test]
async fn test_resolve_rejects_two_name_cycle() {
    let lookup = StaticLookup::new()
        .with_cname("a.example.com", &["b.example.com"])
        .with_cname("b.example.com", &["a.example.com"]);
    let err = resolve_name(&lookup, "a.example.com").await.unwrap_err();
    assert!(matches!(err, ResolveError::ChainLoop { .. }));
}

#[tokio::test]
async fn test_resolve_rejects_chain_past_hop_budget() {
    let mut lookup = StaticLookup::new();
    for i in 0..MAX_CHAIN_HOPS + 4 {
        let target = format!("hop{}.example.com", i + 1);
        lookup = lookup.with_cname(&format!("hop{i}.example.com"), &[target.as_str()]);
    }
    let err = resolve_name(&lookup, "hop0.example.com").await.unwrap_err();
    assert!(
        matches!(err, ResolveError::ChainTooLong { max, .. } if max == MAX_CHAIN_HOPS),
        "expected ChainTooLong, got: {err}"
    );
}

#[tokio::test]
async fn test_resolve_propagates_lookup_failure() {
    let lookup = StaticLookup::new()
        .with_cname("app.example.com", &["broken.example.com"])
        .with_failure("broken.example.com");
    let err = resolve_name(&lookup, "app.example.com").await.unwrap_err();
    match err {
        ResolveError::Lookup(e) => assert_eq!(e.name, "broken.example.com"),
        other => panic!("expected Lookup error, got: {other}"),
    }
}

#[tokio::test]
async fn test_resolve_failure_never_mixes_into_addresses() {
    // A failed sub-lookup fails the whole resolution; no partial list with
    // error values mixed in.
    let lookup = StaticLookup::new()
        .with_a("app.example.com", &["192.0.2.1"])
        .with_cname("app.example.com", &["broken.example.com"])
        .with_failure("broken.example.com");
    assert!(resolve_name(&lookup, "app.example.com").await.is_err());
}
