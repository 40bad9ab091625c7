//! Integration tests for URL rewriting
//!
//! These tests load TOML configurations the way a host process would and drive
//! the public `Processor` API end-to-end.

use affiliate_link::config::parse_config;
use affiliate_link::url::{parse_url, MatchPolicy};
use affiliate_link::Processor;

const FULL_CONFIG: &str = r#"
[amazon]
tracking-code = "mytag-20"

[zazzle]
affiliate-id = "999"

[rakuten]
affiliate-code = "AFF1"

[[rakuten.programs]]
domain = "walmart.com"
mid = "abc123"

[[rakuten.programs]]
domain = "rakuten.com"
mid = "r42"

[[rakuten.programs]]
domain = "bestbuy.com"
mid = "bb7"
"#;

fn processor() -> Processor {
    Processor::new(parse_config(FULL_CONFIG).expect("test config is valid"))
}

/// Collects the query parameter names of a URL, in order
fn query_keys(url: &str) -> Vec<String> {
    let parts = parse_url(url).expect("rewritten URL parses");
    parts
        .query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split('=').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_ineligible_urls_unchanged() {
    let processor = processor();

    for url in [
        "ftp://x.com/a",
        "ftp://www.amazon.com/a",
        "https://amazon.com/x#frag",
        "https://www.zazzle.com/product/1#reviews",
        "https:///a",
    ] {
        assert_eq!(processor.process(url), url);
    }
}

#[test]
fn test_amazon_end_to_end() {
    let processor = Processor::new(
        parse_config(
            r#"
["amazon.com"]
tracking-code = "mytag-20"
"#,
        )
        .unwrap(),
    );

    assert_eq!(
        processor.process("https://www.amazon.com/dp/B000?ref=abc"),
        "https://www.amazon.com/dp/B000?ref=abc&tag=mytag-20"
    );
}

#[test]
fn test_amazon_is_idempotent() {
    let processor = processor();

    for url in [
        "https://www.amazon.com/dp/B000?ref=abc",
        "https://www.amazon.com/dp/B000",
        "https://www.amazon.com/dp/B000?tag=someone-else-20",
    ] {
        let once = processor.process(url);
        let twice = processor.process(&once);

        assert_eq!(once, twice);
        assert_eq!(
            query_keys(&twice).iter().filter(|k| k.as_str() == "tag").count(),
            1,
            "tag duplicated for {}",
            url
        );
    }
}

#[test]
fn test_zazzle_end_to_end() {
    let processor = Processor::new(
        parse_config(
            r#"
["zazzle.com"]
affiliateID = "999"
"#,
        )
        .unwrap(),
    );

    assert_eq!(
        processor.process("https://www.zazzle.com/product/1"),
        "https://www.zazzle.com/product/1?rf=999"
    );
}

#[test]
fn test_zazzle_is_not_idempotent() {
    let processor = processor();

    let once = processor.process("https://www.zazzle.com/product/1");
    let twice = processor.process(&once);

    assert_eq!(twice, "https://www.zazzle.com/product/1?rf=999&rf=999");
    assert_eq!(query_keys(&twice), vec!["rf", "rf"]);
}

#[test]
fn test_domain_matching_is_case_insensitive() {
    let processor = processor();

    assert_eq!(
        processor.process("https://AMAZON.COM/dp/1?x=1"),
        "https://AMAZON.COM/dp/1?x=1&tag=mytag-20"
    );
    assert_eq!(
        processor.process("https://amazon.com/dp/1?x=1"),
        "https://amazon.com/dp/1?x=1&tag=mytag-20"
    );
}

#[test]
fn test_rakuten_walmart_end_to_end() {
    let processor = processor();
    let input = "https://www.walmart.com/ip/42";

    assert_eq!(
        processor.process(input),
        "http://linksynergy.walmart.com//deeplink?id=AFF1&mid=abc123&murl=https%3A%2F%2Fwww.walmart.com%2Fip%2F42"
    );
}

#[test]
fn test_rakuten_link_bases() {
    let processor = processor();

    assert!(processor
        .process("https://www.rakuten.com/deals")
        .starts_with("http://affiliate.rakuten.com//deeplink?id=AFF1&mid=r42&murl="));
    assert!(processor
        .process("https://www.bestbuy.com/site/1")
        .starts_with("http://click.linksynergy.com//deeplink?id=AFF1&mid=bb7&murl="));
}

#[test]
fn test_rakuten_embeds_entire_original_url() {
    let processor = processor();
    let input = "https://www.walmart.com/ip/42?color=red&size=m";
    let output = processor.process(input);

    let parts = parse_url(&output).unwrap();
    let murl = url::form_urlencoded::parse(parts.query.unwrap().as_bytes())
        .find(|(k, _)| k == "murl")
        .map(|(_, v)| v.into_owned());

    assert_eq!(murl.as_deref(), Some(input));
}

#[test]
fn test_unmatched_domain_unchanged() {
    let processor = processor();
    assert_eq!(
        processor.process("https://example.org/page"),
        "https://example.org/page"
    );

    let empty = Processor::new(parse_config("").unwrap());
    assert_eq!(
        empty.process("https://example.org/page"),
        "https://example.org/page"
    );
}

#[test]
fn test_unconfigured_providers_unchanged() {
    let processor = Processor::new(parse_config("").unwrap());

    for url in [
        "https://www.amazon.com/dp/B000",
        "https://www.walmart.com/ip/42",
        "https://www.zazzle.com/product/1",
    ] {
        assert_eq!(processor.process(url), url);
    }
}

#[test]
fn test_lookalike_hosts_follow_match_policy() {
    let boundary = processor();
    let url = "https://evilamazon.com/dp/B000";
    assert_eq!(boundary.process(url), url);
    assert_eq!(
        boundary.process("https://notamazon.com.evil.example/dp/B000"),
        "https://notamazon.com.evil.example/dp/B000"
    );

    let mut config = parse_config(FULL_CONFIG).unwrap();
    config.match_policy = MatchPolicy::RawSuffix;
    let raw = Processor::new(config);
    assert_eq!(raw.process(url), "https://evilamazon.com/dp/B000?tag=mytag-20");
}

#[test]
fn test_only_query_changes() {
    let processor = processor();
    let input = "http://buyer:pw@Smile.Amazon.com:8080/Gp/Product/B000?a=1&b=%2F";
    let output = processor.process(input);

    let before = parse_url(input).unwrap();
    let after = parse_url(&output).unwrap();

    assert_eq!(after.scheme, before.scheme);
    assert_eq!(after.user, before.user);
    assert_eq!(after.password, before.password);
    assert_eq!(after.host, before.host);
    assert_eq!(after.port, before.port);
    assert_eq!(after.path, before.path);
    assert_eq!(after.query.as_deref(), Some("a=1&b=%2F&tag=mytag-20"));
}
