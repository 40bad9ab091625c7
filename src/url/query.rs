use url::form_urlencoded;

/// Checks if a raw query string already carries a parameter named `key`
///
/// The query is decomposed into its `&`-separated key/value pairs (percent- and
/// `+`-decoded) and each key is compared exactly, so a key at the very start of the
/// query is found while a key name appearing inside another parameter's value is not.
///
/// # Examples
///
/// ```
/// use affiliate_link::url::has_query_key;
///
/// assert!(has_query_key("tag=a-20&x=1", "tag"));
/// assert!(has_query_key("x=1&tag=a-20", "tag"));
/// assert!(!has_query_key("q=x%26tag%3Dy", "tag"));
/// assert!(!has_query_key("hashtag=rust", "tag"));
/// ```
pub fn has_query_key(query: &str, key: &str) -> bool {
    form_urlencoded::parse(query.as_bytes()).any(|(k, _)| k == key)
}

/// Appends `key=value` to a raw query string
///
/// An absent or empty query becomes `key=value`; otherwise the pair is joined with
/// `&`. The existing query text is kept verbatim and the value is form-urlencoded.
///
/// # Examples
///
/// ```
/// use affiliate_link::url::append_query_pair;
///
/// assert_eq!(append_query_pair(None, "rf", "999"), "rf=999");
/// assert_eq!(append_query_pair(Some(""), "rf", "999"), "rf=999");
/// assert_eq!(append_query_pair(Some("a=1"), "rf", "999"), "a=1&rf=999");
/// ```
pub fn append_query_pair(query: Option<&str>, key: &str, value: &str) -> String {
    let value: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();

    match query {
        Some(existing) if !existing.is_empty() => format!("{}&{}={}", existing, key, value),
        _ => format!("{}={}", key, value),
    }
}
