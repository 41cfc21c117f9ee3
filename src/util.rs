use crate::parameters::ParameterSet;
use url::form_urlencoded;

/// Split `url` into the base URL to sign and its decoded query parameters.
///
/// Query and fragment are both dropped from the base URL.
pub fn split_url(url: &url::Url) -> (String, ParameterSet) {
    let params = url.query_pairs().collect::<ParameterSet>();
    let mut endpoint = url.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    (endpoint.into(), params)
}

/// Parse an `application/x-www-form-urlencoded` query (`+` is a space).
pub fn query_to_parameters(query: &str) -> ParameterSet {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes()).collect()
}

/// `path?query` with the request parameters in canonical form.
pub fn build_path(path: &str, params: &ParameterSet) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    format!("{}?{}", path, params.serialize())
}

#[test]
fn test_split_url() {
    let s = "http://example.com/example+.html?quever?=salting=parsing&&&&&vir!@$========%^&*()_=askparity++++==&パラメータ=テストパラメータ";
    let u = url::Url::parse(s).unwrap();
    let (core, map) = split_url(&u);
    assert_eq!(core, "http://example.com/example+.html");
    assert_eq!(map.len(), 4);
    assert_eq!(map.get("quever?"), Some("salting=parsing"));
    assert_eq!(map.get("vir!@$"), Some("=======%^"));
    assert_eq!(map.get("*()_"), Some("askparity    =="));
    assert_eq!(map.get("パラメータ"), Some("テストパラメータ"));
    let n = "https://example.com/";
    let nu = url::Url::parse(n).unwrap();
    let (core, map2) = split_url(&nu);
    assert_eq!(core, n);
    assert_eq!(map2.len(), 0);
}

#[test]
fn test_split_url_plus_and_fragment() {
    let u = url::Url::parse("https://api.twitter.com/1.1/search/tweets.json?q=a+b&r=c%2Bd").unwrap();
    let (core, map) = split_url(&u);
    assert_eq!(core, "https://api.twitter.com/1.1/search/tweets.json");
    assert_eq!(map.get("q"), Some("a b"));
    assert_eq!(map.get("r"), Some("c+d"));

    let u = url::Url::parse("https://api.twitter.com/1.1/x.json#frag").unwrap();
    let (core, map) = split_url(&u);
    assert_eq!(core, "https://api.twitter.com/1.1/x.json");
    assert!(map.is_empty());

    let u = url::Url::parse("https://api.twitter.com/1.1/x.json?a=1#frag").unwrap();
    let (core, map) = split_url(&u);
    assert_eq!(core, "https://api.twitter.com/1.1/x.json");
    assert_eq!(map.get("a"), Some("1"));
}

#[test]
fn test_query_to_parameters() {
    let map = query_to_parameters("parameter=value&%21%40%23=%24%25%5E%26");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("parameter"), Some("value"));
    assert_eq!(map.get("!@#"), Some("$%^&"));
    let map2 = query_to_parameters("?quever?=salting=parsing&&&&&novalue&x=&q=a+b");
    assert_eq!(map2.len(), 4);
    assert_eq!(map2.get("quever?"), Some("salting=parsing"));
    assert_eq!(map2.get("novalue"), Some(""));
    assert_eq!(map2.get("x"), Some(""));
    assert_eq!(map2.get("q"), Some("a b"));
    assert_eq!(query_to_parameters("").len(), 0);
}

#[test]
fn test_build_path() {
    let params = ParameterSet::new().with("q", "@noradio").with("count", "100");
    assert_eq!(
        build_path("/1.1/search/tweets.json", &params),
        "/1.1/search/tweets.json?count=100&q=%40noradio"
    );
    assert_eq!(
        build_path("/1.1/account/settings.json", &ParameterSet::new()),
        "/1.1/account/settings.json"
    );
}
