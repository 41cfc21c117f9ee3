use crate::encoder_oauth1::encode_cow;
use std::collections::HashMap;

/// A set of request or protocol parameters.
///
/// Keys are unique; the order in which pairs were inserted carries no
/// meaning. Every serialized form is sorted by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: HashMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        ParameterSet {
            entries: HashMap::new(),
        }
    }

    /// Insert a pair, replacing the previous value of `key`.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Consume the set and return it with one more pair.
    pub fn with<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge several sets into one. Later sets win on key collision.
    pub fn merge<'a, I>(sets: I) -> ParameterSet
    where
        I: IntoIterator<Item = &'a ParameterSet>,
    {
        let mut merged = ParameterSet::new();
        for set in sets {
            for (k, v) in set.iter() {
                merged.insert(k, v);
            }
        }
        merged
    }

    /// Keys in ascending byte order of the raw (unencoded) key.
    pub fn sort_keys(&self) -> Vec<&str> {
        let mut keys = self.entries.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();
        keys
    }

    /// Sorted pairs with key and value percent-encoded independently.
    pub fn encoded_pairs(&self) -> Vec<(String, String)> {
        self.sort_keys()
            .into_iter()
            .map(|k| {
                let v = &self.entries[k];
                (encode_cow(k).into_owned(), encode_cow(v).into_owned())
            })
            .collect()
    }

    /// Canonical query string: `k1=v1&k2=v2`, sorted, each part encoded.
    pub fn serialize(&self) -> String {
        self.encoded_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = ParameterSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn twitter_sample() -> ParameterSet {
        vec![
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ("include_entities", "true"),
            ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
            ("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1318622958"),
            (
                "oauth_token",
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            ),
            ("oauth_version", "1.0"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_serialize_twitter_reference() {
        assert_eq!(
            twitter_sample().serialize(),
            concat!(
                "include_entities=true&oauth_consumer_key=xvz1evFS4wEEPTGEFPHBog",
                "&oauth_nonce=kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
                "&oauth_signature_method=HMAC-SHA1&oauth_timestamp=1318622958",
                "&oauth_token=370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                "&oauth_version=1.0",
                "&status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
            )
        );
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(ParameterSet::new().serialize(), "");
    }

    #[test]
    fn test_serialize_is_sorted_and_trimmed() {
        let set = twitter_sample()
            .with("zz", "last")
            .with("a b", "space key")
            .with("~", "tilde");
        let s = set.serialize();
        assert!(!s.starts_with('&'));
        assert!(!s.ends_with('&'));
        let keys = s
            .split('&')
            .map(|p| p.splitn(2, '=').next().unwrap_or(""))
            .collect::<Vec<_>>();
        assert_eq!(keys.len(), set.len());
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_keys() {
        let set: ParameterSet = vec![
            ("a", "abc"),
            ("ac", "xyz"),
            ("zxy", "abcd"),
            ("acf", "alcd"),
            ("ghj", "abcp"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.sort_keys(), vec!["a", "ac", "acf", "ghj", "zxy"]);
    }

    #[test]
    fn test_merge_disjoint() {
        let first: ParameterSet = vec![("a", "abc"), ("aa", "xyz")].into_iter().collect();
        let second: ParameterSet = vec![("b", "def"), ("bb", "uvw")].into_iter().collect();
        let merged = ParameterSet::merge(&[first.clone(), second.clone()]);
        assert_eq!(merged.len(), first.len() + second.len());
        for key in ["a", "aa", "b", "bb"].iter() {
            assert!(merged.contains_key(key));
        }
    }

    #[test]
    fn test_merge_last_write_wins() {
        let first = ParameterSet::new().with("k", "old").with("x", "1");
        let second = ParameterSet::new().with("k", "new");
        let merged = ParameterSet::merge(vec![&first, &second]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("k"), Some("new"));
        assert_eq!(merged.get("x"), Some("1"));
    }
}
