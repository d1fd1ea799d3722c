//! Asset registry: input asset -> oracle feed identifier
//!
//! Populated once at initialization from parallel lists; no entrypoint
//! adds or removes entries afterward. An asset is supported iff its feed
//! identifier is present and non-empty. Feed identifiers are opaque here
//! and are only validated by the oracle at query time.

use candid::Principal;
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static FEED_MAP: RefCell<HashMap<Principal, String>> = RefCell::new(HashMap::new());
}

/// Install the asset/feed map. Caller must have validated list shape
/// (`config::validate_init_args`) beforehand.
pub fn init_feeds(assets: &[Principal], feeds: &[String]) {
    FEED_MAP.with(|map| {
        let mut map = map.borrow_mut();
        map.clear();
        for (asset, feed) in assets.iter().zip(feeds.iter()) {
            map.insert(*asset, feed.clone());
        }
    });
}

pub fn is_supported(asset: Principal) -> bool {
    FEED_MAP.with(|map| {
        map.borrow()
            .get(&asset)
            .map(|feed| !feed.is_empty())
            .unwrap_or(false)
    })
}

pub fn feed_for(asset: Principal) -> Option<String> {
    FEED_MAP.with(|map| {
        map.borrow()
            .get(&asset)
            .filter(|feed| !feed.is_empty())
            .cloned()
    })
}

/// Export for stable storage (pre-upgrade)
pub fn export_feeds() -> Vec<(Principal, String)> {
    FEED_MAP.with(|map| map.borrow().iter().map(|(p, f)| (*p, f.clone())).collect())
}

/// Restore from stable storage (post-upgrade)
pub fn import_feeds(entries: Vec<(Principal, String)>) {
    FEED_MAP.with(|map| {
        *map.borrow_mut() = entries.into_iter().collect();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(tag: u8) -> Principal {
        Principal::from_slice(&[tag; 29])
    }

    #[test]
    fn test_mapped_asset_is_supported() {
        init_feeds(&[asset(1)], &["T/USD".to_string()]);
        assert!(is_supported(asset(1)));
        assert_eq!(feed_for(asset(1)), Some("T/USD".to_string()));
    }

    #[test]
    fn test_unmapped_asset_is_unsupported() {
        init_feeds(&[asset(1)], &["T/USD".to_string()]);
        assert!(!is_supported(asset(2)));
        assert_eq!(feed_for(asset(2)), None);
    }

    #[test]
    fn test_empty_feed_id_means_unsupported() {
        init_feeds(&[asset(3)], &[String::new()]);
        assert!(!is_supported(asset(3)));
        assert_eq!(feed_for(asset(3)), None);
    }

    #[test]
    fn test_export_import_roundtrip() {
        init_feeds(
            &[asset(4), asset(5)],
            &["A/USD".to_string(), "B/USD".to_string()],
        );
        let exported = export_feeds();
        init_feeds(&[], &[]);
        assert!(!is_supported(asset(4)));

        import_feeds(exported);
        assert!(is_supported(asset(4)));
        assert!(is_supported(asset(5)));
    }
}
