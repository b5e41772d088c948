use std::collections::HashSet;

use proptest::prelude::*;

use xray::dedup::{DedupKey, TITLE_FINGERPRINT_CHARS, dedupe, title_fingerprint};
use xray::search::ResultItem;

/// Items drawn from a tiny alphabet so duplicates are common.
fn arb_item() -> impl Strategy<Value = ResultItem> {
    ("[ab ]{0,6}", "[ab]{0,2}", prop::option::of("[0-9]"), any::<bool>()).prop_map(
        |(title, path, query, slash)| {
            let mut link = format!("https://x.co/{path}");
            if slash {
                link.push('/');
            }
            if let Some(q) = query {
                link.push_str(&format!("?ref={q}"));
            }
            ResultItem::new(title, link)
        },
    )
}

fn arb_items() -> impl Strategy<Value = Vec<ResultItem>> {
    prop::collection::vec(arb_item(), 0..24)
}

proptest! {
    #[test]
    fn dedupe_is_idempotent(items in arb_items()) {
        let once = dedupe(items);
        let twice = dedupe(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn dedupe_keeps_an_ordered_subsequence(items in arb_items()) {
        let kept = dedupe(items.clone());
        prop_assert!(kept.len() <= items.len());

        let mut rest = items.iter();
        for item in &kept {
            prop_assert!(rest.any(|candidate| candidate == item));
        }
    }

    #[test]
    fn first_item_always_survives(items in arb_items()) {
        let kept = dedupe(items.clone());
        prop_assert_eq!(kept.first(), items.first());
    }

    #[test]
    fn survivors_share_no_url_or_title(items in arb_items()) {
        let kept = dedupe(items);
        let mut urls = HashSet::new();
        let mut titles = HashSet::new();
        for item in &kept {
            let key = DedupKey::of(item);
            prop_assert!(urls.insert(key.url));
            prop_assert!(titles.insert(key.title));
        }
    }

    #[test]
    fn fingerprint_is_bounded_and_spaceless(title in ".{0,120}") {
        let fingerprint = title_fingerprint(&title);
        prop_assert!(fingerprint.chars().count() <= TITLE_FINGERPRINT_CHARS);
        prop_assert!(!fingerprint.chars().any(char::is_whitespace));
    }
}
