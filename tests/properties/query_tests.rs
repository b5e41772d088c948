use proptest::prelude::*;

use xray::query::{QueryBuilder, split_list};

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{1,10}"
}

fn arb_phrase() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8}){0,2}"
}

fn arb_site() -> impl Strategy<Value = String> {
    "[a-z]{2,8}\\.(com|io|co)".prop_map(|host| format!("site:{host}"))
}

#[derive(Debug, Clone)]
struct Inputs {
    sites: Vec<String>,
    terms: Vec<String>,
    titles: Vec<String>,
    any: Vec<String>,
    phrases: Vec<String>,
    exclude: Vec<String>,
}

fn arb_inputs() -> impl Strategy<Value = Inputs> {
    (
        prop::collection::vec(arb_site(), 0..4),
        prop::collection::vec(arb_word(), 0..3),
        prop::collection::vec(arb_phrase(), 0..4),
        prop::collection::vec(arb_phrase(), 0..4),
        prop::collection::vec(arb_phrase(), 0..3),
        prop::collection::vec(arb_phrase(), 0..3),
    )
        .prop_map(|(sites, terms, titles, any, phrases, exclude)| Inputs {
            sites,
            terms,
            titles,
            any,
            phrases,
            exclude,
        })
}

fn build(inputs: &Inputs, with_sites: bool, with_exclude: bool) -> String {
    let mut builder = QueryBuilder::new();
    if with_sites {
        builder = builder.sites(&inputs.sites);
    }
    builder = builder
        .terms(&inputs.terms)
        .titles(&inputs.titles)
        .any_of(&inputs.any)
        .phrases(&inputs.phrases);
    if with_exclude {
        builder = builder.exclude(&inputs.exclude);
    }
    builder.build().into_string()
}

proptest! {
    #[test]
    fn rendering_is_deterministic(inputs in arb_inputs()) {
        prop_assert_eq!(build(&inputs, true, true), build(&inputs, true, true));
    }

    #[test]
    fn clauses_are_single_space_joined(inputs in arb_inputs()) {
        let query = build(&inputs, true, true);
        prop_assert_eq!(query.trim(), query.as_str());
        prop_assert!(!query.contains("  "));
    }

    #[test]
    fn empty_only_without_inputs(inputs in arb_inputs()) {
        let query = build(&inputs, true, true);
        let nothing = inputs.sites.is_empty()
            && inputs.terms.is_empty()
            && inputs.titles.is_empty()
            && inputs.any.is_empty()
            && inputs.phrases.is_empty()
            && inputs.exclude.is_empty();
        prop_assert_eq!(query.is_empty(), nothing);
    }

    #[test]
    fn sites_lead_the_query(inputs in arb_inputs()) {
        let with = build(&inputs, true, true);
        let without = build(&inputs, false, true);
        if inputs.sites.is_empty() {
            prop_assert_eq!(with, without);
        } else {
            prop_assert!(with.starts_with("(site:"));
            prop_assert!(with.ends_with(&without));
        }
    }

    #[test]
    fn exclusions_trail_the_query(inputs in arb_inputs()) {
        let with = build(&inputs, true, true);
        let without = build(&inputs, true, false);
        prop_assert!(with.starts_with(&without));
        let tail = with[without.len()..].trim_start();
        prop_assert_eq!(tail.matches(" -").count() + usize::from(!tail.is_empty()), inputs.exclude.len());
    }

    #[test]
    fn split_list_entries_are_trimmed_and_non_empty(input in "[a-z ,]{0,40}") {
        for entry in split_list(&input) {
            prop_assert!(!entry.is_empty());
            prop_assert_eq!(entry.trim(), entry.as_str());
            prop_assert!(!entry.contains(','));
        }
    }
}
