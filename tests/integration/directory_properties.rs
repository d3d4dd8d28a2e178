use contactbook::{Contact, ContactDirectory, VizToken};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 0..24).prop_map(|set| set.into_iter().collect())
}

fn build(names: &[String]) -> ContactDirectory {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Contact::new(name.clone(), format!("555-{:04}", i)))
        .collect()
}

proptest! {
    #[test]
    fn get_all_preserves_insertion_order(names in distinct_names()) {
        let directory = build(&names);
        let listed: Vec<String> = directory.get_all().iter().map(|c| c.name.clone()).collect();
        prop_assert_eq!(listed, names.clone());
        prop_assert_eq!(directory.len(), names.len());
    }

    #[test]
    fn size_tracks_adds_minus_removals(
        names in distinct_names(),
        remove_mask in prop::collection::vec(any::<bool>(), 24),
    ) {
        let mut directory = build(&names);
        let mut removed = BTreeSet::new();
        for (name, remove) in names.iter().zip(remove_mask.iter()) {
            if *remove {
                prop_assert!(directory.remove_by_name(name));
                removed.insert(name.clone());
            }
        }
        prop_assert_eq!(directory.len(), names.len() - removed.len());
        prop_assert_eq!(directory.iter().count(), directory.len());

        let expected: Vec<&String> = names.iter().filter(|n| !removed.contains(*n)).collect();
        let listed: Vec<&String> = directory.iter().map(|c| &c.name).collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn visualization_interleaves_separators(names in distinct_names()) {
        let directory = build(&names);
        let tokens = directory.get_visualization();
        prop_assert_eq!(tokens.len(), (names.len() * 2).saturating_sub(1));
        for (i, token) in tokens.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert_eq!(token, &VizToken::Name(names[i / 2].clone()));
            } else {
                prop_assert!(token.is_separator());
            }
        }
    }

    #[test]
    fn update_never_reorders(names in distinct_names(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!names.is_empty());
        let mut directory = build(&names);
        let target = &names[pick.index(names.len())];
        prop_assert!(directory.update(target, Contact::new(target.clone(), "999")));
        let listed: Vec<String> = directory.iter().map(|c| c.name.clone()).collect();
        prop_assert_eq!(listed, names.clone());
        prop_assert_eq!(directory.len(), names.len());
    }

    #[test]
    fn search_results_follow_chain_order(names in distinct_names(), term in "[a-z]{1,2}") {
        let directory = build(&names);
        let hits: Vec<String> = directory
            .search(&term, true)
            .iter()
            .map(|n| n.contact().name.clone())
            .collect();
        let expected: Vec<String> = names.iter().filter(|n| n.contains(&term)).cloned().collect();
        prop_assert_eq!(hits, expected);
    }
}
