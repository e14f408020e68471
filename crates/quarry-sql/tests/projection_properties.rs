//! Property-based tests for Quarry's SQL projection utilities.

use proptest::prelude::*;

use quarry_sql::{
    FragmentTree, Symbol, aggregate_alias, group_by_kv, validate_var, var_to_column,
    var_to_type_tag_column,
};

// Strategy for generating plain variable names (without the `?` prefix)
fn var_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,20}".prop_map(|s| s.to_string())
}

// Strategy for generating short key paths
fn key_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..4)
}

proptest! {
    // Any unqualified `?`-prefixed symbol is a valid variable
    #[test]
    fn prefixed_symbols_validate(name in var_name()) {
        let var = Symbol::plain(format!("?{}", name));
        prop_assert!(validate_var(&var).is_ok());
    }

    // Symbols without the prefix never validate, and the error carries the
    // offending value
    #[test]
    fn unprefixed_symbols_fail(name in var_name()) {
        let sym = Symbol::plain(name.clone());
        let err = validate_var(&sym).unwrap_err();
        prop_assert_eq!(
            err.to_string(),
            format!("expected a Datalog variable (unqualified, `?`-prefixed), got: {}", name)
        );
    }

    // Namespace qualification disqualifies a symbol regardless of its name
    #[test]
    fn namespaced_symbols_fail(ns in var_name(), name in var_name()) {
        let sym = Symbol::namespaced(ns, format!("?{}", name));
        prop_assert!(validate_var(&sym).is_err());
    }

    // Column mangling strips exactly the prefix
    #[test]
    fn column_strips_prefix(name in var_name()) {
        let var = Symbol::plain(format!("?{}", name));
        let ident = var_to_column(&var).unwrap();
        prop_assert_eq!(ident.as_str(), name.as_str());
    }

    // Type-tag mangling wraps the stripped name
    #[test]
    fn type_tag_wraps_name(name in var_name()) {
        let var = Symbol::plain(format!("?{}", name));
        let ident = var_to_type_tag_column(&var).unwrap();
        let expected = format!("_{}_type_tag", name);
        prop_assert_eq!(ident.as_str(), expected.as_str());
    }

    // Aggregate aliases combine function and column verbatim
    #[test]
    fn aggregate_alias_format(fn_name in "[a-z]{1,8}", col in var_name()) {
        let ident = aggregate_alias(&fn_name, &Symbol::plain(col.clone()));
        let expected = format!("%{}.{}", fn_name, col);
        prop_assert_eq!(ident.as_str(), expected.as_str());
    }

    // Appending a whole sequence at a path reads back unchanged
    #[test]
    fn append_all_reads_back(path in key_path(), values in prop::collection::vec(any::<i64>(), 0..32)) {
        let tree = FragmentTree::new().append_all_at(&path, values.clone());
        prop_assert_eq!(tree.values_at(&path), Some(values.as_slice()));
    }

    // Item-by-item appends accumulate the same sequence as one bulk append.
    // Compared at the path: a bulk append materializes the addressed node
    // even for an empty sequence, while zero single appends leave the tree
    // untouched, so the trees themselves may differ structurally.
    #[test]
    fn append_is_left_associative(path in key_path(), values in prop::collection::vec(any::<i64>(), 0..32)) {
        let bulk = FragmentTree::new().append_all_at(&path, values.clone());
        let one_by_one = values
            .iter()
            .fold(FragmentTree::new(), |tree, v| tree.append_at(&path, *v));

        prop_assert_eq!(bulk.values_at(&path), Some(values.as_slice()));
        prop_assert_eq!(one_by_one.values_at(&path).unwrap_or(&[]), values.as_slice());
    }

    // Flattening the groups in first-seen order recovers a permutation of
    // the input, with per-group relative order intact
    #[test]
    fn grouping_is_an_ordered_partition(items in prop::collection::vec((0u8..5, any::<i32>()), 0..64)) {
        let grouped = group_by_kv(items.clone(), |pair| pair);

        let mut flattened = Vec::new();
        for (key, values) in &grouped {
            // Relative order within a group matches the original encounter
            // order
            let originals: Vec<i32> = items
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| *v)
                .collect();
            prop_assert_eq!(values, &originals);
            flattened.extend(values.iter().copied());
        }

        // Same multiset of values overall
        let mut sorted_in: Vec<i32> = items.iter().map(|(_, v)| *v).collect();
        let mut sorted_out = flattened;
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        prop_assert_eq!(sorted_in, sorted_out);
    }
}
