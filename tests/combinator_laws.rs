//! Property-based tests for the lazy combinators.

use proptest::collection::vec;
use proptest::prelude::*;
use sequitur::prelude::*;

// =============================================================================
// Zip Laws
// =============================================================================

proptest! {
    /// Strict zip emits exactly min(len(a), len(b)) elements, each equal
    /// to f(a[i], b[i]).
    #[test]
    fn prop_zip_strict_length_and_positions(
        a in vec(any::<i32>(), 0..32),
        b in vec(any::<i32>(), 0..32),
    ) {
        let expected: Vec<(i32, i32)> = a.iter().copied().zip(b.iter().copied()).collect();
        let zipped: Vec<(i32, i32)> = zip(from_iter(a.clone()), from_iter(b.clone()), |x, y| (x, y))
            .into_iter()
            .collect();

        prop_assert_eq!(zipped.len(), a.len().min(b.len()));
        prop_assert_eq!(zipped, expected);
    }

    /// Padded zip emits exactly max(len(a), len(b)) elements; past the end
    /// of a side, that side's fill value is passed to the combiner.
    #[test]
    fn prop_zip_padded_length_and_fill(
        a in vec(any::<i32>(), 0..32),
        b in vec(any::<i32>(), 0..32),
        fill_a in any::<i32>(),
        fill_b in any::<i32>(),
    ) {
        let pairs: Vec<(i32, i32)> = zip_padded(
            from_iter(a.clone()),
            from_iter(b.clone()),
            fill_a,
            fill_b,
            |x, y| (x, y),
        )
        .into_iter()
        .collect();

        prop_assert_eq!(pairs.len(), a.len().max(b.len()));
        for (index, (x, y)) in pairs.iter().enumerate() {
            prop_assert_eq!(*x, a.get(index).copied().unwrap_or(fill_a));
            prop_assert_eq!(*y, b.get(index).copied().unwrap_or(fill_b));
        }
    }

    /// Each side of the padded 3-way zip falls back to its own fill value
    /// independently of the other sides' states.
    #[test]
    fn prop_zip3_padded_independent_fallback(
        a in vec(any::<i8>(), 0..16),
        b in vec(any::<i8>(), 0..16),
        c in vec(any::<i8>(), 0..16),
    ) {
        let triples: Vec<(i16, i16, i16)> = zip3_padded(
            from_iter(a.iter().map(|&v| i16::from(v)).collect::<Vec<_>>()),
            from_iter(b.iter().map(|&v| i16::from(v)).collect::<Vec<_>>()),
            from_iter(c.iter().map(|&v| i16::from(v)).collect::<Vec<_>>()),
            1000,
            2000,
            3000,
            |x, y, z| (x, y, z),
        )
        .into_iter()
        .collect();

        prop_assert_eq!(triples.len(), a.len().max(b.len()).max(c.len()));
        for (index, (x, y, z)) in triples.iter().enumerate() {
            prop_assert_eq!(*x, a.get(index).map_or(1000, |&v| i16::from(v)));
            prop_assert_eq!(*y, b.get(index).map_or(2000, |&v| i16::from(v)));
            prop_assert_eq!(*z, c.get(index).map_or(3000, |&v| i16::from(v)));
        }
    }
}

// =============================================================================
// Concat Laws
// =============================================================================

proptest! {
    /// Concat yields the elements of its children in order, equivalent to
    /// flattening the list of lists.
    #[test]
    fn prop_concat_equals_flattening(chunks in vec(vec(any::<i32>(), 0..8), 0..8)) {
        let expected: Vec<i32> = chunks.iter().flatten().copied().collect();

        let concatenated: Vec<i32> = concat(
            chunks.iter().cloned().map(from_iter).collect::<Vec<_>>(),
        )
        .into_iter()
        .collect();
        prop_assert_eq!(&concatenated, &expected);

        let flattened: Vec<i32> = flatten(chunks).into_iter().collect();
        prop_assert_eq!(&flattened, &expected);
    }
}

// =============================================================================
// Merge Laws
// =============================================================================

proptest! {
    /// Merging with a min-selector never drops or duplicates an element,
    /// and preserves each side's internal order.
    #[test]
    fn prop_merge_is_an_order_preserving_interleaving(
        a in vec(any::<i32>(), 0..32),
        b in vec(any::<i32>(), 0..32),
    ) {
        // Tag each element with its side so per-side order can be checked
        // even with duplicate values across sides.
        let left: Vec<(i32, bool)> = a.iter().map(|&v| (v, true)).collect();
        let right: Vec<(i32, bool)> = b.iter().map(|&v| (v, false)).collect();

        let merged: Vec<(i32, bool)> = merge(
            from_iter(left.clone()),
            from_iter(right.clone()),
            |x, y| if x.0 <= y.0 { Pick::Left } else { Pick::Right },
        )
        .into_iter()
        .collect();

        prop_assert_eq!(merged.len(), left.len() + right.len());

        let from_left: Vec<(i32, bool)> =
            merged.iter().copied().filter(|&(_, side)| side).collect();
        let from_right: Vec<(i32, bool)> =
            merged.iter().copied().filter(|&(_, side)| !side).collect();
        prop_assert_eq!(from_left, left);
        prop_assert_eq!(from_right, right);
    }

    /// Merging two sorted sequences with a min-selector yields the sorted
    /// union.
    #[test]
    fn prop_merge_sorted_inputs_yield_sorted_output(
        mut a in vec(any::<i32>(), 0..32),
        mut b in vec(any::<i32>(), 0..32),
    ) {
        a.sort_unstable();
        b.sort_unstable();
        let mut expected: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        expected.sort_unstable();

        let merged: Vec<i32> = merge(
            from_iter(a),
            from_iter(b),
            |x, y| if x <= y { Pick::Left } else { Pick::Right },
        )
        .into_iter()
        .collect();

        prop_assert_eq!(merged, expected);
    }
}

// =============================================================================
// Split Laws
// =============================================================================

proptest! {
    /// Every chunk but the last is full; the last chunk holds
    /// len mod size elements when non-zero, else size; reassembling the
    /// chunks restores the input.
    #[test]
    fn prop_split_chunk_sizes(
        values in vec(any::<i32>(), 0..64),
        size in 1_usize..10,
    ) {
        let chunks: Vec<Vec<i32>> = split(from_iter(values.clone()), size)
            .expect("size is positive")
            .into_iter()
            .collect();

        if values.is_empty() {
            prop_assert!(chunks.is_empty());
        } else {
            for chunk in &chunks[..chunks.len() - 1] {
                prop_assert_eq!(chunk.len(), size);
            }
            let tail = values.len() % size;
            let expected_tail = if tail == 0 { size } else { tail };
            prop_assert_eq!(chunks[chunks.len() - 1].len(), expected_tail);
        }

        let reassembled: Vec<i32> = chunks.into_iter().flatten().collect();
        prop_assert_eq!(reassembled, values);
    }
}

// =============================================================================
// Skip-None and Reducer Laws
// =============================================================================

proptest! {
    /// skip_none drops exactly the None elements.
    #[test]
    fn prop_skip_none_keeps_some_payloads(values in vec(any::<Option<i32>>(), 0..64)) {
        let expected: Vec<i32> = values.iter().copied().flatten().collect();
        let filtered: Vec<i32> = skip_none(from_iter(values)).into_iter().collect();
        prop_assert_eq!(filtered, expected);
    }

    /// first/last agree with the collection's ends; the _some variants
    /// agree with the filtered collection's ends.
    #[test]
    fn prop_first_last_agree_with_collection(values in vec(any::<Option<i32>>(), 0..64)) {
        prop_assert_eq!(first(from_iter(values.clone())), values.first().copied());
        prop_assert_eq!(last(from_iter(values.clone())), values.last().copied());

        let present: Vec<i32> = values.iter().copied().flatten().collect();
        prop_assert_eq!(first_some(from_iter(values.clone())), present.first().copied());
        prop_assert_eq!(last_some(from_iter(values)), present.last().copied());
    }

    /// unzip destinations always end in lock-step with identical lengths
    /// and source order.
    #[test]
    fn prop_unzip_lockstep(pairs in vec(any::<(u8, i16)>(), 0..64)) {
        let (lefts, rights) = unzip(from_iter(pairs.clone()), |pair| pair);
        prop_assert_eq!(lefts.len(), pairs.len());
        prop_assert_eq!(rights.len(), pairs.len());
        let expected_left: Vec<u8> = pairs.iter().map(|&(l, _)| l).collect();
        let expected_right: Vec<i16> = pairs.iter().map(|&(_, r)| r).collect();
        prop_assert_eq!(lefts, expected_left);
        prop_assert_eq!(rights, expected_right);
    }

    /// fold_until without a satisfied predicate is an ordinary fold.
    #[test]
    fn prop_fold_until_total_fold(values in vec(any::<i8>(), 0..64)) {
        let expected: i64 = values.iter().map(|&v| i64::from(v)).sum();
        let folded = fold_until(
            from_iter(values),
            0_i64,
            |acc, v| acc + i64::from(v),
            |_| false,
        );
        prop_assert_eq!(folded, expected);
    }
}
