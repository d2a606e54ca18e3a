use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;

#[test]
fn empty()
{
    let ranges = compact(&[]);

    assert!(ranges.is_empty());
    assert_eq!(ranges.codepoints_count(), 0);
    assert!(!ranges.contains(0));
}

#[test]
fn single_value()
{
    assert_eq!(compact(&[0x41]).as_pairs(), vec![(0x41, 0x42)]);
}

#[test]
fn runs()
{
    let ranges = compact(&[0x41, 0x300, 0x301]);

    assert_eq!(ranges.as_pairs(), vec![(0x41, 0x42), (0x300, 0x302)]);
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges.codepoints_count(), 3);
}

#[test]
fn duplicates_continue_run()
{
    assert_eq!(compact(&[1, 1, 2, 2, 3]).as_pairs(), vec![(1, 4)]);
    assert_eq!(compact(&[5, 5, 5]).as_pairs(), vec![(5, 6)]);
    assert_eq!(compact(&[1, 3, 3, 4, 6]).as_pairs(), vec![(1, 2), (3, 5), (6, 7)]);
}

#[test]
fn contains()
{
    let ranges = compact(&[0x41, 0x42, 0x300, 0x301, 0x10000]);

    for code in [0x41, 0x42, 0x300, 0x301, 0x10000] {
        assert!(ranges.contains(code), "U+{:04X}", code);
    }

    for code in [0, 0x40, 0x43, 0x2FF, 0x302, 0xFFFF, 0x10001] {
        assert!(!ranges.contains(code), "U+{:04X}", code);
    }
}

#[test]
fn last_codepoint()
{
    assert_eq!(compact(&[LAST_CODEPOINT]).as_pairs(), vec![(0x10FFFF, 0x110000)]);
}

#[test]
#[should_panic]
fn beyond_unicode()
{
    compact(&[0x41, u32::MAX]);
}

proptest! {
    /// развёрнутые диапазоны совпадают с множеством входных значений, соседние диапазоны не сливаются
    #[test]
    fn compaction_is_exact_and_minimal(mut codes in prop::collection::vec(0u32 .. 0x2000, 0 .. 300))
    {
        codes.sort_unstable();

        let ranges = compact(&codes);
        let distinct: BTreeSet<u32> = codes.iter().copied().collect();

        prop_assert_eq!(ranges.expand().collect::<Vec<_>>(), distinct.into_iter().collect::<Vec<_>>());

        for pair in ranges.as_slice().windows(2) {
            prop_assert!(pair[0].start < pair[0].end);
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn compaction_is_idempotent(mut codes in prop::collection::vec(0u32 .. 0x2000, 0 .. 300))
    {
        codes.sort_unstable();

        let ranges = compact(&codes);
        let expanded: Vec<u32> = ranges.expand().collect();

        prop_assert_eq!(compact(&expanded), ranges);
    }

    #[test]
    fn lookup_matches_input(mut codes in prop::collection::vec(0u32 .. 0x400, 1 .. 100), probe in 0u32 .. 0x400)
    {
        codes.sort_unstable();

        let ranges = compact(&codes);

        prop_assert_eq!(ranges.contains(probe), codes.binary_search(&probe).is_ok());
    }
}
