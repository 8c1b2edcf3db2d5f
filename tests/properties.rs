//! Property tests: combinators agree with their `Iterator` counterparts
//! and every wrapped enumerator is released exactly once.

mod common;

use common::*;
use proptest::prelude::*;
use strand::*;

proptest! {
    #[test]
    fn filter_matches_filter_map(values in proptest::collection::vec(any::<i16>(), 0..64), modulus in 1i16..8) {
        let expected: Vec<i32> = values
            .iter()
            .filter(|v| **v % modulus == 0)
            .map(|v| i32::from(*v) * 3)
            .collect();

        let log = event_log();
        let mut e = filter(recorder("up", values.clone(), &log), modulus, |m, v: i16| {
            (v % *m == 0).then(|| i32::from(v) * 3)
        });
        prop_assert_eq!(drain(&mut e), expected);
        e.release();
        prop_assert_eq!(release_count(&log, "up"), 1);
    }

    #[test]
    fn nested_matches_flat_map(lengths in proptest::collection::vec(0usize..4, 0..16)) {
        let expected: Vec<(usize, usize)> = lengths
            .iter()
            .enumerate()
            .flat_map(|(outer, &len)| (0..len).map(move |inner| (outer, inner)))
            .collect();

        let log = event_log();
        let inner_log = log.clone();
        let indexed: Vec<(usize, usize)> = lengths.iter().copied().enumerate().collect();
        let mut e = nested(recorder("outer", indexed, &log), (), move |_, (outer, len): (usize, usize)| {
            let items: Vec<_> = (0..len).map(|inner| (outer, inner)).collect();
            Some(recorder(&format!("inner{outer}"), items, &inner_log))
        });
        prop_assert_eq!(drain(&mut e), expected);

        // Every inner was exhausted, hence already released.
        for outer in 0..lengths.len() {
            prop_assert_eq!(release_count(&log, &format!("inner{outer}")), 1);
        }
        e.release();
        prop_assert_eq!(release_count(&log, "outer"), 1);
    }

    #[test]
    fn early_release_releases_everything_once(lengths in proptest::collection::vec(1usize..4, 1..8), take in 0usize..10) {
        let log = event_log();
        let inner_log = log.clone();
        let indexed: Vec<(usize, usize)> = lengths.iter().copied().enumerate().collect();
        let mut e = nested(recorder("outer", indexed, &log), (), move |_, (outer, len): (usize, usize)| {
            Some(recorder(&format!("inner{outer}"), vec![(); len], &inner_log))
        });
        for _ in 0..take {
            let _ = e.enumerate();
        }
        e.release();

        prop_assert_eq!(release_count(&log, "outer"), 1);
        let built = events(&log, "pull").iter().filter(|l| l.starts_with("inner")).cloned()
            .collect::<std::collections::BTreeSet<_>>();
        for label in built {
            prop_assert_eq!(release_count(&log, &label), 1);
        }
    }

    #[test]
    fn tokens_rejoin_to_input(fields in proptest::collection::vec("[a-z]{1,5}", 1..10)) {
        let input = fields.join(",");
        let config = TokenConfig::new(",");
        let split: Vec<String> = tokens(input, &config).expect("valid config").into_iter().collect();
        prop_assert_eq!(split, fields);
    }
}
