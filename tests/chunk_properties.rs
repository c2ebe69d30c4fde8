use bincmp::compare::{Comparison, compare_sources};
use proptest::prelude::*;
use std::num::NonZeroUsize;

fn compare(left: &[u8], right: &[u8], size: usize) -> Comparison {
    compare_sources(
        left,
        left.len() as u64,
        right,
        right.len() as u64,
        NonZeroUsize::new(size).unwrap(),
    )
    .unwrap()
}

// 生成两段等长数据
fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..256).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<u8>(), len),
            prop::collection::vec(any::<u8>(), len),
        )
    })
}

proptest! {
    #[test]
    fn empty_map_iff_equal((left, right) in equal_length_pair(), size in 1usize..32) {
        let comparison = compare(&left, &right, size);
        let differences = comparison.differences().unwrap();
        prop_assert_eq!(differences.is_empty(), left == right);
    }

    #[test]
    fn self_comparison_is_identical(data in prop::collection::vec(any::<u8>(), 0..256), size in 1usize..64) {
        prop_assert!(compare(&data, &data, size).is_identical());
    }

    #[test]
    fn every_differing_byte_is_covered((left, right) in equal_length_pair(), size in 1usize..32) {
        let comparison = compare(&left, &right, size);
        let differences = comparison.differences().unwrap();

        for (offset, pair) in differences {
            prop_assert_eq!(*offset % size as u64, 0);
            prop_assert_eq!(pair.left.len(), pair.right.len());
            prop_assert_ne!(&pair.left, &pair.right);
        }

        for i in 0..left.len() {
            if left[i] != right[i] {
                let offset = (i / size * size) as u64;
                let pair = differences.get(&offset);
                prop_assert!(pair.is_some(), "byte {} not covered", i);
            }
        }
    }

    #[test]
    fn different_lengths_are_size_mismatch(
        left in prop::collection::vec(any::<u8>(), 0..64),
        extra in prop::collection::vec(any::<u8>(), 1..16),
        size in 1usize..16,
    ) {
        let mut right = left.clone();
        right.extend(extra);
        let comparison = compare(&left, &right, size);
        prop_assert_eq!(
            comparison,
            Comparison::SizeMismatch { left: left.len() as u64, right: right.len() as u64 }
        );
    }
}
