/// Lomuto partition of `data[low..=high]` around the element at `high`.
///
/// Returns the pivot's final index in `data`. Everything in `low..p` is
/// `<=` the pivot and everything in `p + 1..=high` is `>=` the pivot.
///
/// # Panics
///
/// Panics if `low > high` or `high >= data.len()`.
pub fn partition<T: Ord>(data: &mut [T], low: usize, high: usize) -> usize {
    assert!(
        low <= high,
        "partition range is empty: low={low} high={high}"
    );
    assert!(
        high < data.len(),
        "partition range out of bounds: high={high} len={}",
        data.len()
    );
    low + partition_slice(&mut data[low..=high])
}

/// Same as [`partition`] over a whole non-empty slice; the returned index is
/// relative to `data`.
///
/// # Panics
///
/// Panics if `data` is empty.
#[inline]
pub fn partition_slice<T: Ord>(data: &mut [T]) -> usize {
    assert!(!data.is_empty(), "partition of an empty slice");

    let last = data.len() - 1;
    // `next` is one past the last slot holding a value below the pivot.
    let mut next = 0usize;
    for j in 0..last {
        if data[j] < data[last] {
            data.swap(next, j);
            next += 1;
        }
    }
    data.swap(next, last);
    next
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_partitioned(data: &[i32], low: usize, high: usize, p: usize, pivot: i32) {
        assert!((low..=high).contains(&p));
        assert_eq!(data[p], pivot);
        assert!(data[low..p].iter().all(|&x| x <= pivot), "{data:?} p={p}");
        assert!(data[p + 1..=high].iter().all(|&x| x >= pivot), "{data:?} p={p}");
    }

    #[test]
    fn known_case() {
        let mut data = [3, 6, 2, 8, 2, 5];
        let p = partition(&mut data, 0, 5);
        assert_eq!(p, 3);
        assert_partitioned(&data, 0, 5, p, 5);
    }

    #[test]
    fn pivot_extremes() {
        let mut smallest = [4, 9, 7, 1];
        assert_eq!(partition(&mut smallest, 0, 3), 0);
        assert_eq!(smallest[0], 1);

        let mut largest = [4, 1, 7, 9];
        assert_eq!(partition(&mut largest, 0, 3), 3);
        assert_eq!(largest, [4, 1, 7, 9]);

        let mut equal = [2; 7];
        assert_eq!(partition(&mut equal, 0, 6), 0);
    }

    #[test]
    fn single_element_range() {
        let mut data = [9, 3, 1];
        assert_eq!(partition(&mut data, 1, 1), 1);
        assert_eq!(data, [9, 3, 1]);
    }

    #[test]
    fn touches_only_the_range() {
        let mut data = [100, 90, 5, 1, 4, 3, -100, -90];
        let p = partition(&mut data, 2, 5);
        assert_partitioned(&data, 2, 5, p, 3);
        assert_eq!(&data[..2], &[100, 90]);
        assert_eq!(&data[6..], &[-100, -90]);
    }

    #[test]
    fn fixed_seed_random_ranges() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[1_usize, 2, 3, 17, 64, 257] {
            let mut data = (0..size)
                .map(|_| rng.random_range(-50..50))
                .collect::<Vec<i32>>();
            let mut before = data.clone();

            let pivot = data[size - 1];
            let p = partition(&mut data, 0, size - 1);
            assert_partitioned(&data, 0, size - 1, p, pivot);

            let mut after = data.clone();
            before.sort_unstable();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn high_past_end_panics() {
        let mut data = [1, 2, 3];
        partition(&mut data, 0, 3);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn empty_slice_panics() {
        let mut data: [i32; 0] = [];
        partition_slice(&mut data);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn inverted_range_panics() {
        let mut data = [1, 2, 3];
        partition(&mut data, 2, 1);
    }
}
