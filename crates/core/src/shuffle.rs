use rand::Rng;

/// Return a shuffled copy of `items` (Fisher-Yates). The input is untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Draw `count` distinct entries from `items`, in random order.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut out = shuffled(items, rng);
    out.truncate(count);
    out
}

/// Pick one entry uniformly. `items` must not be empty.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = [1, 2, 3, 4, 5, 6, 7, 8];

        let mut out = shuffled(&items, &mut rng);
        assert_eq!(items, [1, 2, 3, 4, 5, 6, 7, 8]);

        out.sort();
        assert_eq!(out, items.to_vec());
    }

    #[test]
    fn test_shuffled_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn test_sample_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c", "d", "e"];

        for _ in 0..50 {
            let mut out = sample(&items, 3, &mut rng);
            assert_eq!(out.len(), 3);
            out.sort();
            out.dedup();
            assert_eq!(out.len(), 3);
        }
    }

    #[test]
    fn test_sample_more_than_available() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample(&["a", "b"], 5, &mut rng).len(), 2);
    }

    #[test]
    fn test_pick_stays_in_table() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = ["x", "y", "z"];
        for _ in 0..30 {
            assert!(items.contains(pick(&items, &mut rng)));
        }
    }
}
