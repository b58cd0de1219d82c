use rand::Rng;

/// In-place Fisher-Yates shuffle. Walks the slice from the back, swapping
/// each element with one drawn uniformly from the prefix up to and
/// including itself.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0, i + 1);
        items.swap(i, j);
    }
}
