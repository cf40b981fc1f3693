use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
pub(crate) fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.as_mut_slice().shuffle(rng);
    copy
}
