use core::iter::FusedIterator;

/// Alternates items from two iterators, one from each in turn, and stops as
/// soon as either side runs dry. Yields `2 * min(len1, len2)` items; an item
/// already taken from the first side is dropped when the second side is
/// exhausted.
pub struct Interleave<A: Iterator, B> {
    first: A,
    second: B,
    pending: Option<A::Item>,
    done: bool,
}

impl<A: Iterator, B> Interleave<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            pending: None,
            done: false,
        }
    }
}

impl<A, B> Iterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        if self.done {
            return None;
        }
        let pair = self
            .first
            .next()
            .and_then(|a| self.second.next().map(|b| (a, b)));
        match pair {
            Some((a, b)) => {
                self.pending = Some(b);
                Some(a)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        if self.done {
            return (pending, Some(pending));
        }
        let (first_lo, first_hi) = self.first.size_hint();
        let (second_lo, second_hi) = self.second.size_hint();
        let lo = first_lo
            .min(second_lo)
            .saturating_mul(2)
            .saturating_add(pending);
        let pairs = match (first_hi, second_hi) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        let hi = pairs
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_add(pending));
        (lo, hi)
    }
}

impl<A, B> FusedIterator for Interleave<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

/// Writes `first` and `second` alternately into `dest` until either input is
/// exhausted, and hands `dest` back.
pub fn interleave<A, B, E>(first: A, second: B, mut dest: E) -> E
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    E: Extend<A::Item>,
{
    dest.extend(Interleave::new(first.into_iter(), second.into_iter()));
    dest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::Ring;

    #[test]
    fn stops_at_the_shorter_input() {
        let out = interleave(vec![1, 2, 3], vec![4, 5], Vec::new());
        assert_eq!(out, vec![1, 4, 2, 5]);

        let out = interleave(vec![1], vec![4, 5, 6], Vec::new());
        assert_eq!(out, vec![1, 4]);

        let out = interleave(Vec::<i32>::new(), vec![4, 5, 6], Vec::new());
        assert!(out.is_empty());
    }

    #[test]
    fn reads_from_ring_iterators() {
        let a = Ring::from_array([1, 2, 3]);
        let mut b = Ring::<i32, 3>::new();
        b.push_back(4);
        b.push_back(5);
        let out: Vec<&i32> = interleave(&a, &b, Vec::new());
        assert_eq!(out, vec![&1, &4, &2, &5]);
    }

    #[test]
    fn writes_into_a_ring() {
        let out = interleave([1, 2, 3], [4, 5], Ring::<i32, 3>::new());
        assert_eq!(out.iter().copied().collect::<Vec<_>>(), vec![4, 2, 5]);
    }

    #[test]
    fn cursor_loop_matches_adaptor() -> anyhow::Result<()> {
        let a = Ring::from_array([1, 2, 3]);
        let mut b = Ring::<i32, 2>::new();
        b.extend([4, 5]);

        let (mut it1, last1) = (a.cursor_begin(), a.cursor_end());
        let (mut it2, last2) = (b.cursor_begin(), b.cursor_end());
        let mut out = Vec::new();
        while it1 != last1 && it2 != last2 {
            out.push(*it1.post_next()?.get()?);
            out.push(*it2.post_next()?.get()?);
        }
        assert_eq!(out, Interleave::new(a.iter(), b.iter()).copied().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn size_hint_is_exact_for_exact_inputs() {
        let mut it = Interleave::new([1, 2, 3].into_iter(), [4, 5].into_iter());
        assert_eq!(it.size_hint(), (4, Some(4)));
        it.next();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.by_ref().count(), 3);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }
}
