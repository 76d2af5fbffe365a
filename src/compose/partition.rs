//! Sliding and hopping windows.

use std::collections::VecDeque;

use crate::{
    build::from_vec,
    error::SeqError,
    generator::{BoxGenerator, Generator, Position},
    sequence::Sequence,
    step::{Pull, Step},
};

/// Yields successive windows of a fixed size, each as its own finite sequence.
pub struct Partition<T> {
    source: BoxGenerator<T>,
    size: usize,
    step: usize,
    pad: Option<Sequence<T>>,
    window: VecDeque<T>,
    // elements still to discard before the next window starts
    pending_skip: usize,
    source_done: bool,
    finished: bool,
    position: Position,
}

impl<T: Clone + 'static> Partition<T> {
    /// Pull one element from the source, or record that it ran out.
    fn pull(&mut self) -> Result<Option<T>, SeqError> {
        if self.source_done {
            return Ok(None);
        }
        match self.source.next() {
            Step::Yielded(item) => Ok(Some(item.value)),
            Step::Complete(outcome) => {
                self.source_done = true;
                outcome.map(|()| None)
            }
        }
    }

    fn advance(&mut self) -> Result<(), SeqError> {
        while self.pending_skip > 0 {
            if self.window.pop_front().is_none() && self.pull()?.is_none() {
                self.pending_skip = 0;
                break;
            }
            self.pending_skip -= 1;
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<(), SeqError> {
        while self.window.len() < self.size {
            match self.pull()? {
                Some(value) => self.window.push_back(value),
                None => break,
            }
        }
        Ok(())
    }

    fn pad_window(&mut self, pad: &Sequence<T>) -> Result<(), SeqError> {
        let mut filler = pad.generator();
        while self.window.len() < self.size {
            match filler.next() {
                Step::Yielded(item) => self.window.push_back(item.value),
                Step::Complete(outcome) => return outcome,
            }
        }
        Ok(())
    }

    fn next_window(&mut self) -> Result<Option<Vec<T>>, SeqError> {
        if self.size == 0 {
            return Err(SeqError::invalid("size", "must be at least 1"));
        }
        if self.step == 0 {
            return Err(SeqError::invalid("step", "must be at least 1"));
        }
        if self.finished {
            return Ok(None);
        }

        self.advance()?;
        self.fill()?;
        if self.window.len() == self.size {
            self.pending_skip = self.step;
            return Ok(Some(self.window.iter().cloned().collect()));
        }

        // Short final window: only kept when there is a pad to complete it
        self.finished = true;
        match self.pad.clone() {
            Some(pad) if !self.window.is_empty() => {
                self.pad_window(&pad)?;
                Ok(Some(self.window.drain(..).collect()))
            }
            _ => Ok(None),
        }
    }
}

impl<T: Clone + 'static> Generator for Partition<T> {
    type Item = Sequence<T>;

    fn next(&mut self) -> Pull<Sequence<T>> {
        match self.next_window() {
            Ok(Some(window)) => self.position.emit(from_vec(window)),
            Ok(None) => Step::Complete(Ok(())),
            Err(e) => Step::Complete(Err(e)),
        }
    }
}

/// Split `sequence` into windows of `size` elements whose starts are `step` apart.
///
/// `step` defaults to `size` (adjacent, non-overlapping windows). Windows stop
/// once too few elements remain to fill one, unless `pad` is given: then the
/// last partial window is completed from `pad` in order, and yielded short if
/// `pad` runs out too. A zero `size` or `step` fails when the result is pulled.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let windows = partition(6, Some(3), Some(&from_vec(vec![97, 98, 99])), &up_to(10));
/// let windows: Vec<Vec<i32>> = to_vec(&windows)
///     .unwrap()
///     .iter()
///     .map(|w| to_vec(w).unwrap())
///     .collect();
/// assert_eq!(
///     windows,
///     vec![
///         vec![0, 1, 2, 3, 4, 5],
///         vec![3, 4, 5, 6, 7, 8],
///         vec![6, 7, 8, 9, 97, 98],
///     ]
/// );
/// ```
pub fn partition<T>(
    size: usize,
    step: Option<usize>,
    pad: Option<&Sequence<T>>,
    sequence: &Sequence<T>,
) -> Sequence<Sequence<T>>
where
    T: Clone + 'static,
{
    let step = step.unwrap_or(size);
    let pad = pad.cloned();
    let sequence = sequence.clone();
    Sequence::from_factory(move || Partition {
        source: sequence.generator(),
        size,
        step,
        pad: pad.clone(),
        window: VecDeque::with_capacity(size),
        pending_skip: 0,
        source_done: false,
        finished: false,
        position: Position::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        build::{count_from, empty, up_to},
        derived::take,
        force::to_vec,
    };

    fn windows(seq: &Sequence<Sequence<i32>>) -> Vec<Vec<i32>> {
        to_vec(seq)
            .unwrap()
            .iter()
            .map(|w| to_vec(w).unwrap())
            .collect()
    }

    #[test]
    fn test_step_larger_than_size_skips() {
        let seq = partition(3, Some(10), None, &up_to(40));
        assert_eq!(
            windows(&seq),
            vec![vec![0, 1, 2], vec![10, 11, 12], vec![20, 21, 22], vec![30, 31, 32]]
        );
    }

    #[test]
    fn test_overlapping_windows_drop_short_tail() {
        let seq = partition(4, Some(2), None, &up_to(10));
        assert_eq!(
            windows(&seq),
            vec![vec![0, 1, 2, 3], vec![2, 3, 4, 5], vec![4, 5, 6, 7], vec![6, 7, 8, 9]]
        );
    }

    #[test]
    fn test_default_step_is_size() {
        let seq = partition(2, None, None, &up_to(5));
        assert_eq!(windows(&seq), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_pad_running_out_leaves_short_window() {
        let pad = from_vec(vec![-1]);
        let seq = partition(4, None, Some(&pad), &up_to(6));
        assert_eq!(windows(&seq), vec![vec![0, 1, 2, 3], vec![4, 5, -1]]);
    }

    #[test]
    fn test_enough_pad_fills_last_window() {
        let pad = from_vec(vec![0; 10]);
        let seq = partition(4, Some(3), Some(&pad), &up_to(11));
        let all = windows(&seq);
        assert!(all.iter().all(|w| w.len() == 4));
        assert_eq!(all.last(), Some(&vec![9, 10, 0, 0]));
    }

    #[test]
    fn test_pad_not_used_for_empty_tail() {
        let pad = from_vec(vec![99]);
        let seq = partition(2, None, Some(&pad), &up_to(4));
        assert_eq!(windows(&seq), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_partition_of_empty() {
        let seq = partition(3, None, None, &empty::<i32>());
        assert!(windows(&seq).is_empty());
    }

    #[test]
    fn test_partition_of_infinite_source() {
        let seq = take(2, &partition(2, Some(5), None, &count_from(0)));
        assert_eq!(windows(&seq), vec![vec![0, 1], vec![5, 6]]);
    }

    #[test]
    fn test_zero_size_fails_on_pull() {
        let seq = partition(0, Some(1), None, &up_to(3));
        assert!(matches!(
            to_vec(&seq),
            Err(SeqError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_windows_are_replayable() {
        let first = to_vec(&partition(2, None, None, &up_to(2))).unwrap().remove(0);
        assert_eq!(to_vec(&first).unwrap(), to_vec(&first).unwrap());
    }
}
