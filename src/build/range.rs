use crate::{
    error::SeqError,
    generator::{Generator, Position},
    num::Numeric,
    sequence::Sequence,
    step::{Pull, Step},
};

/// Cursor for an arithmetic progression, bounded or not.
///
/// The progression also ends when the next value would not fit in `T`.
pub struct RangeGenerator<T> {
    // `None` once stepping past the last value overflowed
    next: Option<T>,
    stop: Option<T>,
    step: T,
    position: Position,
}

impl<T: Numeric> Generator for RangeGenerator<T> {
    type Item = T;

    fn next(&mut self) -> Pull<T> {
        if self.step == T::ZERO {
            return Step::Complete(Err(SeqError::invalid("step", "must not be zero")));
        }
        let Some(value) = self.next else {
            return Step::Complete(Ok(()));
        };
        if let Some(stop) = self.stop {
            let reached = if self.step > T::ZERO {
                value >= stop
            } else {
                value <= stop
            };
            if reached {
                return Step::Complete(Ok(()));
            }
        }
        self.next = value.checked_add(self.step);
        self.position.emit(value)
    }
}

/// Create the progression `start, start + step, …`, stopping before `stop` if one is given.
///
/// Without `stop` the sequence runs until the element type overflows, ascending
/// or descending with the sign of `step`. A zero `step` fails when the sequence
/// is first pulled, whether or not `stop` is given.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(to_vec(&range(10, Some(0), -3)).unwrap(), vec![10, 7, 4, 1]);
/// ```
pub fn range<T: Numeric>(start: T, stop: Option<T>, step: T) -> Sequence<T> {
    Sequence::from_factory(move || RangeGenerator {
        next: Some(start),
        stop,
        step,
        position: Position::default(),
    })
}

/// `0, 1, …, stop - 1`.
pub fn up_to<T: Numeric>(stop: T) -> Sequence<T> {
    range(T::ZERO, Some(stop), T::ONE)
}

/// `start, start + 1, …, stop - 1`.
pub fn between<T: Numeric>(start: T, stop: T) -> Sequence<T> {
    range(start, Some(stop), T::ONE)
}

/// `start, start + 1, …` until the element type runs out of values.
pub fn count_from<T: Numeric>(start: T) -> Sequence<T> {
    range(start, None, T::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{derived::take, force::to_vec};

    #[test]
    fn test_up_to_is_half_open() {
        assert_eq!(to_vec(&up_to(4)).unwrap(), vec![0, 1, 2, 3]);
        assert!(to_vec(&up_to(0)).unwrap().is_empty());
    }

    #[test]
    fn test_between_with_start_past_stop_is_empty() {
        assert!(to_vec(&between(5, 3)).unwrap().is_empty());
    }

    #[test]
    fn test_step_overshooting_stop() {
        assert_eq!(to_vec(&range(0, Some(10), 4)).unwrap(), vec![0, 4, 8]);
    }

    #[test]
    fn test_unbounded_descending() {
        let seq = take(3, &range(0i64, None, -2));
        assert_eq!(to_vec(&seq).unwrap(), vec![0, -2, -4]);
    }

    #[test]
    fn test_float_range() {
        assert_eq!(to_vec(&range(0.0, Some(1.0), 0.25)).unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_zero_step_fails_on_pull() {
        // building is fine, forcing is not
        let seq = range(1, Some(5), 0);
        assert!(matches!(
            to_vec(&seq),
            Err(SeqError::InvalidArgument { name: "step", .. })
        ));
    }

    #[test]
    fn test_zero_step_without_stop_fails_on_pull() {
        assert!(matches!(
            to_vec(&take(3, &range(7u32, None, 0))),
            Err(SeqError::InvalidArgument { name: "step", .. })
        ));
    }

    #[test]
    fn test_step_past_type_max_ends_bounded_range() {
        assert_eq!(to_vec(&range(250u8, Some(255), 10)).unwrap(), vec![250]);
        assert_eq!(
            to_vec(&range(i32::MAX - 5, Some(i32::MAX), 2)).unwrap(),
            vec![i32::MAX - 5, i32::MAX - 3, i32::MAX - 1]
        );
    }

    #[test]
    fn test_descending_past_type_min_ends() {
        assert_eq!(to_vec(&range(-120i8, Some(-128), -5)).unwrap(), vec![-120, -125]);
        assert_eq!(to_vec(&range(-126i8, None, -1)).unwrap(), vec![-126, -127, -128]);
    }

    #[test]
    fn test_unbounded_range_stops_at_type_max() {
        assert_eq!(to_vec(&count_from(u8::MAX - 2)).unwrap(), vec![253, 254, 255]);
    }

    #[test]
    fn test_indices_follow_position() {
        let mut cursor = count_from(100u32).generator();
        assert_eq!(cursor.next().unwrap_yielded().index, 0);
        assert_eq!(cursor.next().unwrap_yielded().index, 1);
    }
}
