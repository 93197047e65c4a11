use derive_more::{Deref, DerefMut, From};

use crate::{Error, Result};

/// Fixed-length run of integers owned by the caller of a walk.
///
/// Derefs to `[i32]`, so it can be handed to [`crate::walker::walk`] or
/// [`crate::walker::walk_mut`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, DerefMut, From)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    /// `len` consecutive values beginning at `start`, or
    /// [`Error::OutOfRange`] if the last one would not fit in `i32`.
    pub fn iota(len: usize, start: i32) -> Result<Self> {
        (0..len)
            .map(|offset| {
                i32::try_from(offset)
                    .ok()
                    .and_then(|offset| start.checked_add(offset))
                    .ok_or(Error::OutOfRange { len, start })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iota_from_zero() -> Result<()> {
        assert_eq!(Sequence::iota(5, 0)?.into_inner(), vec![0, 1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn iota_with_offset_start() -> Result<()> {
        assert_eq!(Sequence::iota(3, -1)?.into_inner(), vec![-1, 0, 1]);
        Ok(())
    }

    #[test]
    fn iota_empty() -> Result<()> {
        let seq = Sequence::iota(0, i32::MAX)?;
        assert!(seq.is_empty());
        Ok(())
    }

    #[test]
    fn iota_up_to_i32_max() -> Result<()> {
        let seq = Sequence::iota(2, i32::MAX - 1)?;
        assert_eq!(seq.into_inner(), vec![i32::MAX - 1, i32::MAX]);
        Ok(())
    }

    #[test]
    fn iota_past_i32_max_is_out_of_range() {
        assert!(matches!(
            Sequence::iota(3, i32::MAX - 1),
            Err(Error::OutOfRange { len: 3, start }) if start == i32::MAX - 1
        ));
    }

    #[test]
    fn iota_from_i32_min_spans_zero() -> Result<()> {
        let seq = Sequence::iota(2, i32::MIN)?;
        assert_eq!(seq.into_inner(), vec![i32::MIN, i32::MIN + 1]);
        Ok(())
    }

    #[test]
    fn deref_mut_writes_through() {
        let mut seq = Sequence::from(vec![1, 2]);
        seq[1] = 10;
        assert_eq!(&seq[..], &[1, 10]);
    }
}
