//! Checked slice utilities.

use crate::error::{ArborError, Result};

/// Swap the elements at `index_a` and `index_b`.
///
/// # Errors
///
/// Returns [`ArborError::InvalidArgument`] for an empty slice and
/// [`ArborError::OutOfRange`] when either index is past the end.
pub fn swap_elements<T>(slice: &mut [T], index_a: usize, index_b: usize) -> Result<()> {
    if slice.is_empty() {
        return Err(ArborError::InvalidArgument(
            "slice must not be empty".into(),
        ));
    }

    let len = slice.len();
    if index_a >= len || index_b >= len {
        return Err(ArborError::OutOfRange(format!(
            "indices ({index_a}, {index_b}) for slice of length {len}"
        )));
    }

    slice.swap(index_a, index_b);
    Ok(())
}
