//! Predicate combination.

use crate::error::{ArborError, Result};

/// A boxed test over borrowed values of `T`.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Combine predicates into a single short-circuiting logical AND.
///
/// The returned predicate evaluates the inputs in order and returns
/// `false` at the first failing predicate without evaluating the rest;
/// it returns `true` only if every predicate passes.
///
/// # Errors
///
/// Returns [`ArborError::InvalidArgument`] when `predicates` is empty:
/// conjunction over zero predicates is rejected rather than defaulting to
/// vacuous truth, so no caller silently always passes.
///
/// # Example
///
/// ```rust
/// use arbor_core::predicate::{all_of, Predicate};
///
/// let in_range = all_of(vec![
///     Box::new(|x: &i32| *x > -10) as Predicate<i32>,
///     Box::new(|x: &i32| *x < 10),
/// ])
/// .unwrap();
///
/// assert!(in_range(&3));
/// assert!(!in_range(&25));
/// ```
pub fn all_of<T: 'static>(predicates: Vec<Predicate<T>>) -> Result<Predicate<T>> {
    if predicates.is_empty() {
        return Err(ArborError::InvalidArgument(
            "predicate list must not be empty".into(),
        ));
    }

    Ok(Box::new(move |item| {
        predicates.iter().all(|predicate| predicate(item))
    }))
}
