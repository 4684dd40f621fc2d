pub mod search;

/// Apply a set of options to a target, like query parameters to a request.
pub trait Apply<T> {
    fn apply(self, value: &T) -> Self;
}
