//! Small helpers.

/// Collect the given items into a `Vec`, in order.
///
/// ```rust
/// use sqlgrid::list;
///
/// let headers: Vec<&str> = list!["id", "name"];
/// assert_eq!(headers, vec!["id", "name"]);
///
/// let none: Vec<i32> = list![];
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        ::std::vec::Vec::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($item),+]
    };
}
