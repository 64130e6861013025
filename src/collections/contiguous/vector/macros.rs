/// Creates a [`Vector`](crate::collections::contiguous::Vector) containing the provided elements,
/// with a capacity equal to the number of elements.
///
/// - `vector![]` creates an empty Vector.
/// - `vector![a, b, c]` creates a Vector containing each element in order.
/// - `vector![value; count]` creates a Vector containing `count` clones of `value`.
///
/// # Examples
/// ```
/// # use contiguous_vector::vector;
/// let vec = vector![1, 2, 3];
/// assert_eq!(vec, [1, 2, 3]);
/// assert_eq!(vec.cap(), 3);
///
/// let vec = vector!["ab"; 2];
/// assert_eq!(vec, ["ab", "ab"]);
///
/// let vec: contiguous_vector::collections::contiguous::Vector<u8> = vector![];
/// assert_eq!(vec.cap(), 0);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Vector::from_elem($value, $count)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from_range([$($item),+])
    };
}
