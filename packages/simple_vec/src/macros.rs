/// Creates a [`SimpleVec`][crate::SimpleVec] from a literal list of items.
///
/// The capacity of the result equals the number of items.
///
/// # Examples
///
/// ```
/// use simple_vec::simple_vec;
///
/// let items = simple_vec![1, 2, 3];
/// assert_eq!(items.len(), 3);
/// assert_eq!(items.capacity(), 3);
///
/// // Repeating a value clones it.
/// let zeros = simple_vec![0_u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: simple_vec::SimpleVec<u8> = simple_vec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };
    ($value:expr; $len:expr) => {
        $crate::SimpleVec::from_elem($len, $value)
    };
    ($($item:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($item),+])
    };
}
