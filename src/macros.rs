/// Names the union type of the right arity for a list of alternatives.
///
/// # Examples
///
/// ```rust
/// use caseunion::{TaggedUnion, Union, Union3};
///
/// type Token = Union![u32, char, String];
/// let t: Token = Union3::new('x');
/// assert_eq!(t.case2(), Ok(&'x'));
/// ```
#[macro_export]
macro_rules! Union {
    [$t1:ty, $t2:ty $(,)?] => [$crate::Union2<$t1, $t2>];
    [$t1:ty, $t2:ty, $t3:ty $(,)?] => [$crate::Union3<$t1, $t2, $t3>];
    [$t1:ty, $t2:ty, $t3:ty, $t4:ty $(,)?] => [$crate::Union4<$t1, $t2, $t3, $t4>];
}
