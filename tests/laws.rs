use std::{
    cell::Cell,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use caseunion::{MatchError, TaggedUnion, Union3, Variant};
use proptest::prelude::*;

type U = Union3<i64, String, bool>;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn union() -> impl Strategy<Value = U> {
    prop_oneof![
        any::<i64>().prop_map(U::from_case1),
        "[a-c]{0,3}".prop_map(U::from_case2),
        any::<bool>().prop_map(U::from_case3),
    ]
}

proptest! {
    #[test]
    fn equal_iff_same_case_and_value(a in union(), b in union()) {
        let same = match (a.case(), b.case()) {
            (Variant::Case1, Variant::Case1) => a.case1() == b.case1(),
            (Variant::Case2, Variant::Case2) => a.case2() == b.case2(),
            (Variant::Case3, Variant::Case3) => a.case3() == b.case3(),
            _ => false,
        };
        prop_assert_eq!(a == b, same);
    }

    #[test]
    fn equal_unions_hash_equal(a in union(), b in union()) {
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
        prop_assert_eq!(hash_of(&a), hash_of(&a.clone()));
    }

    #[test]
    fn only_the_active_slot_reads(value in any::<i64>()) {
        let u = U::from_case1(value);
        prop_assert_eq!(u.case1(), Ok(&value));
        prop_assert_eq!(u.case2().unwrap_err().actual(), Variant::Case1);
        prop_assert_eq!(u.case3().unwrap_err().requested(), Variant::Case3);
        prop_assert_eq!(u.case4().unwrap_err().requested(), Variant::Case4);
        prop_assert_eq!(u.case(), Variant::Case1);
    }

    #[test]
    fn matcher_runs_the_active_handler_once(u in union()) {
        let calls = Cell::new(0);
        let case = u
            .matcher()
            .on_case3(|_| { calls.set(calls.get() + 1); Variant::Case3 })
            .on_case1(|_| { calls.set(calls.get() + 1); Variant::Case1 })
            .on_case2(|_| { calls.set(calls.get() + 1); Variant::Case2 })
            .result();
        prop_assert_eq!(case, Ok(u.case()));
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unhandled_case_needs_a_default(u in union()) {
        let result = u.matcher().on_case1(|_| ()).result();
        if u.case() == Variant::Case1 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(MatchError::NoMatch(u.case())));
            prop_assert_eq!(u.matcher().on_case1(|_| ()).on_default(|_| ()).result(), Ok(()));
        }
    }

    #[test]
    fn option_round_trip(value in any::<u32>()) {
        let some = caseunion::Option::some(value);
        prop_assert!(some.has_value());
        prop_assert_eq!(some.value(), Ok(&value));
        prop_assert_ne!(some, caseunion::Option::none());
        prop_assert_eq!(some, caseunion::Option::from(value));
    }
}
