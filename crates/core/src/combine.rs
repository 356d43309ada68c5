//! Batch combinators over collections of [`Result`]s.
//!
//! | Combinator | Success | Failure | Short-circuits |
//! |---|---|---|---|
//! | [`all`] | values, in order | first `Err` | yes |
//! | [`all_settled`] | values, in order | every `Err`, in order | no |
//! | [`any`] | first `Ok` | every error, positional | stops at first `Ok` |
//! | [`collect`] | keyed values | first `Err` in key order | yes |
//! | [`partition`] | `(oks, errs)` | n/a | no |
//! | [`for_each`] | mapped values | first `Err` | yes, later items untouched |
//! | [`zip_or_accumulate`] | values | [`NonEmpty`] errors | no |
//!
//! The free functions take any iterator and stay lazy where they
//! short-circuit. Heterogeneous tuples go through [`ResultTuple`] and
//! [`AnyTuple`].

use crate::non_empty::NonEmpty;
use crate::result::{err, ok, Result};

/// `Ok` of every value, or the first `Err` in iteration order. Items after
/// the first `Err` are never pulled from the iterator.
pub fn all<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().collect()
}

/// Like [`all`], but keeps going and reports every error.
pub fn all_settled<T, E, I>(results: I) -> Result<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let (values, errors) = partition(results);
    if errors.is_empty() {
        ok(values)
    } else {
        err(errors)
    }
}

/// First `Ok`, or every error when nothing succeeded. An empty input has
/// no successes, so it yields `Err(vec![])`.
pub fn any<T, E, I>(results: I) -> Result<T, Vec<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut errors = Vec::new();
    for result in results {
        match result.into_std() {
            Ok(value) => return ok(value),
            Err(error) => errors.push(error),
        }
    }
    err(errors)
}

/// Keyed form of [`all`]: keeps the keys, stops at the first `Err` in
/// iteration order. The caller picks the output container.
pub fn collect<K, T, E, I, C>(entries: I) -> Result<C, E>
where
    I: IntoIterator<Item = (K, Result<T, E>)>,
    C: FromIterator<(K, T)>,
{
    entries
        .into_iter()
        .map(|(key, result)| result.map(|value| (key, value)))
        .collect()
}

/// Split into `(ok_values, err_values)`, both in input order.
pub fn partition<T, E, I>(results: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result.into_std() {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error),
        }
    }
    (values, errors)
}

/// Map every item through `f`, stopping at the first `Err`; `f` is not
/// called for the remaining items.
pub fn for_each<A, T, E, I, F>(items: I, mut f: F) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Result<T, E>,
{
    let items = items.into_iter();
    let mut values = Vec::with_capacity(items.size_hint().0);
    for item in items {
        match f(item).into_std() {
            Ok(value) => values.push(value),
            Err(error) => return err(error),
        }
    }
    ok(values)
}

/// Like [`all_settled`], but the error side is guaranteed non-empty.
pub fn zip_or_accumulate<T, E, I>(results: I) -> Result<Vec<T>, NonEmpty<E>>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    let (values, errors) = partition(results);
    match NonEmpty::from_vec(errors) {
        Some(errors) => err(errors),
        None => ok(values),
    }
}

impl<A, E, C> FromIterator<Result<A, E>> for Result<C, E>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Result::into_std)
            .collect::<std::result::Result<C, E>>()
            .into()
    }
}

// ── Tuples ──────────────────────────────────────────────────────────

/// Combinators over a tuple of results sharing an error type.
pub trait ResultTuple<E> {
    type Values;

    fn all(self) -> Result<Self::Values, E>;

    fn all_settled(self) -> Result<Self::Values, Vec<E>>;

    fn zip_or_accumulate(self) -> Result<Self::Values, NonEmpty<E>>;
}

/// [`any`] over a tuple of results sharing a success type; the error side
/// keeps each position's error type.
pub trait AnyTuple<T> {
    type Errors;

    fn any(self) -> Result<T, Self::Errors>;
}

impl<E> ResultTuple<E> for () {
    type Values = ();

    fn all(self) -> Result<(), E> {
        ok(())
    }

    fn all_settled(self) -> Result<(), Vec<E>> {
        ok(())
    }

    fn zip_or_accumulate(self) -> Result<(), NonEmpty<E>> {
        ok(())
    }
}

macro_rules! result_tuple {
    ($($name:ident: $value:ident, $error:ident);+) => {
        impl<E, $($value),+> ResultTuple<E> for ($(Result<$value, E>,)+) {
            type Values = ($($value,)+);

            fn all(self) -> Result<Self::Values, E> {
                let ($($name,)+) = self;
                $(
                    let $name = match $name.into_std() {
                        Ok(value) => value,
                        Err(error) => return err(error),
                    };
                )+
                ok(($($name,)+))
            }

            fn all_settled(self) -> Result<Self::Values, Vec<E>> {
                self.zip_or_accumulate().map_err(NonEmpty::into_vec)
            }

            fn zip_or_accumulate(self) -> Result<Self::Values, NonEmpty<E>> {
                let ($($name,)+) = self;
                match ($($name.into_std(),)+) {
                    ($(Ok($name),)+) => ok(($($name,)+)),
                    settled => {
                        let ($($name,)+) = settled;
                        let mut errors = Vec::new();
                        $(
                            if let Err(error) = $name {
                                errors.push(error);
                            }
                        )+
                        match NonEmpty::from_vec(errors) {
                            Some(errors) => err(errors),
                            None => unreachable!("a tuple that is not all-Ok holds an Err"),
                        }
                    }
                }
            }
        }

        impl<T, $($error),+> AnyTuple<T> for ($(Result<T, $error>,)+) {
            type Errors = ($($error,)+);

            fn any(self) -> Result<T, Self::Errors> {
                let ($($name,)+) = self;
                $(
                    let $name = match $name.into_std() {
                        Ok(value) => return ok(value),
                        Err(error) => error,
                    };
                )+
                err(($($name,)+))
            }
        }
    };
}

result_tuple!(a: A, EA);
result_tuple!(a: A, EA; b: B, EB);
result_tuple!(a: A, EA; b: B, EB; c: C, EC);
result_tuple!(a: A, EA; b: B, EB; c: C, EC; d: D, ED);
result_tuple!(a: A, EA; b: B, EB; c: C, EC; d: D, ED; e: F, EE);
result_tuple!(a: A, EA; b: B, EB; c: C, EC; d: D, ED; e: F, EE; f: G, EF);
result_tuple!(a: A, EA; b: B, EB; c: C, EC; d: D, ED; e: F, EE; f: G, EF; g: H, EG);
result_tuple!(a: A, EA; b: B, EB; c: C, EC; d: D, ED; e: F, EE; f: G, EF; g: H, EG; h: I, EH);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn all_returns_first_err_in_argument_order() {
        assert_eq!(all(vec![ok(1), err("a"), ok(3), err("b")]), err("a"));
        assert_eq!(all(vec![ok::<i32, &str>(1), ok(2)]), ok(vec![1, 2]));
    }

    #[test]
    fn all_of_nothing_is_ok_empty() {
        assert_eq!(all(Vec::<Result<i32, &str>>::new()), ok(vec![]));
        assert_eq!(ResultTuple::<&str>::all(()), ok(()));
    }

    #[test]
    fn all_stops_pulling_after_first_err() {
        let mut pulled = 0;
        let results = (0..10).map(|i| {
            pulled += 1;
            if i == 2 {
                err(i)
            } else {
                ok(i)
            }
        });
        assert_eq!(all(results), err(2));
        assert_eq!(pulled, 3);
    }

    #[test]
    fn all_settled_reports_every_err() {
        assert_eq!(
            all_settled(vec![ok(1), err("a"), err("b")]),
            err(vec!["a", "b"])
        );
        assert_eq!(all_settled(vec![ok::<i32, &str>(1), ok(2)]), ok(vec![1, 2]));
    }

    #[test]
    fn any_finds_first_ok_or_collects_errors() {
        assert_eq!(any(vec![err("a"), ok(2), ok(3)]), ok(2));
        assert_eq!(
            any(vec![err::<i32, &str>("a"), err("b")]),
            err(vec!["a", "b"])
        );
        assert_eq!(any(Vec::<Result<i32, &str>>::new()), err(vec![]));
    }

    #[test]
    fn collect_keeps_keys() {
        let record: Result<BTreeMap<&str, i32>, &str> =
            collect(vec![("x", ok(1)), ("y", ok(2))]);
        let expected: BTreeMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(record, ok(expected));

        let record: Result<Vec<(&str, i32)>, &str> =
            collect(vec![("x", ok(1)), ("y", err("bad y")), ("z", err("bad z"))]);
        assert_eq!(record, err("bad y"));
    }

    #[test]
    fn partition_preserves_order() {
        let (values, errors) = partition(vec![ok(1), err("a"), ok(2), err("b")]);
        assert_eq!(values, vec![1, 2]);
        assert_eq!(errors, vec!["a", "b"]);
    }

    #[test]
    fn for_each_leaves_later_items_unevaluated() {
        let mut visited = Vec::new();
        let outcome = for_each(vec![1, 2, -3, 4], |n| {
            visited.push(n);
            if n > 0 {
                ok(n * 10)
            } else {
                err(format!("{n} is negative"))
            }
        });
        assert_eq!(outcome, err("-3 is negative".to_string()));
        assert_eq!(visited, vec![1, 2, -3]);
    }

    #[test]
    fn zip_or_accumulate_collects_non_empty_errors() {
        let outcome = zip_or_accumulate(vec![ok(1), err("a"), err("b")]);
        let errors = outcome.to_option_err().to_nullable().unwrap();
        assert_eq!(errors.into_vec(), vec!["a", "b"]);
        assert_eq!(
            zip_or_accumulate(vec![ok::<i32, &str>(1), ok(2)]),
            ok(vec![1, 2])
        );
    }

    #[test]
    fn tuples_keep_heterogeneous_values() {
        let combined = (
            ok::<i32, &str>(1),
            ok::<&str, &str>("two"),
            ok::<f64, &str>(3.0),
        )
            .all();
        assert_eq!(combined, ok((1, "two", 3.0)));
        let failed = (
            ok::<i32, &str>(1),
            err::<&str, &str>("bad"),
            ok::<f64, &str>(3.0),
        )
            .all();
        assert_eq!(failed, err("bad"));

        let settled = (
            err::<i32, &str>("x"),
            ok::<u8, &str>(2),
            err::<bool, &str>("y"),
        )
            .all_settled();
        assert_eq!(settled, err(vec!["x", "y"]));

        let zipped = (ok::<i32, &str>(1), err::<u8, &str>("y")).zip_or_accumulate();
        assert_eq!(zipped, err(NonEmpty::singleton("y")));
    }

    #[test]
    fn any_tuple_keeps_positional_errors() {
        let outcome = (err::<i32, &str>("a"), err::<i32, u8>(2)).any();
        assert_eq!(outcome, err(("a", 2u8)));
        let outcome = (err::<i32, &str>("a"), ok::<i32, u8>(7)).any();
        assert_eq!(outcome, ok(7));
    }
}
