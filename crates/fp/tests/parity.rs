//! The standalone functions agree with the methods they mirror.

use std::future::Future;

use proptest::prelude::*;
use unthrown_async::{ResultAsync, ResultAsyncExt};
use unthrown_core::{err, none, ok, some, Option, Result, Thrown};
use unthrown_fp::{option as fo, result as fr, result_async as fa, Pipe};

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(ok::<i32, String>),
        "[a-z]{0,8}".prop_map(err::<i32, String>),
    ]
}

fn option_strategy() -> impl Strategy<Value = Option<i32>> {
    prop_oneof![any::<i32>().prop_map(some::<i32>), Just(none())]
}

fn checked_div(n: i32) -> Result<i32, String> {
    if n % 3 == 0 {
        ok(n / 3)
    } else {
        err(format!("{n} not divisible by 3"))
    }
}

fn halve_even(n: i32) -> Option<i32> {
    if n % 2 == 0 {
        some(n / 2)
    } else {
        none()
    }
}

fn settle<R>(future: impl Future<Output = R>) -> R {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #[test]
    fn result_transforms_agree(r in result_strategy()) {
        let f = |v: i32| v.wrapping_mul(5);
        prop_assert_eq!(fr::map(f)(r.clone()), r.clone().map(f));
        prop_assert_eq!(fr::map_err(|e: String| e.len())(r.clone()), r.clone().map_err(|e| e.len()));
        prop_assert_eq!(fr::and_then(checked_div)(r.clone()), r.clone().and_then(checked_div));
        prop_assert_eq!(
            fr::or_else(|e: String| ok::<i32, usize>(e.len() as i32))(r.clone()),
            r.clone().or_else(|e| ok::<i32, usize>(e.len() as i32))
        );
        prop_assert_eq!(fr::flip(r.clone()), r.clone().flip());
        prop_assert_eq!(
            fr::map_both(|v: i32| i64::from(v), |e: String| e.len())(r.clone()),
            r.clone().map_both(i64::from, |e| e.len())
        );
        let nested = r.clone().map(checked_div);
        prop_assert_eq!(fr::flatten(nested.clone()), nested.flatten());
        let maybe = r.clone().map(halve_even);
        prop_assert_eq!(fr::transpose(maybe.clone()), maybe.transpose());
    }

    #[test]
    fn result_guards_and_combinators_agree(r in result_strategy(), other in result_strategy()) {
        prop_assert_eq!(fr::tag(&r), r.tag());
        prop_assert_eq!(fr::as_ref(&r), r.as_ref());
        prop_assert_eq!(fr::is_err(&r), r.is_err());
        prop_assert_eq!(
            fr::is_err_and(|e: &String| e.is_empty())(&r),
            r.is_err_and(|e| e.is_empty())
        );
        prop_assert_eq!(fr::and(other.clone())(r.clone()), r.clone().and(other.clone()));
        prop_assert_eq!(
            fr::or(ok::<i32, usize>(0))(r.clone()),
            r.clone().or(ok::<i32, usize>(0))
        );
        prop_assert_eq!(fr::or(other.clone())(r.clone()), r.clone().or(other));
    }

    #[test]
    fn result_folds_agree(r in result_strategy(), default in any::<i32>()) {
        prop_assert_eq!(fr::unwrap_or(default)(r.clone()), r.clone().unwrap_or(default));
        prop_assert_eq!(
            fr::map_or_else(|e: String| e.len() as i64, |v: i32| i64::from(v))(r.clone()),
            r.clone().map_or_else(|e| e.len() as i64, i64::from)
        );
        prop_assert_eq!(fr::is_ok(&r), r.is_ok());
        prop_assert_eq!(fr::contains(default)(&r), r.contains(&default));
        prop_assert_eq!(fr::into_tuple(r.clone()), r.clone().into_tuple());
        prop_assert_eq!(fr::to_option(r.clone()), r.clone().to_option());
        prop_assert_eq!(fr::to_option_err(r.clone()), r.clone().to_option_err());
        prop_assert_eq!(fr::to_nullable(r.clone()), r.clone().to_nullable());
        prop_assert_eq!(fr::to_undefined(r.clone()), r.clone().to_undefined());
        prop_assert_eq!(
            fr::map_or(default, |v: i32| v.wrapping_sub(1))(r.clone()),
            r.clone().map_or(default, |v| v.wrapping_sub(1))
        );
        prop_assert_eq!(
            fr::unwrap_or_else(|e: String| e.len() as i32)(r.clone()),
            r.clone().unwrap_or_else(|e| e.len() as i32)
        );
        let needle = String::from("abc");
        prop_assert_eq!(fr::contains_err(needle.clone())(&r), r.contains_err(&needle));
        prop_assert_eq!(
            fr::match_with(|v: i32| v.to_string(), |e: String| e)(r.clone()),
            r.clone().match_with(|v| v.to_string(), |e| e)
        );
        let stringly = r.map(|v| v.to_string());
        let merged: String = fr::merge(stringly.clone());
        prop_assert_eq!(merged, stringly.merge::<String>());
    }

    #[test]
    fn result_side_effects_agree(r in result_strategy()) {
        let through = |v: &i32| checked_div(*v);
        prop_assert_eq!(fr::and_through(through)(r.clone()), r.clone().and_through(through));
        prop_assert_eq!(fr::inspect(|_: &i32| ())(r.clone()), r.clone().inspect(|_| ()));
        prop_assert_eq!(fr::or_tee(|_: &String| ())(r.clone()), r.clone());
        prop_assert_eq!(fr::inspect_err(|_: &String| ())(r.clone()), r.clone().inspect_err(|_| ()));

        let picky = |v: &i32| {
            if *v < 0 {
                panic!("negative")
            }
        };
        let short = |e: &String| {
            if e.len() < 3 {
                panic!("short")
            }
        };
        let describe = |thrown: Thrown| thrown.message().to_string();
        prop_assert_eq!(fr::and_tee(picky)(r.clone()), r.clone().and_tee(picky));
        prop_assert_eq!(
            fr::and_tee_checked(picky, describe)(r.clone()),
            r.clone().and_tee_checked(picky, describe)
        );
        prop_assert_eq!(
            fr::or_tee_checked(short, describe)(r.clone()),
            r.clone().or_tee_checked(short, describe)
        );
    }

    #[test]
    fn option_operations_agree(o in option_strategy(), other in option_strategy()) {
        let even = |v: &i32| v % 2 == 0;
        prop_assert_eq!(fo::filter(even)(o), o.filter(even));
        prop_assert_eq!(fo::or(other)(o), o.or(other));
        prop_assert_eq!(fo::zip(other)(o), o.zip(other));
        prop_assert_eq!(fo::map(|v: i32| v.wrapping_neg())(o), o.map(|v| v.wrapping_neg()));
        prop_assert_eq!(fo::to_result(|| "absent")(o), o.to_result(|| "absent"));
        prop_assert_eq!(fo::to_nullable(o), o.to_nullable());
        prop_assert_eq!(fo::to_undefined(o), o.to_undefined());
        prop_assert_eq!(fo::from_nullable(o.to_nullable()), o);
    }

    #[test]
    fn option_folds_agree(o in option_strategy(), other in option_strategy(), default in any::<i32>()) {
        let even = |v: &i32| v % 2 == 0;
        prop_assert_eq!(fo::tag(&o), o.tag());
        prop_assert_eq!(fo::as_ref(&o), o.as_ref());
        prop_assert_eq!(fo::is_some(&o), o.is_some());
        prop_assert_eq!(fo::is_none(&o), o.is_none());
        prop_assert_eq!(fo::is_some_and(even)(&o), o.is_some_and(even));
        prop_assert_eq!(fo::and_then(halve_even)(o), o.and_then(halve_even));
        prop_assert_eq!(fo::or_else(|| other)(o), o.or_else(|| other));
        prop_assert_eq!(
            fo::zip_with(other, |a: i32, b: i32| a.wrapping_add(b))(o),
            o.zip_with(other, |a, b| a.wrapping_add(b))
        );
        prop_assert_eq!(
            fo::map_or(default, |v: i32| v.wrapping_mul(3))(o),
            o.map_or(default, |v| v.wrapping_mul(3))
        );
        prop_assert_eq!(
            fo::match_with(|v: i32| v.wrapping_mul(2), || default)(o),
            o.match_with(|v| v.wrapping_mul(2), || default)
        );
        prop_assert_eq!(fo::unwrap_or(default)(o), o.unwrap_or(default));
        prop_assert_eq!(fo::unwrap_or_else(|| default)(o), o.unwrap_or_else(|| default));

        let nested = o.map(halve_even);
        prop_assert_eq!(fo::flatten(nested), nested.flatten());
        let checked = o.map(checked_div);
        prop_assert_eq!(fo::transpose(checked.clone()), checked.transpose());
    }

    #[test]
    fn async_chain_agrees_with_sync_chain(r in result_strategy()) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let piped = runtime.block_on(
            ResultAsync::from_result(r.clone())
                .pipe(fa::map(|v: i32| v.wrapping_add(9)))
                .pipe(fa::and_then(checked_div))
                .pipe(fa::map_err(|e: String| e.to_uppercase())),
        );
        let sync = r
            .map(|v| v.wrapping_add(9))
            .and_then(checked_div)
            .map_err(|e| e.to_uppercase());
        prop_assert_eq!(piped, sync);
    }

    #[test]
    fn async_transforms_agree(r in result_strategy()) {
        let lift = || ResultAsync::from_result(r.clone());
        prop_assert_eq!(
            settle(lift().pipe(fa::map_async(|v: i32| async move { v.wrapping_add(1) }))),
            settle(lift().map_async(|v| async move { v.wrapping_add(1) }))
        );
        prop_assert_eq!(
            settle(lift().pipe(fa::or_else(|e: String| ok::<i32, usize>(e.len() as i32)))),
            settle(lift().or_else(|e| ok::<i32, usize>(e.len() as i32)))
        );
        prop_assert_eq!(
            settle(lift().pipe(fa::and_through(|v: &i32| checked_div(*v)))),
            settle(lift().and_through(|v: &i32| checked_div(*v)))
        );

        let picky = |v: i32| {
            if v < 0 {
                panic!("negative")
            }
            v
        };
        let describe = |thrown: Thrown| thrown.message().to_string();
        let guarded = settle(lift().pipe(fa::map(picky)).pipe(fa::catch_panics(describe)));
        prop_assert_eq!(guarded.clone(), settle(lift().map(picky).catch_panics(describe)));
        prop_assert_eq!(guarded.is_err(), r.is_err() || r.is_ok_and(|v| *v < 0));
    }

    #[test]
    fn async_side_effects_agree(r in result_strategy()) {
        let lift = || ResultAsync::from_result(r.clone());
        let picky = |v: &i32| {
            if *v < 0 {
                panic!("negative")
            }
        };
        let short = |e: &String| {
            if e.len() < 3 {
                panic!("short")
            }
        };
        prop_assert_eq!(settle(lift().pipe(fa::and_tee(picky))), settle(lift().and_tee(picky)));
        prop_assert_eq!(settle(lift().pipe(fa::or_tee(short))), settle(lift().or_tee(short)));
        prop_assert_eq!(settle(lift().pipe(fa::or_tee(short))), r.clone());
        prop_assert_eq!(
            settle(lift().pipe(fa::inspect(|_: &i32| ()))),
            settle(lift().inspect(|_| ()))
        );
        prop_assert_eq!(
            settle(lift().pipe(fa::inspect_err(|_: &String| ()))),
            settle(lift().inspect_err(|_| ()))
        );
    }

    #[test]
    fn async_folds_agree(r in result_strategy(), default in any::<i32>()) {
        let lift = || ResultAsync::from_result(r.clone());
        prop_assert_eq!(
            settle(lift().pipe(fa::match_with(|v: i32| v.to_string(), |e: String| e))),
            settle(lift().match_with(|v| v.to_string(), |e| e))
        );
        prop_assert_eq!(
            settle(lift().pipe(fa::unwrap_or(default))),
            settle(lift().unwrap_or(default))
        );
        prop_assert_eq!(settle(lift().pipe(fa::unwrap_or(default))), r.clone().unwrap_or(default));
    }

    #[test]
    fn sync_to_async_bridge_agrees(r in result_strategy()) {
        prop_assert_eq!(settle(fa::to_async(r.clone())), settle(r.clone().to_async()));
        prop_assert_eq!(settle(fa::to_async(r.clone())), r.clone());
        prop_assert_eq!(
            settle(fa::async_map(|v: i32| async move { v / 2 })(r.clone())),
            settle(r.clone().async_map(|v| async move { v / 2 }))
        );
        prop_assert_eq!(
            settle(fa::async_and_then(|v: i32| ResultAsync::from_result(checked_div(v)))(r.clone())),
            settle(r.clone().async_and_then(|v| ResultAsync::from_result(checked_div(v))))
        );
    }
}

#[tokio::test]
async fn async_unwrap_or_else_settles() {
    let settled = ResultAsync::<u8, String>::err("gone".into())
        .pipe(fa::unwrap_or_else(|e: String| e.len() as u8))
        .await;
    assert_eq!(settled, 4);
}
