//! End-to-end use of the facade with default features.

use serde_json::json;
use unthrown::combine::{all, all_settled, partition};
use unthrown::prelude::*;
use unthrown::unsafe_extract::{UnsafeExtract, UnwrapError};
use unthrown::{create_error_group, from_json, fp, is_result, tagged::Tagged, Validation};

#[test]
fn batch_combinators_on_the_facade() {
    assert_eq!(all(vec![ok(1), err("a"), ok(3)]), err("a"));
    assert_eq!(
        all_settled(vec![ok(1), err("a"), err("b")]),
        err(vec!["a", "b"])
    );
    assert_eq!(
        partition(vec![ok(1), err("a"), ok(2), err("b")]),
        (vec![1, 2], vec!["a", "b"])
    );
}

#[test]
fn json_clone_loses_the_brand_until_decoded() {
    let original = ok::<u32, String>(7);
    let doc = original.to_json().into_std().unwrap();
    let raw_clone: serde_json::Value = serde_json::from_str(&doc.to_string()).unwrap();
    assert!(!is_result::<u32, String>(&raw_clone));

    let decoded = from_json::<u32, String>(&raw_clone).into_std().unwrap();
    assert!(is_result::<u32, String>(&decoded));
    assert_eq!(decoded, original);
}

#[test]
fn tagged_errors_travel_as_payloads() {
    let billing = create_error_group("billing");
    let declined = billing.create("CardDeclined");
    let failed: Result<(), _> = err(declined.make(json!({ "last4": "4242" })));

    let doc = failed.to_json().into_std().unwrap();
    assert!(billing.is(&doc["error"]));
    assert_eq!(doc["error"].tag(), Some("CardDeclined"));
    assert_eq!(doc["error"]["last4"], "4242");
}

#[test]
fn curried_surface_is_reexported() {
    let out = ok::<i32, String>(2)
        .pipe(fp::result::map(|n: i32| n + 1))
        .pipe(fp::result::to_option);
    assert_eq!(out, some(3));
}

#[test]
fn schema_adapter_is_reexported() {
    let schema = unthrown::to_schema(|n: i32| -> Result<i32, String> {
        if n > 0 {
            ok(n)
        } else {
            err("must be positive".into())
        }
    });
    assert_eq!(schema.validate(5), Validation::Success { value: 5 });
    assert_eq!(schema.validate(0).issues()[0].message, "must be positive");
}

#[test]
fn unsafe_extraction_needs_an_explicit_import() {
    assert_eq!(ok::<u8, ()>(9).unsafe_unwrap(), 9);
    let payload = std::panic::catch_unwind(|| none::<u8>().unsafe_unwrap()).unwrap_err();
    let failure = payload.downcast::<UnwrapError>().unwrap();
    assert_eq!(failure.tag, "None");
}

#[tokio::test]
async fn never_rejecting_futures() {
    let settled = ResultAsync::<u8, &str>::from_promise(async { Err("x") }, |e| e).await;
    assert_eq!(settled, err("x"));

    let chained = ok::<u8, &str>(1)
        .to_async()
        .and_then(|n: u8| ResultAsync::<u8, &str>::ok(n * 2))
        .await;
    assert_eq!(chained, ok(2));
}
