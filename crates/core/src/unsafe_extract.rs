//! Panicking extraction.
//!
//! Kept behind its own import path so that code reaching for it says so.
//! Every method panics with an [`UnwrapError`] payload, which carries the tag
//! of the variant that was actually found and a debug rendering of its
//! content.
//!
//! ```should_panic
//! use unthrown_core::err;
//! use unthrown_core::unsafe_extract::UnsafeExtract;
//!
//! let port: u16 = err::<u16, &str>("not configured").unsafe_expect("port must be set");
//! ```

use std::fmt;

use crate::option::{Option, OptionTag};
use crate::result::{Result, ResultTag};

/// Panic payload raised by the extractors in this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}: found {}", found(.tag, .value))]
pub struct UnwrapError {
    /// Tag of the variant that was found.
    pub tag: &'static str,
    /// Debug rendering of that variant's content.
    pub value: String,
    pub message: String,
}

fn found(tag: &str, value: &str) -> String {
    if value.is_empty() {
        tag.to_string()
    } else {
        format!("{tag}({value})")
    }
}

impl UnwrapError {
    fn raise(tag: &'static str, value: String, message: impl Into<String>) -> ! {
        let error = UnwrapError {
            tag,
            value,
            message: message.into(),
        };
        tracing::error!(
            tag = error.tag,
            value = %error.value,
            "{}",
            error.message
        );
        std::panic::panic_any(error)
    }
}

/// Pull the success value out, or panic.
pub trait UnsafeExtract {
    type Value;

    fn unsafe_unwrap(self) -> Self::Value;

    fn unsafe_expect(self, message: &str) -> Self::Value;
}

/// Pull the error value out of a [`Result`], or panic.
pub trait UnsafeExtractErr {
    type Error;

    fn unsafe_unwrap_err(self) -> Self::Error;

    fn unsafe_expect_err(self, message: &str) -> Self::Error;
}

impl<T: fmt::Debug, E: fmt::Debug> UnsafeExtract for Result<T, E> {
    type Value = T;

    fn unsafe_unwrap(self) -> T {
        self.unsafe_expect("called unsafe_unwrap on an Err")
    }

    fn unsafe_expect(self, message: &str) -> T {
        match self.into_std() {
            Ok(value) => value,
            Err(error) => {
                UnwrapError::raise(ResultTag::Err.as_str(), format!("{error:?}"), message)
            }
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> UnsafeExtractErr for Result<T, E> {
    type Error = E;

    fn unsafe_unwrap_err(self) -> E {
        self.unsafe_expect_err("called unsafe_unwrap_err on an Ok")
    }

    fn unsafe_expect_err(self, message: &str) -> E {
        match self.into_std() {
            Ok(value) => UnwrapError::raise(ResultTag::Ok.as_str(), format!("{value:?}"), message),
            Err(error) => error,
        }
    }
}

impl<T> UnsafeExtract for Option<T> {
    type Value = T;

    fn unsafe_unwrap(self) -> T {
        self.unsafe_expect("called unsafe_unwrap on a None")
    }

    fn unsafe_expect(self, message: &str) -> T {
        match self.into_std() {
            Some(value) => value,
            None => UnwrapError::raise(OptionTag::None.as_str(), String::new(), message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thrown::catch;
    use crate::{err, none, ok, some};

    fn payload_of(f: impl FnOnce() + std::panic::UnwindSafe) -> UnwrapError {
        let payload = std::panic::catch_unwind(f).unwrap_err();
        match payload.downcast::<UnwrapError>() {
            Ok(error) => *error,
            Err(_) => panic!("payload was not an UnwrapError"),
        }
    }

    #[test]
    fn unwrap_returns_value_on_matching_side() {
        assert_eq!(ok::<i32, &str>(3).unsafe_unwrap(), 3);
        assert_eq!(err::<i32, &str>("e").unsafe_unwrap_err(), "e");
        assert_eq!(some(4).unsafe_expect("present"), 4);
    }

    #[test]
    fn unwrap_of_err_carries_tag_and_content() {
        let error = payload_of(|| {
            let _ = err::<i32, &str>("disk full").unsafe_unwrap();
        });
        assert_eq!(error.tag, "Err");
        assert_eq!(error.value, "\"disk full\"");
        assert_eq!(error.message, "called unsafe_unwrap on an Err");
    }

    #[test]
    fn expect_err_on_ok_reports_the_ok() {
        let error = payload_of(|| {
            let _ = ok::<i32, &str>(7).unsafe_expect_err("wanted a failure");
        });
        assert_eq!(error.tag, "Ok");
        assert_eq!(error.value, "7");
        assert_eq!(error.to_string(), "wanted a failure: found Ok(7)");
    }

    #[test]
    fn none_unwrap_is_caught_as_thrown() {
        let caught = catch(|| none::<i32>().unsafe_expect("need a value"));
        assert_eq!(caught.unwrap_err().message(), "need a value: found None");
    }
}
