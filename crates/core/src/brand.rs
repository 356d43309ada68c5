//! Identity markers for genuine containers.
//!
//! A [`Brand`] can only be minted inside this crate, so holding a
//! [`Result`](crate::Result) or an [`Option`](crate::Option) is proof that
//! the value came out of one of this crate's constructors. [`is_result`] and
//! [`is_option`] answer the same question at runtime for type-erased values:
//! look-alike structs, JSON documents and deep clones all fail the check.
//!
//! A brand cannot be forged from outside the crate:
//!
//! ```compile_fail
//! let forged = unthrown_core::brand::Brand { kind: unthrown_core::brand::BrandKind::Result };
//! ```

use std::any::Any;
use std::fmt;

use crate::option::Option;
use crate::result::Result;

/// Which container family a brand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandKind {
    Result,
    Option,
}

/// Private identity marker carried by every container instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brand {
    kind: BrandKind,
}

impl Brand {
    pub(crate) const RESULT: Brand = Brand {
        kind: BrandKind::Result,
    };
    pub(crate) const OPTION: Brand = Brand {
        kind: BrandKind::Option,
    };

    pub fn kind(self) -> BrandKind {
        self.kind
    }
}

impl fmt::Debug for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Brand({:?})", self.kind)
    }
}

/// Implemented only by this crate's containers.
pub trait Branded: sealed::Sealed {
    fn brand(&self) -> Brand;
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for crate::result::Result<T, E> {}
    impl<T> Sealed for crate::option::Option<T> {}
}

/// Membership predicate for [`Result`]: true only for a genuine
/// `Result<T, E>` behind the erased reference.
pub fn is_result<T: 'static, E: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<Result<T, E>>()
        .is_some_and(|r| r.brand() == Brand::RESULT)
}

/// Membership predicate for [`Option`].
pub fn is_option<T: 'static>(value: &dyn Any) -> bool {
    value
        .downcast_ref::<Option<T>>()
        .is_some_and(|o| o.brand() == Brand::OPTION)
}
