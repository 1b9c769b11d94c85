//! Type-erased values stored in terminal nodes.

use std::any::{self, Any, TypeId};
use std::fmt;

use crate::Error;

/// A value of any `'static + Send + Sync` type, tagged with the type it was
/// created from.
///
/// The tag is checked before the payload is ever looked at, so extracting the
/// value as the wrong type is an ordinary [`Error::TypeMismatch`]. A payload
/// that disagrees with its own tag means the value was corrupted and panics.
pub struct TypedValue {
    type_id: TypeId,
    type_name: &'static str,
    payload: Box<dyn Any + Send + Sync>,
}

impl TypedValue {
    /// Wraps `value`, recording its type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        TypedValue {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            payload: Box::new(value),
        }
    }

    /// Returns `true` if the value was stored as a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Name of the stored type, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the value as a `T`.
    ///
    /// # Panics
    ///
    /// Panics if the payload does not hold the type recorded in the tag.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T, Error> {
        if !self.is::<T>() {
            return Err(Error::TypeMismatch {
                expected: any::type_name::<T>(),
                found: self.type_name,
            });
        }

        match self.payload.downcast_ref::<T>() {
            Some(value) => Ok(value),
            None => panic!(
                "typed value tagged as `{}` does not hold a `{}` payload",
                self.type_name,
                any::type_name::<T>()
            ),
        }
    }
}

impl fmt::Debug for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_type() {
        let value = TypedValue::new(42_u32);

        assert!(value.is::<u32>());
        assert_eq!(value.downcast_ref::<u32>(), Ok(&42));
    }

    #[test]
    fn test_mismatched_type() {
        let value = TypedValue::new(String::from("hello"));

        assert!(!value.is::<&str>());
        assert_eq!(
            value.downcast_ref::<&str>(),
            Err(Error::TypeMismatch {
                expected: any::type_name::<&str>(),
                found: any::type_name::<String>(),
            })
        );
    }

    #[test]
    fn test_integer_widths_are_distinct() {
        let value = TypedValue::new(5_i32);

        assert!(value.downcast_ref::<i64>().is_err());
        assert!(value.downcast_ref::<u32>().is_err());
        assert_eq!(value.downcast_ref::<i32>(), Ok(&5));
    }

    #[test]
    fn test_debug_shows_type_name() {
        let value = TypedValue::new(vec![1_u8, 2, 3]);
        let rendered = format!("{:?}", value);

        assert!(rendered.contains("Vec<u8>"));
        assert_eq!(value.type_name(), any::type_name::<Vec<u8>>());
    }

    #[test]
    #[should_panic(expected = "does not hold")]
    fn test_corrupted_tag_panics() {
        let mut value = TypedValue::new(1_u8);
        value.type_id = TypeId::of::<u16>();
        value.type_name = any::type_name::<u16>();

        let _ = value.downcast_ref::<u16>();
    }
}
