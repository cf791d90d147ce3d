/// Build one ordered argument sequence.
///
/// Every element goes through `serde_json::json!`, so anything `Serialize`
/// works.
///
/// ```
/// use mock_class::args;
/// use serde_json::json;
///
/// assert_eq!(args!["something", 2], vec![json!("something"), json!(2)]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::__serde_json::json!($arg)),+]
    };
}

/// Declare a trait together with its mock.
///
/// Expands to the trait itself, an implementation of it for
/// [`MockInstance`](crate::MockInstance) that forwards each call's arguments
/// as one ordered sequence, and a [`Mockable`](crate::Mockable) manifest for
/// `dyn Trait` listing the declared methods in order.
///
/// The `impl Trait { ... }` form mocks a trait declared elsewhere in the
/// current crate, so the mock can live in a `#[cfg(test)]` module while the
/// code under test only sees the trait. Repeat the method signatures exactly.
///
/// Methods take `&self`. Argument types must be `Serialize` and return types
/// `DeserializeOwned`; a mocked call that produced no value returns whatever
/// decodes from `null` and panics for types that cannot.
///
/// ```
/// use mock_class::{mock_class, MockGenerator};
/// use serde_json::json;
///
/// mock_class! {
///     pub trait Printer {
///         fn print(&self, text: String) -> i64;
///     }
/// }
///
/// fn shout<P: Printer>(printer: &P) -> i64 {
///     printer.print("hello".to_string())
/// }
///
/// let mock = MockGenerator::of::<dyn Printer>().get_mock()?;
/// mock.recorders["print"].returns(json!(42));
///
/// let printer = mock.class_definition.construct(vec![]);
/// assert_eq!(shout(&printer), 42);
/// assert!(mock.recorders["print"].was_called_with(&[json!("hello")]));
/// # Ok::<(), mock_class::MockError>(())
/// ```
#[macro_export]
macro_rules! mock_class {
    (
        impl $name:ident {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&self $(, $arg:ident : $ty:ty)*) $(-> $ret:ty)?;
            )*
        }
    ) => {
        impl $name for $crate::MockInstance {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $ty)*) $(-> $ret)? {
                    self.dispatch(
                        ::std::stringify!($method),
                        ::std::vec![$($crate::__serde_json::json!($arg)),*],
                    )
                }
            )*
        }

        impl $crate::Mockable for dyn $name {
            fn class_definition() -> $crate::ClassDefinition {
                $crate::ClassDefinition::new(::std::stringify!($name))
                    $(.method(::std::stringify!($method)))*
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$method_meta:meta])*
                fn $method:ident(&self $(, $arg:ident : $ty:ty)*) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name {
            $(
                $(#[$method_meta])*
                fn $method(&self $(, $arg: $ty)*) $(-> $ret)?;
            )*
        }

        impl $name for $crate::MockInstance {
            $(
                fn $method(&self $(, $arg: $ty)*) $(-> $ret)? {
                    self.dispatch(
                        ::std::stringify!($method),
                        ::std::vec![$($crate::__serde_json::json!($arg)),*],
                    )
                }
            )*
        }

        impl $crate::Mockable for dyn $name {
            fn class_definition() -> $crate::ClassDefinition {
                $crate::ClassDefinition::new(::std::stringify!($name))
                    $(.method(::std::stringify!($method)))*
            }
        }
    };
}
