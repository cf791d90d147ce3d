//! Recording test doubles for whole classes.
//!
//! A [`MockGenerator`] takes a [`ClassDefinition`] (the class's declared method
//! set) and produces a [`Mock`]: one [`Double`] per own method plus one for the
//! construction path, and a [`MockClass`] that forwards every call to those
//! doubles. Code under test receives the mock class at its injection point and
//! the test inspects the doubles afterwards.
//!
//! ```
//! use mock_class::{args, ClassDefinition, MockGenerator};
//! use serde_json::json;
//!
//! let class = ClassDefinition::new("SimplePrint").constructor().method("print");
//! let mock = MockGenerator::new(class).get_mock()?;
//! mock.recorders["print"].returns(json!(42));
//!
//! let instance = mock.class_definition.construct(args!["console"]);
//! assert_eq!(instance.call("print", args!["something"])?, Some(json!(42)));
//! assert!(mock.recorders.constructor().was_called_with(&args!["console"]));
//! assert!(mock.recorders["print"].was_called_with(&args!["something"]));
//! # Ok::<(), mock_class::MockError>(())
//! ```

pub mod class;
pub mod cli;
pub mod codegen;
pub mod config;
pub mod double;
pub mod generator;
pub mod logging;
mod macros;
pub mod manifest;
pub mod ui;

use miette::Diagnostic;

pub use class::{ClassDefinition, Member, MemberKind, Mockable, Param, CONSTRUCTOR_KEY};
pub use double::{Behavior, Double};
pub use generator::{Mock, MockClass, MockGenerator, MockInstance, Recorders};

/// Argument and return values carried through doubles.
pub use serde_json::Value;

#[doc(hidden)]
pub use serde_json as __serde_json;

/// Result type alias for mock generation
pub type Result<T, E = MockError> = std::result::Result<T, E>;

/// Error types for mock generation and use
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Cannot introspect class: {0}")]
    #[diagnostic(
        code(mock_class::configuration),
        help("The class definition must list its members. Declare them with `ClassDefinition::method` or add a `members` array to the manifest.")
    )]
    ConfigurationError(String),

    #[error("Unknown method: {0}")]
    #[diagnostic(
        code(mock_class::usage),
        help("Only methods declared directly on the original class are mocked. Inherited members, accessors and static methods have no double.")
    )]
    UsageError(String),

    #[error("Unexpected return value: {0}")]
    #[diagnostic(
        code(mock_class::return_type),
        help("Install a behavior whose result deserializes into the method's return type, e.g. `double.returns(json!(42))`.")
    )]
    ReturnTypeError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(mock_class::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),

    #[error("Invalid class manifest: {0}")]
    #[diagnostic(
        code(mock_class::manifest),
        help("A manifest is a JSON or TOML document with a `name` and a `members` list. Run `mock-class inspect --help` for an example.")
    )]
    ManifestError(String),
}
