use crate::class::{ClassDefinition, Mockable, CONSTRUCTOR_KEY};
use crate::double::Double;
use crate::logging;
use crate::{MockError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::ops::Index;
use std::rc::Rc;

/// Builds mocks for one class definition.
///
/// Holds only the definition. Every [`MockGenerator::get_mock`] call
/// introspects it again and returns doubles that share nothing with earlier
/// mocks.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    class: ClassDefinition,
}

impl MockGenerator {
    pub fn new(class: ClassDefinition) -> Self {
        Self { class }
    }

    /// Generator for a capability set declared with `mock_class!`.
    pub fn of<T: Mockable + ?Sized>() -> Self {
        Self::new(T::class_definition())
    }

    /// Synthesize a fresh mock class and its recorder mapping.
    ///
    /// Fails with [`MockError::ConfigurationError`] when the definition cannot
    /// be introspected. Nothing is built in that case.
    pub fn get_mock(&self) -> Result<Mock> {
        let names = self.class.own_method_names()?;

        let table = RecorderTable {
            class: self.class.name.clone(),
            constructor: Double::new(CONSTRUCTOR_KEY),
            methods: names.iter().map(|name| Double::new(*name)).collect(),
        };
        logging::log_mock_synthesized(&self.class.name, table.methods.len());

        let recorders = Recorders {
            table: Rc::new(table),
        };
        Ok(Mock {
            class_definition: MockClass {
                recorders: recorders.clone(),
            },
            recorders,
        })
    }
}

/// Output of [`MockGenerator::get_mock`].
#[derive(Debug, Clone)]
pub struct Mock {
    pub recorders: Recorders,
    /// Substitute this wherever the code under test expects the real class.
    pub class_definition: MockClass,
}

#[derive(Debug)]
struct RecorderTable {
    class: String,
    constructor: Double,
    methods: Vec<Double>,
}

/// Doubles of one mock, keyed by method name plus [`CONSTRUCTOR_KEY`].
///
/// Cloning yields another handle to the same doubles.
#[derive(Debug, Clone)]
pub struct Recorders {
    table: Rc<RecorderTable>,
}

impl Recorders {
    pub fn class_name(&self) -> &str {
        &self.table.class
    }

    /// Double behind the construction path.
    pub fn constructor(&self) -> &Double {
        &self.table.constructor
    }

    /// Double for `name`. Asking for a method the original class does not
    /// declare is a [`MockError::UsageError`].
    pub fn get(&self, name: &str) -> Result<&Double> {
        if name == CONSTRUCTOR_KEY {
            return Ok(self.constructor());
        }
        self.method(name)
            .ok_or_else(|| self.unknown_method(name))
    }

    /// Keys in order: the construction key, then methods as declared.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(Double::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Double> + '_ {
        std::iter::once(&self.table.constructor).chain(self.table.methods.iter())
    }

    /// Number of mocked methods, not counting the construction double.
    pub fn method_count(&self) -> usize {
        self.table.methods.len()
    }

    /// Drop history and behaviors of every double. Call between test cases.
    pub fn reset_all(&self) {
        self.iter().for_each(Double::reset);
    }

    /// Drop history of every double, keeping installed behaviors.
    pub fn clear_all(&self) {
        self.iter().for_each(Double::clear);
    }

    fn method(&self, name: &str) -> Option<&Double> {
        self.table.methods.iter().find(|d| d.name() == name)
    }

    fn unknown_method(&self, name: &str) -> MockError {
        MockError::UsageError(format!(
            "`{}` has no method `{}`",
            self.table.class, name
        ))
    }
}

impl Index<&str> for Recorders {
    type Output = Double;

    fn index(&self, name: &str) -> &Double {
        match self.get(name) {
            Ok(double) => double,
            Err(err) => panic!("{err}"),
        }
    }
}

/// The synthesized class. Owns no state besides a handle to its recorders.
#[derive(Debug, Clone)]
pub struct MockClass {
    recorders: Recorders,
}

impl MockClass {
    pub fn name(&self) -> &str {
        self.recorders.class_name()
    }

    pub fn method_names(&self) -> Vec<&str> {
        self.recorders.table.methods.iter().map(Double::name).collect()
    }

    pub fn responds_to(&self, method: &str) -> bool {
        self.recorders.method(method).is_some()
    }

    pub fn recorders(&self) -> &Recorders {
        &self.recorders
    }

    /// Construction path: records `args` on the construction double and
    /// nothing else.
    pub fn construct(&self, args: Vec<Value>) -> MockInstance {
        logging::log_mock_constructed(self.name(), args.len());
        self.recorders.constructor().invoke(args);
        MockInstance {
            class: self.clone(),
        }
    }
}

/// An instance of a [`MockClass`]. Every method call lands on its double.
#[derive(Debug, Clone)]
pub struct MockInstance {
    class: MockClass,
}

impl MockInstance {
    /// Forward `args` to the double for `method` and return its result.
    pub fn call(&self, method: &str, args: Vec<Value>) -> Result<Option<Value>> {
        let recorders = &self.class.recorders;
        let double = recorders
            .method(method)
            .ok_or_else(|| recorders.unknown_method(method))?;
        Ok(double.invoke(args))
    }

    /// Like [`MockInstance::call`], decoding the result into `R`. A call that
    /// produced no value decodes from `null`, which fits `()` and `Option<_>`.
    pub fn call_as<R: DeserializeOwned>(&self, method: &str, args: Vec<Value>) -> Result<R> {
        let value = self.call(method, args)?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| {
            MockError::ReturnTypeError(format!("`{}::{}`: {}", self.class.name(), method, e))
        })
    }

    /// Entry point of the typed proxies generated by `mock_class!`.
    ///
    /// # Panics
    ///
    /// When `method` is unknown or its result does not decode into `R`.
    pub fn dispatch<R: DeserializeOwned>(&self, method: &str, args: Vec<Value>) -> R {
        match self.call_as(method, args) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
