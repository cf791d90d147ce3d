//! A small class and a function that uses it, written so tests can swap the
//! class for a generated mock.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Where printed lines end up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Console {
    pub target: String,
    #[serde(skip)]
    lines: Rc<RefCell<Vec<String>>>,
}

impl Console {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            lines: Rc::default(),
        }
    }

    pub fn log(&self, line: &str) {
        println!("{}", line);
        self.lines.borrow_mut().push(line.to_string());
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

pub trait Printer {
    fn print(&self, something: String) -> i64;
}

pub struct SimplePrint {
    console: Console,
}

impl SimplePrint {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Printer for SimplePrint {
    fn print(&self, something: String) -> i64 {
        self.console.log(&something);
        24
    }
}

/// Build a printer on `console` and print one line through it.
///
/// The printer class is injected as a constructor so tests can pass a mock.
pub fn simple_print_example<P, F>(console: Console, new_printer: F) -> i64
where
    P: Printer,
    F: FnOnce(Console) -> P,
{
    let printer = new_printer(console);
    printer.print("something".to_string())
}
