pub mod scaffold;

pub use scaffold::ScaffoldGenerator;
