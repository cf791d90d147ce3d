use serde::Serialize;

/// Envelope for `--format json` output.
#[derive(Debug, Serialize)]
pub struct CommandOutput<T>
where
    T: Serialize,
{
    pub status: String,
    pub result: Option<T>,
    pub errors: Option<Vec<String>>,
}

impl<T: Serialize> CommandOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            status: "success".to_string(),
            result: Some(result),
            errors: None,
        }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            status: "error".to_string(),
            result: None,
            errors: Some(errors),
        }
    }
}

/// Shape of a generated mock as reported by `inspect`.
#[derive(Debug, Serialize, PartialEq)]
pub struct MockShape {
    pub class: String,
    pub methods: Vec<String>,
    pub recorders: Vec<String>,
}
