use crate::class::{ClassDefinition, Member};
use crate::config::DEFAULT_VALUE_TYPE;
use crate::{MockError, Result};
use itertools::Itertools;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Template engine for `mock_class!` declarations and matching test skeletons.
pub struct ScaffoldGenerator {
    value_type: String,
}

impl Default for ScaffoldGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_VALUE_TYPE)
    }
}

impl ScaffoldGenerator {
    /// `value_type` stands in for parameter and return types the manifest
    /// leaves out.
    pub fn new(value_type: impl Into<String>) -> Self {
        Self {
            value_type: value_type.into(),
        }
    }

    /// Generate Rust source declaring the class's trait and a test that
    /// mocks it.
    pub fn generate(&self, class: &ClassDefinition) -> Result<String> {
        ensure_ident(&class.name, "class")?;
        let methods = class.own_methods()?;
        for method in &methods {
            ensure_ident(&method.name, "method")?;
        }

        let mut code = String::new();

        // Imports
        code.push_str("use mock_class::{mock_class, MockGenerator};\n\n");

        // Trait declaration
        code.push_str("mock_class! {\n");
        if methods.iter().any(|m| !is_snake_case(&m.name)) {
            code.push_str("    #[allow(non_snake_case)]\n");
        }
        code.push_str(&format!("    pub trait {} {{\n", class.name));
        for method in &methods {
            code.push_str(&format!("        {}\n", self.signature(method)));
        }
        code.push_str("    }\n");
        code.push_str("}\n\n");

        // Test skeleton
        code.push_str("#[test]\n");
        code.push_str(&format!(
            "fn test_{}_mock() {{\n",
            to_snake_case(&class.name)
        ));
        code.push_str(&format!(
            "    let mock = MockGenerator::of::<dyn {}>().get_mock().unwrap();\n\n",
            class.name
        ));

        if !methods.is_empty() {
            code.push_str("    // Install behaviors before exercising the code under test\n");
            for method in &methods {
                code.push_str(&format!(
                    "    // mock.recorders[\"{}\"].returns(serde_json::json!(null));\n",
                    method.name
                ));
            }
            code.push('\n');
        }

        let constructor_params = class
            .constructor_member()?
            .map(|m| m.params.iter().map(|p| p.name.as_str()).join(", "))
            .unwrap_or_default();
        code.push_str(&format!(
            "    // constructor({})\n",
            constructor_params
        ));
        code.push_str("    let _instance = mock.class_definition.construct(vec![]);\n\n");

        code.push_str("    assert_eq!(mock.recorders.constructor().call_count(), 1);\n");
        code.push_str("}\n");
        Ok(code)
    }

    fn signature(&self, method: &Member) -> String {
        let mut used = HashSet::new();
        let params = method
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let base = if is_ident(&param.name) {
                    param.name.clone()
                } else {
                    format!("arg{}", i)
                };
                let mut name = base.clone();
                let mut suffix = 1;
                while !used.insert(name.clone()) {
                    name = format!("{}_{}", base, suffix);
                    suffix += 1;
                }
                let ty = param.ty.as_deref().unwrap_or(&self.value_type);
                format!(", {}: {}", name, ty)
            })
            .join("");

        let returns = match method.returns.as_deref() {
            Some("()") => String::new(),
            Some(ty) => format!(" -> {}", ty),
            None => format!(" -> Option<{}>", self.value_type),
        };

        format!("fn {}(&self{}){};", method.name, params, returns)
    }

    /// Write the generated source to a file, either overwriting or appending.
    pub fn write_to_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            let mut existing =
                fs::read_to_string(path).map_err(|e| MockError::FileError(e.to_string()))?;
            if !existing.trim().is_empty() {
                existing.push_str("\n\n");
            }
            existing.push_str(content);
            fs::write(path, existing).map_err(|e| MockError::FileError(e.to_string()))?;
        } else {
            // Create parent directories if they don't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| MockError::FileError(e.to_string()))?;
            }
            fs::write(path, content).map_err(|e| MockError::FileError(e.to_string()))?;
        }
        Ok(())
    }
}

fn is_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
        && !KEYWORDS.contains(&name)
}

fn ensure_ident(name: &str, what: &str) -> Result<()> {
    if is_ident(name) {
        Ok(())
    } else {
        Err(MockError::ConfigurationError(format!(
            "{} name `{}` is not a valid Rust identifier",
            what, name
        )))
    }
}

fn is_snake_case(name: &str) -> bool {
    !name.chars().any(|c| c.is_ascii_uppercase())
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
