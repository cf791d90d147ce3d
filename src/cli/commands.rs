use crate::cli::args::{InspectArgs, OutputFormat, ScaffoldArgs};
use crate::cli::output::{CommandOutput, MockShape};
use crate::codegen::ScaffoldGenerator;
use crate::config::DEFAULT_VALUE_TYPE;
use crate::generator::{Mock, MockGenerator};
use crate::logging;
use crate::manifest;
use crate::ui::formatter::Formatter;
use miette::IntoDiagnostic;

fn print_info(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::info(message));
    }
}

fn print_success(message: impl AsRef<str>) {
    if !Formatter::is_quiet() {
        println!("{}", Formatter::success(message));
    }
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> miette::Result<()> {
    let format = args.format.unwrap_or_default();
    let built = manifest::load(&args.class).and_then(|class| {
        let mock = MockGenerator::new(class.clone()).get_mock()?;
        Ok((class, mock))
    });

    let (class, mock) = match built {
        Ok(built) => built,
        Err(err) => {
            if format == OutputFormat::Json {
                let output = CommandOutput::<MockShape>::failure(vec![err.to_string()]);
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            }
            return Err(err.into());
        }
    };

    match format {
        OutputFormat::Json => {
            let output = CommandOutput::success(mock_shape(&mock));
            println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        }
        OutputFormat::Text => {
            print_info(format!("Inspecting class manifest: {:?}", args.class));
            let summary = Formatter::format_mock_summary(&mock);
            logging::log_display(&summary, logging::LogLevel::Debug);
            println!("{}", summary);

            if Formatter::is_verbose() {
                // Parameter names only live in the manifest; the mock knows names.
                println!("Signatures:");
                for method in class.own_methods().unwrap_or_default() {
                    let params: Vec<&str> = method.params.iter().map(|p| p.name.as_str()).collect();
                    println!("  {}", Formatter::format_method(&method.name, &params));
                }
            }
        }
    }

    Ok(())
}

/// Execute the scaffold command
pub fn scaffold(args: ScaffoldArgs) -> miette::Result<()> {
    let class = manifest::load(&args.class)?;
    let value_type = args.value_type.as_deref().unwrap_or(DEFAULT_VALUE_TYPE);
    let code = ScaffoldGenerator::new(value_type).generate(&class)?;

    match &args.output {
        Some(path) => {
            ScaffoldGenerator::write_to_file(path, &code, args.overwrite)?;
            logging::log_scaffold_written(&path.to_string_lossy(), args.overwrite);
            print_success(format!("Scaffold for {} written to {:?}", class.name, path));
        }
        None => print!("{}", code),
    }

    Ok(())
}

pub fn mock_shape(mock: &Mock) -> MockShape {
    MockShape {
        class: mock.class_definition.name().to_string(),
        methods: mock
            .class_definition
            .method_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        recorders: mock.recorders.keys().map(str::to_string).collect(),
    }
}
