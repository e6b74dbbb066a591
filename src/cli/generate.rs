//! Turn an expression into rendered documents

use super::CliError;
use crate::{
    input::{parse_lines, parse_reader},
    output::{OutputFormat, render_forest},
};

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Expression fragments from the command line, joined with spaces
    pub expressions: Vec<String>,
    /// Piped input, used only when `expressions` is empty
    pub input: Option<String>,
    /// Output format
    pub format: OutputFormat,
}

/// Parse the expression and render every resulting document.
pub fn execute_generate(options: &GenerateOptions) -> Result<String, CliError> {
    let forest = if !options.expressions.is_empty() {
        parse_lines(&options.expressions)?
    } else {
        let input = options.input.as_deref().ok_or(CliError::NoInput)?;
        parse_reader(input.as_bytes())?
    };

    tracing::debug!(documents = forest.len(), format = ?options.format, "rendering");
    Ok(render_forest(&forest, options.format)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(expressions: &[&str]) -> GenerateOptions {
        GenerateOptions {
            expressions: expressions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn arguments_take_precedence_over_input() {
        let mut opts = options(&["a=1"]);
        opts.input = Some("b=2".into());
        let out = execute_generate(&opts).unwrap();
        assert_eq!(out, "{\n   \"a\": \"1\"\n}\n");
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = execute_generate(&GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::NoInput));
    }

    #[test]
    fn piped_lines_are_joined() {
        let opts = GenerateOptions {
            input: Some("user = {\n  name = foo\n  age = :30\n}\n".into()),
            format: OutputFormat::Yaml,
            ..Default::default()
        };
        let out = execute_generate(&opts).unwrap();
        assert_eq!(out, "user:\n  name: foo\n  age: 30\n");
    }
}
