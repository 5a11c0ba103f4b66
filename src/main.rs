use log::{debug, error};
use rpn_calc::evaluate_expression;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const EXIT_COMMAND: &str = "exit";
const PROMPT: &str = "> ";

fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Simple Calculator")?;
    writeln!(output, "Enter expressions to evaluate. Type '{EXIT_COMMAND}' to quit.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            return Ok(());
        };
        let line = line?;

        if line == EXIT_COMMAND {
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        match evaluate_expression(&line) {
            Ok(result) => writeln!(output, "Result: {}", result)?,
            Err(e) => {
                debug!("Evaluation of {:?} failed: {:?}", line, e);
                writeln!(output, "Error: {}", e)?
            }
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).expect("Session failed");
        String::from_utf8(output).expect("Output is not UTF-8")
    }

    #[test]
    fn test_results_and_errors_are_printed() {
        let output = session("3 + 4 * 2\n10 / 0\nexit\n");
        assert!(output.contains("Result: 11\n"));
        assert!(output.contains("Error: Division by zero\n"));
    }

    #[test]
    fn test_exit_stops_reading() {
        let output = session("exit\n1 + 1\n");
        assert!(!output.contains("Result"));
    }

    #[test]
    fn test_exit_is_exact_match() {
        let output = session(" exit\n");
        assert!(output.contains("Error: Invalid character in expression: 'e'"));
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let output = session("\n\n2 * 3\n");
        assert_eq!(output.matches("Error").count(), 0);
        assert!(output.contains("Result: 6\n"));
    }

    #[test]
    fn test_end_of_input_without_exit() {
        let output = session("1 + 2");
        assert!(output.contains("Result: 3\n"));
        assert!(output.ends_with(PROMPT));
    }
}
