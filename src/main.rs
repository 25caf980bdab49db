//! Interactive read-eval-print loop over the evaluator.

use bigcalc::evaluate;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

const HELP_MESSAGE: &str =
    "Please, enter a valid arithmetic expression or one of the following commands: \
     ':help', ':?', ':exit', ':!'";

const ERROR_MESSAGE: &str =
    "Error. The entered arithmetic expression is invalid. Please, enter a valid one.";

fn main() -> rustyline::Result<()> {
    let mut editor = DefaultEditor::new()?;
    println!("{HELP_MESSAGE}");
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                match line {
                    "" => println!("An expression is not found"),
                    ":exit" | ":!" => break,
                    ":help" | ":?" => println!("{HELP_MESSAGE}"),
                    formula => {
                        let _ = editor.add_history_entry(formula);
                        match evaluate(formula) {
                            Ok(evaluation) => println!("{evaluation}"),
                            Err(_) => println!("{ERROR_MESSAGE}"),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
