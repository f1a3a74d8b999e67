//! REPL (Read-Eval-Print Loop) for interactive chat

use coverquery_application::AnswerQueryUseCase;
use coverquery_domain::Query;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: Arc<AnswerQueryUseCase>,
}

impl ChatRepl {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Run the interactive REPL until `exit`/`quit`, Ctrl-C or EOF
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            match rl.readline("You: ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                        println!("Assistant: Goodbye!");
                        break;
                    }

                    let _ = rl.add_history_entry(line);

                    if let Some(query) = Query::try_new(line) {
                        self.process(&query).await;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Assistant: Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err:?}");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("Welcome to the Life Insurance Support Assistant!");
        println!("Type 'exit' or 'quit' to leave.");
        println!();
    }

    async fn process(&self, query: &Query) {
        let outcome = self.use_case.execute(query).await;
        debug!(
            "Categories: {:?} (cached: {})",
            outcome.labels, outcome.cached
        );
        println!("Assistant: {}", outcome.answer);
        println!();
    }
}
