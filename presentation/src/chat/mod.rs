//! Interactive chat front end

mod repl;

pub use repl::ChatRepl;
