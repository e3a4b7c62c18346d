mod registry;

pub use registry::{CommentGrammar, GrammarRegistry, Language};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
