//! Shared grammar fixtures for counter tests.

use crate::language::CommentGrammar;

/// C-family: `//` and `/* */`
pub fn c_grammar() -> CommentGrammar {
    CommentGrammar::new(&[r"^\s*//"], &[r"^\s*/\*"], &[r"\*/\s*$"]).unwrap()
}

/// Python with triple-quoted strings as block comments
pub fn python_grammar() -> CommentGrammar {
    CommentGrammar::new(
        &[r"^\s*#"],
        &[r#"^\s*""""#, r"^\s*'''"],
        &[r#""""\s*$"#, r"'''\s*$"],
    )
    .unwrap()
}

/// Ruby with =begin/=end blocks
pub fn ruby_grammar() -> CommentGrammar {
    CommentGrammar::new(&[r"^\s*#"], &[r"^\s*=begin"], &[r"^\s*=end"]).unwrap()
}

/// Lua with long bracket comments
pub fn lua_grammar() -> CommentGrammar {
    CommentGrammar::new(&[r"^\s*--"], &[r"^\s*--\[\["], &[r"\]\]\s*$"]).unwrap()
}
