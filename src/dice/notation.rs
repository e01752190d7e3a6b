use logos::Logos;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Leaf {
    #[regex(r"[dD][0-9]+")]
    Sided,
    #[regex(r"[dD]\[-?[0-9]+(,-?[0-9]+)*\]")]
    Custom,

    #[error]
    Error,
}

/// Whether the whole of `notation` is a single `kind` literal.
pub(crate) fn matches(kind: Leaf, notation: &str) -> bool {
    let mut lexer = Leaf::lexer(notation);
    lexer.next() == Some(kind) && lexer.span() == (0..notation.len()) && lexer.next().is_none()
}
