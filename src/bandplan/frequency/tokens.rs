//! Token definitions for frequency strings
//!
//! A frequency string is a number, an optional SI prefix and an optional `Hz`
//! unit, with blanks allowed between them: `144.050M`, `144.050 MHz`,
//! `1.5e-3 k`. The grammar itself is enforced by [`super::decode`]; this lexer
//! only splits the text.
use logos::Logos;

/// All possible tokens in a frequency string
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum FrequencyToken {
    // Digits with one decimal point and an optional exponent. Only a lowercase
    // `e` starts an exponent: `E` is always the exa prefix.
    #[regex(r"[0-9]+(\.[0-9]*)?(e[+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+(e[+-]?[0-9]+)?", parse_number)]
    Number(f64),

    #[regex(r"[YZEPTGMk]")]
    Prefix,

    #[token("Hz")]
    Hertz,
}

fn parse_number(lex: &mut logos::Lexer<FrequencyToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Thin wrapper yielding `(token, span)` pairs, with `None` for text the
/// lexer does not recognise.
pub struct FrequencyLexer<'a> {
    inner: logos::SpannedIter<'a, FrequencyToken>,
}

impl<'a> FrequencyLexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: FrequencyToken::lexer(source).spanned(),
        }
    }
}

impl Iterator for FrequencyLexer<'_> {
    type Item = (Option<FrequencyToken>, std::ops::Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(token, span)| (token.ok(), span))
    }
}
