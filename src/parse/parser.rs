use super::lexer::*;
use crate::common::Int;
use crate::cup::Cup;
use crate::dice::{CustomDie, FudgeDie, PercentileDie, SidedDie};
use crate::error::{Error, SyntaxError};
use crate::modifier::{Arithmetic, ArithmeticOperator};
use crate::roll::SharedRoller;
use crate::tree::RollNode;
use logos_iter::LogosIter;

type PResult<T = Vec<RollNode>> = Result<T, Error>;

/// Builds a roll tree from dice notation.
///
/// ```text
/// expression := sum EOF
/// sum        := term ('+' term)*
/// term       := atom modifier*
/// atom       := dice | '(' sum ')' | '0'
/// modifier   := ('+' | '-' | '*' | '/' | '^') integer
/// ```
///
/// A `+` is a modifier when an integer follows it and separates terms otherwise.
/// Parentheses without a modifier add nothing: `(d4+d6)+d8` is the same cup as
/// `d4+d6+d8`.
pub struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    roller: SharedRoller,
    max_dice: Option<usize>,
    dice: usize,
    // a `+` was consumed while looking for a modifier
    pending_plus: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, roller: SharedRoller, max_dice: Option<usize>) -> Self {
        Self {
            source,
            lexer: lexer(source),
            roller,
            max_dice,
            dice: 0,
            pending_plus: false,
        }
    }

    pub fn parse(mut self) -> PResult<RollNode> {
        let terms = self.parse_sum()?;
        if self.lexer.peek().is_some() {
            return self.unexpected_token();
        }
        Ok(combine(terms))
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.lexer.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn peek_operator(&mut self) -> Option<ArithmeticOperator> {
        self.lexer.peek().and_then(TokenKind::as_operator)
    }

    fn consume(&mut self, expected: TokenKind) -> PResult<&'a str> {
        if self.matches(expected) {
            self.lexer.next();
            Ok(self.lexer.slice())
        } else {
            self.unexpected_token()
        }
    }

    fn consume_as<T: std::str::FromStr>(&mut self, expected: TokenKind) -> PResult<T> {
        let slice = self.consume(expected)?;
        slice
            .parse()
            .map_err(|_| SyntaxError::invalid_notation(slice).into())
    }

    fn unexpected_token<T>(&mut self) -> PResult<T> {
        let slice = match self.lexer.next() {
            Some(_) => self.lexer.slice(),
            None => self.source,
        };
        Err(SyntaxError::invalid_notation(slice).into())
    }

    fn take_separator(&mut self) -> bool {
        if std::mem::take(&mut self.pending_plus) {
            true
        } else if self.matches(TokenKind::Plus) {
            self.lexer.next();
            true
        } else {
            false
        }
    }

    fn count_dice(&mut self, n: usize) -> PResult<()> {
        self.dice = self.dice.saturating_add(n);
        match self.max_dice {
            Some(limit) if self.dice > limit => Err(Error::TooManyDice {
                requested: self.dice,
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn parse_sum(&mut self) -> PResult {
        let mut terms = self.parse_term()?;
        while self.take_separator() {
            terms.extend(self.parse_term()?);
        }
        Ok(terms)
    }

    fn parse_term(&mut self) -> PResult {
        let mut terms = self.parse_atom()?;

        while let Some(op) = self.peek_operator() {
            self.lexer.next();
            if op == ArithmeticOperator::Add && !self.matches(TokenKind::Integer) {
                self.pending_plus = true;
                break;
            }
            let value = self.consume_as(TokenKind::Integer)?;
            terms = vec![Arithmetic::new(combine(terms), op, value)?.into()];
        }

        Ok(terms)
    }

    fn parse_atom(&mut self) -> PResult {
        match self.lexer.peek() {
            Some(TokenKind::LeftParen) => self.parse_parens(),
            Some(TokenKind::Integer) => self.parse_zero(),
            Some(TokenKind::Dice) => self.parse_dice().map(|dice| vec![dice]),
            _ => self.unexpected_token(),
        }
    }

    fn parse_parens(&mut self) -> PResult {
        self.consume(TokenKind::LeftParen)?;
        let terms = self.parse_sum()?;
        self.consume(TokenKind::RightParen)?;
        Ok(terms)
    }

    fn parse_zero(&mut self) -> PResult {
        let slice = self.consume(TokenKind::Integer)?;
        match slice.parse::<Int>() {
            Ok(0) => Ok(vec![Cup::default().into()]),
            _ => Err(SyntaxError::invalid_notation(slice).into()),
        }
    }

    fn parse_dice(&mut self) -> PResult<RollNode> {
        let slice = self.consume(TokenKind::Dice)?;
        let split = slice
            .find(|c: char| c == 'd' || c == 'D')
            .ok_or_else(|| SyntaxError::invalid_notation(slice))?;
        let (count, die) = slice.split_at(split);
        let count: Int = if count.is_empty() {
            1
        } else {
            count
                .parse()
                .map_err(|_| SyntaxError::invalid_notation(slice))?
        };

        let roller = self.roller.clone();
        let die: RollNode = match &die[1..] {
            "%" => PercentileDie::with_roller(roller).into(),
            "f" | "F" => FudgeDie::with_roller(roller).into(),
            faces if faces.starts_with('[') => CustomDie::from_notation(die, roller)?.into(),
            _ => SidedDie::from_notation(die, roller)?.into(),
        };

        self.count_dice(usize::try_from(count).unwrap_or(usize::MAX))?;
        if count == 1 {
            Ok(die)
        } else {
            Ok(Cup::from_rollable(die, count)?.into())
        }
    }
}

/// One term as is, several as a cup.
fn combine(mut terms: Vec<RollNode>) -> RollNode {
    if terms.len() == 1 {
        if let Some(term) = terms.pop() {
            return term;
        }
    }
    Cup::new(terms).into()
}
