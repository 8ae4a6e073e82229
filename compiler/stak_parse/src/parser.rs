//! Recursive descent parser for Stak rules.
//!
//! ```text
//! program  := rule*
//! rule     := '|' lhs_item* '|' rhs_item*
//! lhs_item := ':' word ':' atom* '?'?
//! rhs_item := ':' word ':' atom*
//! atom     := word | variable
//! ```
//!
//! A rule's right-hand side runs until the next `|` or the end of input.

use rustc_hash::FxHashMap;
use stak_ir::{
    LhsPattern, Program, RhsPattern, Rule, Span, StackId, Symbol, SymbolTable, Tuple, TupleItem,
    VarId,
};

use crate::load::{Parsed, RuleSource, VariableSource};
use crate::{lex, ParseError, ParseErrorKind, Token, TokenKind};

/// Parse `source` into a program without extracting its initial state.
///
/// Every rule, including any `|:0:| ...` rule, stays in the rule list.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    let tokens = lex(source)?;
    Parser::new(source, tokens).parse_program()
}

/// Variable names seen so far in one rule.
#[derive(Default)]
struct VarScope<'src> {
    ids: FxHashMap<&'src str, VarId>,
    variables: Vec<VariableSource>,
}

impl<'src> VarScope<'src> {
    /// Slot for `name`, assigning the next index on first sight.
    fn bind(&mut self, name: &'src str, span: Span) -> Result<VarId, ParseError> {
        if let Some(&var) = self.ids.get(name) {
            return Ok(var);
        }

        let raw = u32::try_from(self.variables.len())
            .map_err(|_| ParseError::new(ParseErrorKind::SourceTooLarge, span))?;
        let var = VarId::new(raw);
        self.ids.insert(name, var);
        self.variables.push(VariableSource {
            name: name.to_owned(),
            span,
        });
        Ok(var)
    }
}

struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
    /// End offset of the last consumed token.
    last_end: u32,
    stacks: SymbolTable<StackId>,
    symbols: SymbolTable<Symbol>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        let eof = tokens
            .last()
            .copied()
            .unwrap_or(Token::new(TokenKind::Eof, Span::DUMMY));
        Parser {
            source,
            tokens,
            pos: 0,
            eof,
            last_end: 0,
            stacks: SymbolTable::for_stacks(),
            symbols: SymbolTable::new(),
        }
    }

    #[inline]
    fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            self.last_end = token.span.end;
        }
        token
    }

    fn text(&self, token: Token) -> &'src str {
        token.text(self.source)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        let token = self.current();
        if token.kind == kind {
            Ok(self.advance())
        } else {
            Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected,
                    found: token.kind,
                },
                token.span,
            ))
        }
    }

    fn parse_program(mut self) -> Result<Parsed, ParseError> {
        let mut rules = Vec::new();
        let mut sources = Vec::new();

        while !self.check(TokenKind::Eof) {
            let (rule, source) = self.parse_rule()?;
            rules.push(rule);
            sources.push(source);
        }

        tracing::debug!(
            rules = rules.len(),
            stacks = self.stacks.len(),
            symbols = self.symbols.len(),
            "parsed program"
        );

        let program = Program::from_parts(rules, Vec::new(), self.stacks, self.symbols);
        Ok(Parsed {
            program,
            rules: sources,
        })
    }

    fn parse_rule(&mut self) -> Result<(Rule, RuleSource), ParseError> {
        let open = self.expect(TokenKind::Bar, "`|` to start a rule")?;
        let mut scope = VarScope::default();

        let mut lhs = Vec::new();
        while self.check(TokenKind::Colon) {
            lhs.push(self.parse_lhs_item(&mut scope)?);
        }
        let close = self.expect(TokenKind::Bar, "`:` or `|` in a left-hand side")?;

        let mut rhs = Vec::new();
        while self.check(TokenKind::Colon) {
            rhs.push(self.parse_rhs_item(&mut scope)?);
        }

        let next = self.current();
        if !matches!(next.kind, TokenKind::Bar | TokenKind::Eof) {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    expected: "`:`, `|` or end of input after a right-hand side",
                    found: next.kind,
                },
                next.span,
            ));
        }

        let source = RuleSource {
            span: Span::new(open.span.start, self.last_end),
            lhs_span: open.span.merge(close.span),
            variables: scope.variables,
        };
        Ok((Rule::new(lhs, rhs), source))
    }

    fn parse_lhs_item(&mut self, scope: &mut VarScope<'src>) -> Result<LhsPattern, ParseError> {
        let stack = self.parse_stack_name()?;
        let tuple = self.parse_tuple(scope)?;
        let keep = self.check(TokenKind::Question);
        if keep {
            self.advance();
        }
        Ok(LhsPattern::new(stack, tuple, keep))
    }

    fn parse_rhs_item(&mut self, scope: &mut VarScope<'src>) -> Result<RhsPattern, ParseError> {
        let stack = self.parse_stack_name()?;
        let tuple = self.parse_tuple(scope)?;
        if self.check(TokenKind::Question) {
            return Err(ParseError::new(ParseErrorKind::KeepOnRhs, self.current().span));
        }
        Ok(RhsPattern::new(stack, tuple))
    }

    /// `':' word ':'`
    fn parse_stack_name(&mut self) -> Result<StackId, ParseError> {
        self.expect(TokenKind::Colon, "`:` to start a pattern item")?;

        let name = self.current();
        if name.kind != TokenKind::Word {
            return Err(ParseError::new(
                ParseErrorKind::ExpectedStackName { found: name.kind },
                name.span,
            ));
        }
        self.advance();

        let close = self.current();
        if close.kind != TokenKind::Colon {
            return Err(ParseError::new(
                ParseErrorKind::UnterminatedStackName { found: close.kind },
                close.span,
            ));
        }
        self.advance();

        let text = self.text(name);
        self.stacks
            .try_intern(text)
            .map_err(|e| ParseError::new(ParseErrorKind::Intern(e), name.span))
    }

    fn parse_tuple(&mut self, scope: &mut VarScope<'src>) -> Result<Tuple, ParseError> {
        let mut tuple = Tuple::new();
        loop {
            let token = self.current();
            let item = match token.kind {
                TokenKind::Word => {
                    let text = self.text(token);
                    let symbol = self
                        .symbols
                        .try_intern(text)
                        .map_err(|e| ParseError::new(ParseErrorKind::Intern(e), token.span))?;
                    TupleItem::Literal(symbol)
                }
                TokenKind::Variable => {
                    let name = self.text(token).trim_start_matches('$');
                    TupleItem::Variable(scope.bind(name, token.span)?)
                }
                _ => return Ok(tuple),
            };
            self.advance();
            tuple.push(item);
        }
    }
}
