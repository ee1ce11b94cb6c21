use super::{
    ParseError, Symbols,
    lexer::{Token, TokenKind},
    node::{BinaryOp, Node},
    symbols::Symbol,
};

const MATH_PREFIX: &str = "math.";

/// Limit on nested subexpressions and on operators chained at one level.
///
/// Parsing, evaluation, and dropping the tree all recurse, so the bound keeps
/// hostile input from exhausting the stack.
const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a token slice.
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('+' | '-') unary | power
/// power   := primary ('^' unary)?
/// primary := number | 'x' | constant | function '(' expr ')' | '(' expr ')'
/// ```
///
/// Exponentiation binds tighter than unary minus and is right-associative,
/// so `-x^2` is `-(x^2)` and `2^3^2` is `2^(3^2)`.
pub(super) struct Parser<'a, 'src> {
    tokens: &'a [Token<'src>],
    pos: usize,
    depth: usize,
    symbols: &'a Symbols,
}

impl<'a, 'src> Parser<'a, 'src> {
    pub(super) fn new(tokens: &'a [Token<'src>], symbols: &'a Symbols) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            symbols,
        }
    }

    /// Parses the full token stream into a single tree.
    pub(super) fn parse(mut self) -> Result<Node, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }

        let node = self.expr()?;
        match self.peek() {
            None => Ok(node),
            Some(token) => Err(unexpected(token, "an operator or end of input")),
        }
    }

    fn peek(&self) -> Option<&'a Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token<'src>> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind<'_>) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Enters one more level of nesting, failing past [`MAX_DEPTH`].
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            let position = self
                .peek()
                .or(self.tokens.last())
                .map_or(0, |token| token.position);
            return Err(ParseError::TooDeep { position });
        }
        self.depth += 1;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind<'_>, expected: &'static str) -> Result<(), ParseError> {
        match self.next() {
            Some(token) if token.kind == kind => Ok(()),
            Some(token) => Err(unexpected(token, expected)),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    // Each chained operator deepens the left spine of the tree, so it counts
    // toward the depth until the chain ends.
    fn expr(&mut self) -> Result<Node, ParseError> {
        let depth = self.depth;
        let mut lhs = self.term()?;
        loop {
            let op = if self.eat(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.eat(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.term()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let depth = self.depth;
        let mut lhs = self.unary()?;
        loop {
            let op = if self.eat(TokenKind::Star) {
                BinaryOp::Mul
            } else if self.eat(TokenKind::Slash) {
                BinaryOp::Div
            } else {
                self.depth = depth;
                return Ok(lhs);
            };
            self.descend()?;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs);
        }
    }

    // Every recursive path (parentheses, calls, exponents, signs) passes
    // through here.
    fn unary(&mut self) -> Result<Node, ParseError> {
        self.descend()?;
        let node = if self.eat(TokenKind::Minus) {
            self.unary().map(|inner| Node::Negate(Box::new(inner)))
        } else if self.eat(TokenKind::Plus) {
            self.unary()
        } else {
            self.power()
        };
        self.depth -= 1;
        node
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if self.eat(TokenKind::Caret) {
            let exponent = self.unary()?;
            return Ok(binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        const EXPECTED: &str = "a number, 'x', a name, or '('";

        let Some(token) = self.next() else {
            return Err(ParseError::UnexpectedEnd { expected: EXPECTED });
        };

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::LParen => {
                let inner = self.expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Ident(name) => self.named(name, token.position),
            _ => Err(unexpected(token, EXPECTED)),
        }
    }

    fn named(&mut self, name: &str, position: usize) -> Result<Node, ParseError> {
        let bare = name.strip_prefix(MATH_PREFIX).unwrap_or(name);

        if name == "x" {
            return Ok(Node::Variable);
        }

        let symbol = Symbol::from_name(bare).ok_or_else(|| ParseError::UnknownSymbol {
            name: name.to_owned(),
            position,
        })?;

        if !self.symbols.contains(symbol) {
            return Err(ParseError::DisallowedSymbol {
                name: name.to_owned(),
                position,
            });
        }

        match symbol {
            Symbol::Constant(constant) => Ok(Node::Constant(constant)),
            Symbol::Function(function) => {
                self.expect(TokenKind::LParen, "'(' after a function name")?;
                let arg = self.expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(Node::Call {
                    function,
                    arg: Box::new(arg),
                })
            }
        }
    }
}

fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Node {
    Node::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}

fn unexpected(token: &Token<'_>, expected: &'static str) -> ParseError {
    ParseError::UnexpectedToken {
        found: token.kind.describe(),
        expected,
        position: token.position,
    }
}
