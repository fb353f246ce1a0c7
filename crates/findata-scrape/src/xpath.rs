//! XPath expression parsing.

use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing an XPath expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XPathError {
    /// The expression is empty.
    #[error("XPath expression is empty")]
    Empty,

    /// The expression ended in the middle of a construct.
    #[error("Unexpected end of XPath expression")]
    UnexpectedEnd,

    /// A token appeared where it is not allowed.
    #[error("Unexpected {found} at offset {offset}")]
    UnexpectedToken {
        /// Description of the offending token.
        found: String,
        /// Byte offset in the expression.
        offset: usize,
    },

    /// A character that starts no token.
    #[error("Invalid character {ch:?} at offset {offset}")]
    InvalidCharacter {
        /// The character.
        ch: char,
        /// Byte offset in the expression.
        offset: usize,
    },

    /// A string literal without its closing quote.
    #[error("Unterminated string literal at offset {0}")]
    UnterminatedLiteral(usize),

    /// An axis outside the supported subset.
    #[error("Unsupported axis: {0}")]
    UnsupportedAxis(String),

    /// A function outside the supported subset.
    #[error("Unsupported function: {0}()")]
    UnsupportedFunction(String),

    /// A positional predicate that is not a positive integer.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

/// Navigation direction of a location step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Child,
    Descendant,
    DescendantOrSelf,
    SelfNode,
    Parent,
    Attribute,
}

/// Which nodes a step keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeTest {
    /// Element (or attribute, on the attribute axis) with this name.
    Name(String),
    /// `*`: any element, or any attribute on the attribute axis.
    Any,
    /// `text()`
    Text,
    /// `node()`
    Node,
}

/// A value source inside a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Operand {
    /// `@name`
    Attribute(String),
    /// `text()`
    Text,
    /// `.`
    Context,
    /// `name`: child elements with this name.
    Child(String),
}

/// A predicate expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Expr {
    Position(usize),
    Last,
    Exists(Operand),
    Equals(Operand, String),
    NotEquals(Operand, String),
    Contains(Operand, String),
    StartsWith(Operand, String),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

/// One location step: axis, node test and predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    pub(crate) axis: Axis,
    pub(crate) test: NodeTest,
    pub(crate) predicates: Vec<Expr>,
}

impl Step {
    const fn new(axis: Axis, test: NodeTest) -> Self {
        Self {
            axis,
            test,
            predicates: Vec::new(),
        }
    }

    /// The step inserted for `//`.
    const fn descendant_or_self() -> Self {
        Self::new(Axis::DescendantOrSelf, NodeTest::Node)
    }
}

/// A compiled XPath location path.
///
/// Paths are always evaluated from the document node, so `table/tr` and
/// `/table/tr` are equivalent.
///
/// # Example
///
/// ```
/// use findata_scrape::XPath;
///
/// let xpath: XPath = "//table[contains(@class, 'wikitable')][2]/tbody/tr/td[1]/a/text()"
///     .parse()
///     .unwrap();
/// assert_eq!(xpath.as_str(), "//table[contains(@class, 'wikitable')][2]/tbody/tr/td[1]/a/text()");
///
/// assert!("//table[".parse::<XPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath {
    source: String,
    pub(crate) steps: Vec<Step>,
}

impl XPath {
    /// Compiles an expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression is malformed or uses constructs
    /// outside the supported subset.
    pub fn compile(expr: &str) -> Result<Self, XPathError> {
        let tokens = tokenize(expr)?;
        if tokens.is_empty() {
            return Err(XPathError::Empty);
        }
        let steps = Parser { tokens, pos: 0 }.parse_path()?;
        Ok(Self {
            source: expr.to_string(),
            steps,
        })
    }

    /// Returns the source expression.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for XPath {
    type Err = XPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl std::fmt::Display for XPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    Slash,
    DoubleSlash,
    LBracket,
    RBracket,
    LParen,
    RParen,
    At,
    Comma,
    Eq,
    NotEq,
    Star,
    Dot,
    DotDot,
    ColonColon,
    Literal(String),
    Number(String),
    Name(String),
}

impl std::fmt::Display for Tok {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slash => f.write_str("'/'"),
            Self::DoubleSlash => f.write_str("'//'"),
            Self::LBracket => f.write_str("'['"),
            Self::RBracket => f.write_str("']'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::At => f.write_str("'@'"),
            Self::Comma => f.write_str("','"),
            Self::Eq => f.write_str("'='"),
            Self::NotEq => f.write_str("'!='"),
            Self::Star => f.write_str("'*'"),
            Self::Dot => f.write_str("'.'"),
            Self::DotDot => f.write_str("'..'"),
            Self::ColonColon => f.write_str("'::'"),
            Self::Literal(s) => write!(f, "literal {s:?}"),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Name(n) => write!(f, "name '{n}'"),
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<(Tok, usize)>, XPathError> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        let tok = match ch {
            c if c.is_whitespace() => continue,
            '/' => {
                if chars.next_if(|&(_, c)| c == '/').is_some() {
                    Tok::DoubleSlash
                } else {
                    Tok::Slash
                }
            }
            '.' => {
                if chars.next_if(|&(_, c)| c == '.').is_some() {
                    Tok::DotDot
                } else {
                    Tok::Dot
                }
            }
            ':' => {
                if chars.next_if(|&(_, c)| c == ':').is_none() {
                    return Err(XPathError::InvalidCharacter { ch, offset });
                }
                Tok::ColonColon
            }
            '!' => {
                if chars.next_if(|&(_, c)| c == '=').is_none() {
                    return Err(XPathError::InvalidCharacter { ch, offset });
                }
                Tok::NotEq
            }
            '[' => Tok::LBracket,
            ']' => Tok::RBracket,
            '(' => Tok::LParen,
            ')' => Tok::RParen,
            '@' => Tok::At,
            ',' => Tok::Comma,
            '=' => Tok::Eq,
            '*' => Tok::Star,
            '\'' | '"' => {
                let mut literal = String::new();
                loop {
                    match chars.next() {
                        Some((_, c)) if c == ch => break,
                        Some((_, c)) => literal.push(c),
                        None => return Err(XPathError::UnterminatedLiteral(offset)),
                    }
                }
                Tok::Literal(literal)
            }
            c if c.is_ascii_digit() => {
                let mut number = String::from(c);
                while let Some((_, d)) = chars.next_if(|&(_, d)| d.is_ascii_digit()) {
                    number.push(d);
                }
                Tok::Number(number)
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = String::from(c);
                while let Some((_, n)) =
                    chars.next_if(|&(_, n)| n.is_alphanumeric() || matches!(n, '-' | '_' | '.'))
                {
                    name.push(n);
                }
                Tok::Name(name)
            }
            _ => return Err(XPathError::InvalidCharacter { ch, offset }),
        };
        tokens.push((tok, offset));
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<(Tok, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn peek_at(&self, ahead: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + ahead).map(|(t, _)| t)
    }

    fn next(&mut self) -> Result<Tok, XPathError> {
        let (tok, _) = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(XPathError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(tok)
    }

    fn unexpected(&self) -> XPathError {
        match self.tokens.get(self.pos) {
            Some((tok, offset)) => XPathError::UnexpectedToken {
                found: tok.to_string(),
                offset: *offset,
            },
            None => XPathError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: &Tok) -> Result<(), XPathError> {
        if self.peek() == Some(want) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn eat(&mut self, want: &Tok) -> bool {
        let matched = self.peek() == Some(want);
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let matched = matches!(self.peek(), Some(Tok::Name(n)) if n == keyword);
        if matched {
            self.pos += 1;
        }
        matched
    }

    fn parse_path(mut self) -> Result<Vec<Step>, XPathError> {
        let mut steps = Vec::new();

        if self.eat(&Tok::DoubleSlash) {
            steps.push(Step::descendant_or_self());
        } else if self.eat(&Tok::Slash) && self.peek().is_none() {
            return Ok(steps);
        }

        loop {
            steps.push(self.parse_step()?);
            match self.peek() {
                None => break,
                Some(Tok::Slash) => self.pos += 1,
                Some(Tok::DoubleSlash) => {
                    self.pos += 1;
                    steps.push(Step::descendant_or_self());
                }
                Some(_) => return Err(self.unexpected()),
            }
        }

        Ok(steps)
    }

    fn parse_step(&mut self) -> Result<Step, XPathError> {
        let mut step = match self.peek() {
            Some(Tok::Dot) => {
                self.pos += 1;
                return Ok(Step::new(Axis::SelfNode, NodeTest::Node));
            }
            Some(Tok::DotDot) => {
                self.pos += 1;
                return Ok(Step::new(Axis::Parent, NodeTest::Node));
            }
            Some(Tok::At) => {
                self.pos += 1;
                Step::new(Axis::Attribute, self.parse_node_test()?)
            }
            Some(Tok::Name(axis)) if self.peek_at(1) == Some(&Tok::ColonColon) => {
                let axis = parse_axis(axis)?;
                self.pos += 2;
                Step::new(axis, self.parse_node_test()?)
            }
            _ => Step::new(Axis::Child, self.parse_node_test()?),
        };

        while self.eat(&Tok::LBracket) {
            step.predicates.push(self.parse_or()?);
            self.expect(&Tok::RBracket)?;
        }

        Ok(step)
    }

    fn parse_node_test(&mut self) -> Result<NodeTest, XPathError> {
        match self.next()? {
            Tok::Star => Ok(NodeTest::Any),
            Tok::Name(name) if self.peek() == Some(&Tok::LParen) => {
                self.pos += 1;
                self.expect(&Tok::RParen)?;
                match name.as_str() {
                    "text" => Ok(NodeTest::Text),
                    "node" => Ok(NodeTest::Node),
                    _ => Err(XPathError::UnsupportedFunction(name)),
                }
            }
            Tok::Name(name) => Ok(NodeTest::Name(name)),
            _ => {
                self.pos -= 1;
                Err(self.unexpected())
            }
        }
    }

    fn parse_or(&mut self) -> Result<Expr, XPathError> {
        let mut expr = self.parse_and()?;
        while self.eat_keyword("or") {
            expr = Expr::Or(Box::new(expr), Box::new(self.parse_and()?));
        }
        Ok(expr)
    }

    fn parse_and(&mut self) -> Result<Expr, XPathError> {
        let mut expr = self.parse_unary()?;
        while self.eat_keyword("and") {
            expr = Expr::And(Box::new(expr), Box::new(self.parse_unary()?));
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, XPathError> {
        match self.peek().cloned() {
            Some(Tok::Number(n)) => {
                self.pos += 1;
                match n.parse::<usize>() {
                    Ok(position) if position > 0 => Ok(Expr::Position(position)),
                    _ => Err(XPathError::InvalidPosition(n)),
                }
            }
            Some(Tok::LParen) => {
                self.pos += 1;
                let expr = self.parse_or()?;
                self.expect(&Tok::RParen)?;
                Ok(expr)
            }
            Some(Tok::Name(name)) if self.peek_at(1) == Some(&Tok::LParen) && name != "text" => {
                self.pos += 2;
                self.parse_function(name)
            }
            _ => {
                let operand = self.parse_operand()?;
                if self.eat(&Tok::Eq) {
                    Ok(Expr::Equals(operand, self.parse_literal()?))
                } else if self.eat(&Tok::NotEq) {
                    Ok(Expr::NotEquals(operand, self.parse_literal()?))
                } else {
                    Ok(Expr::Exists(operand))
                }
            }
        }
    }

    /// Parses the arguments of `name(`, consuming the closing parenthesis.
    fn parse_function(&mut self, name: String) -> Result<Expr, XPathError> {
        let expr = match name.as_str() {
            "last" => Expr::Last,
            "not" => Expr::Not(Box::new(self.parse_or()?)),
            "contains" | "starts-with" => {
                let operand = self.parse_operand()?;
                self.expect(&Tok::Comma)?;
                let needle = self.parse_literal()?;
                if name == "contains" {
                    Expr::Contains(operand, needle)
                } else {
                    Expr::StartsWith(operand, needle)
                }
            }
            _ => return Err(XPathError::UnsupportedFunction(name)),
        };
        self.expect(&Tok::RParen)?;
        Ok(expr)
    }

    fn parse_operand(&mut self) -> Result<Operand, XPathError> {
        match self.next()? {
            Tok::At => match self.next()? {
                Tok::Name(name) => Ok(Operand::Attribute(name)),
                _ => {
                    self.pos -= 1;
                    Err(self.unexpected())
                }
            },
            Tok::Dot => Ok(Operand::Context),
            Tok::Name(name) if name == "text" && self.peek() == Some(&Tok::LParen) => {
                self.pos += 1;
                self.expect(&Tok::RParen)?;
                Ok(Operand::Text)
            }
            Tok::Name(name) => Ok(Operand::Child(name)),
            _ => {
                self.pos -= 1;
                Err(self.unexpected())
            }
        }
    }

    fn parse_literal(&mut self) -> Result<String, XPathError> {
        match self.next()? {
            Tok::Literal(s) => Ok(s),
            _ => {
                self.pos -= 1;
                Err(self.unexpected())
            }
        }
    }
}

fn parse_axis(name: &str) -> Result<Axis, XPathError> {
    match name {
        "child" => Ok(Axis::Child),
        "descendant" => Ok(Axis::Descendant),
        "descendant-or-self" => Ok(Axis::DescendantOrSelf),
        "self" => Ok(Axis::SelfNode),
        "parent" => Ok(Axis::Parent),
        "attribute" => Ok(Axis::Attribute),
        _ => Err(XPathError::UnsupportedAxis(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(expr: &str) -> Vec<Step> {
        XPath::compile(expr).unwrap().steps
    }

    #[test]
    fn test_double_slash_inserts_descendant_step() {
        let steps = steps("//td/a");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], Step::descendant_or_self());
        assert_eq!(steps[1].test, NodeTest::Name("td".into()));
        assert_eq!(steps[2].axis, Axis::Child);
    }

    #[test]
    fn test_predicates() {
        let steps = steps("//table[contains(@class, 'wikitable')][4]/tbody");
        assert_eq!(
            steps[1].predicates,
            vec![
                Expr::Contains(Operand::Attribute("class".into()), "wikitable".into()),
                Expr::Position(4),
            ]
        );
    }

    #[test]
    fn test_child_and_attribute_comparisons() {
        let steps = steps("//table[contains(caption, 'DJIA')]/tbody/tr/th[@scope='row']");
        assert_eq!(
            steps[1].predicates[0],
            Expr::Contains(Operand::Child("caption".into()), "DJIA".into())
        );
        assert_eq!(
            steps[4].predicates[0],
            Expr::Equals(Operand::Attribute("scope".into()), "row".into())
        );
    }

    #[test]
    fn test_text_and_attribute_tests() {
        let text = steps("//a/text()");
        assert_eq!(text[2].test, NodeTest::Text);

        let attr = steps("//a/@href");
        assert_eq!(attr[2].axis, Axis::Attribute);
        assert_eq!(attr[2].test, NodeTest::Name("href".into()));
    }

    #[test]
    fn test_boolean_predicates() {
        let steps = steps("//tr[not(@class) and (td or th)][last()]");
        assert!(matches!(steps[1].predicates[0], Expr::And(_, _)));
        assert_eq!(steps[1].predicates[1], Expr::Last);
    }

    #[test]
    fn test_explicit_axes() {
        let steps = steps("/descendant::td/parent::tr");
        assert_eq!(steps[0].axis, Axis::Descendant);
        assert_eq!(steps[1].axis, Axis::Parent);
        assert!(matches!(
            XPath::compile("//td/following-sibling::td"),
            Err(XPathError::UnsupportedAxis(_))
        ));
    }

    #[test]
    fn test_errors() {
        assert_eq!(XPath::compile("   "), Err(XPathError::Empty));
        assert_eq!(XPath::compile("//td["), Err(XPathError::UnexpectedEnd));
        assert_eq!(
            XPath::compile("//td[@x='a]"),
            Err(XPathError::UnterminatedLiteral(8))
        );
        assert!(matches!(
            XPath::compile("//td[0]"),
            Err(XPathError::InvalidPosition(_))
        ));
        assert!(matches!(
            XPath::compile("//td[count(a)]"),
            Err(XPathError::UnsupportedFunction(_))
        ));
        assert!(matches!(
            XPath::compile("//td # a"),
            Err(XPathError::InvalidCharacter { ch: '#', .. })
        ));
    }
}
