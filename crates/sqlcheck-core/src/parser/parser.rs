//! Recursive descent parser producing the concrete syntax tree.

use tracing::{debug, trace};

use super::error::{Expected, SyntaxError};
use crate::cst::{
    AndCondition, Assignment, AssignmentList, Chain, ColumnDef, ColumnList, Comparison,
    ComparisonOp, Condition, CreateStmt, DataType, DeleteStmt, ErrorNode, Expression,
    ExpressionList, Factor, InsertStmt, LiteralKind, NotCondition, Predicate, Query, QueryItem,
    SelectList, SelectStmt, Statement, StatementBody, Term, UpdateStmt, Value, ValueList,
    WhereClause,
};
use crate::lexer::{Keyword, Token, TokenKind};

/// Deepest parenthesis nesting accepted inside an expression.
pub const MAX_NESTING: usize = 128;

/// The result of a parse: the tree and every syntax error, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// The root of the tree. Failed statements appear as error nodes.
    pub tree: Query,
    /// Syntax errors in source order.
    pub errors: Vec<SyntaxError>,
}

/// Parser over a scanned token slice.
///
/// Statement parsing stops at the first unmet expectation; the error is
/// recorded and the parser synchronizes on the next statement keyword or
/// semicolon before carrying on.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    errors: Vec<SyntaxError>,
}

type ParseResult<T> = Result<T, SyntaxError>;

impl<'a> Parser<'a> {
    /// Creates a parser for the given tokens.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            errors: Vec::new(),
        }
    }

    /// Parses every statement in the token slice.
    #[must_use]
    pub fn parse(mut self) -> Parsed {
        let mut tree = Query::default();

        while let Some(token) = self.current() {
            if token.kind == TokenKind::Semicolon {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            let result = if token.starts_statement() {
                self.parse_statement()
            } else {
                Err(SyntaxError::unexpected(token))
            };

            match result {
                Ok(statement) => tree.items.push(QueryItem::Statement(statement)),
                Err(err) => {
                    trace!(error = %err, "recovering from syntax error");
                    self.errors.push(err);
                    self.depth = 0;
                    self.synchronize();
                    tree.items.push(QueryItem::Error(ErrorNode {
                        skipped: self.tokens[start..self.pos].to_vec(),
                    }));
                }
            }
        }

        debug!(
            statements = tree.statements().count(),
            errors = self.errors.len(),
            "parse complete"
        );

        Parsed {
            tree,
            errors: self.errors,
        }
    }

    /// Discards tokens up to the next statement keyword, or past the next
    /// semicolon.
    fn synchronize(&mut self) {
        while let Some(token) = self.current() {
            if token.kind == TokenKind::Semicolon {
                self.pos += 1;
                return;
            }
            if token.starts_statement() {
                return;
            }
            self.pos += 1;
        }
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let body = match self.current().and_then(Token::as_keyword) {
            Some(Keyword::Create) => StatementBody::Create(self.parse_create()?),
            Some(Keyword::Insert) => StatementBody::Insert(self.parse_insert()?),
            Some(Keyword::Select) => StatementBody::Select(self.parse_select()?),
            Some(Keyword::Update) => StatementBody::Update(self.parse_update()?),
            Some(Keyword::Delete) => StatementBody::Delete(self.parse_delete()?),
            _ => {
                return Err(match self.current() {
                    Some(token) => SyntaxError::unexpected(token),
                    None => SyntaxError::expected(Expected::Token(TokenKind::Semicolon), None),
                })
            }
        };
        let semicolon = self.expect(TokenKind::Semicolon)?;
        Ok(Statement { body, semicolon })
    }

    fn parse_create(&mut self) -> ParseResult<CreateStmt> {
        let create = self.expect_keyword(Keyword::Create)?;
        let table_kw = self.expect_keyword(Keyword::Table)?;
        let name = self.expect(TokenKind::Identifier)?;
        let lparen = self.expect(TokenKind::LeftParen)?;
        let columns: ColumnList = self.parse_comma_list(Self::parse_column_def)?;
        let rparen = self.expect(TokenKind::RightParen)?;
        Ok(CreateStmt {
            create,
            table_kw,
            name,
            lparen,
            columns,
            rparen,
        })
    }

    fn parse_column_def(&mut self) -> ParseResult<ColumnDef> {
        let name = self.expect(TokenKind::Identifier)?;
        let data_type = match self.current() {
            Some(token) if token.as_keyword().is_some_and(|kw| kw.is_data_type()) => {
                DataType(self.advance(token))
            }
            found => return Err(SyntaxError::expected(Expected::DataType, found)),
        };
        Ok(ColumnDef { name, data_type })
    }

    fn parse_insert(&mut self) -> ParseResult<InsertStmt> {
        let insert = self.expect_keyword(Keyword::Insert)?;
        let into = self.expect_keyword(Keyword::Into)?;
        let table = self.expect(TokenKind::Identifier)?;
        let values_kw = self.expect_keyword(Keyword::Values)?;
        let lparen = self.expect(TokenKind::LeftParen)?;
        let values: ValueList = self.parse_comma_list(Self::parse_value)?;
        let rparen = self.expect(TokenKind::RightParen)?;
        Ok(InsertStmt {
            insert,
            into,
            table,
            values_kw,
            lparen,
            values,
            rparen,
        })
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.current() {
            Some(token) => match LiteralKind::of(token.kind) {
                Some(kind) => Ok(Value {
                    kind,
                    token: self.advance(token),
                }),
                None => Err(SyntaxError::expected(Expected::Value, Some(token))),
            },
            None => Err(SyntaxError::expected(Expected::Value, None)),
        }
    }

    fn parse_select(&mut self) -> ParseResult<SelectStmt> {
        let select = self.expect_keyword(Keyword::Select)?;
        let list = match self.eat(TokenKind::Star) {
            Some(star) => SelectList::Star(star),
            None => SelectList::Expressions(self.parse_expression_list()?),
        };
        let from = self.expect_keyword(Keyword::From)?;
        let table = self.expect(TokenKind::Identifier)?;
        let where_clause = self.parse_optional_where()?;
        Ok(SelectStmt {
            select,
            list,
            from,
            table,
            where_clause,
        })
    }

    fn parse_update(&mut self) -> ParseResult<UpdateStmt> {
        let update = self.expect_keyword(Keyword::Update)?;
        let table = self.expect(TokenKind::Identifier)?;
        let set = self.expect_keyword(Keyword::Set)?;
        let assignments: AssignmentList = self.parse_comma_list(Self::parse_assignment)?;
        let where_clause = self.parse_optional_where()?;
        Ok(UpdateStmt {
            update,
            table,
            set,
            assignments,
            where_clause,
        })
    }

    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let column = self.expect(TokenKind::Identifier)?;
        let eq = self.expect(TokenKind::Eq)?;
        let value = self.parse_expression()?;
        Ok(Assignment { column, eq, value })
    }

    fn parse_delete(&mut self) -> ParseResult<DeleteStmt> {
        let delete = self.expect_keyword(Keyword::Delete)?;
        let from = self.expect_keyword(Keyword::From)?;
        let table = self.expect(TokenKind::Identifier)?;
        let where_clause = self.parse_optional_where()?;
        Ok(DeleteStmt {
            delete,
            from,
            table,
            where_clause,
        })
    }

    fn parse_optional_where(&mut self) -> ParseResult<Option<WhereClause>> {
        let Some(where_kw) = self.eat(TokenKind::Keyword(Keyword::Where)) else {
            return Ok(None);
        };
        let condition = self.parse_condition()?;
        Ok(Some(WhereClause {
            where_kw,
            condition,
        }))
    }

    fn parse_condition(&mut self) -> ParseResult<Condition> {
        let mut condition = Chain::new(self.parse_and_condition()?);
        while let Some(or) = self.eat(TokenKind::Keyword(Keyword::Or)) {
            condition.push(or, self.parse_and_condition()?);
        }
        Ok(condition)
    }

    fn parse_and_condition(&mut self) -> ParseResult<AndCondition> {
        let mut condition = Chain::new(self.parse_not_condition()?);
        while let Some(and) = self.eat(TokenKind::Keyword(Keyword::And)) {
            condition.push(and, self.parse_not_condition()?);
        }
        Ok(condition)
    }

    fn parse_not_condition(&mut self) -> ParseResult<NotCondition> {
        let not = self.eat(TokenKind::Keyword(Keyword::Not));

        // `NOT flag` reads a column as a boolean; one token of lookahead
        // past the identifier tells it apart from `NOT flag = 1`.
        if let (Some(_), Some(ident)) = (&not, self.current()) {
            let followed_by_comparison = self.peek(1).map(|next| next.kind.is_comparison());
            if ident.kind == TokenKind::Identifier && followed_by_comparison == Some(false) {
                let column = self.advance(ident);
                return Ok(NotCondition {
                    not,
                    predicate: Predicate::Column(column),
                });
            }
        }

        let predicate = Predicate::Comparison(self.parse_comparison()?);
        Ok(NotCondition { not, predicate })
    }

    fn parse_comparison(&mut self) -> ParseResult<Comparison> {
        let left = self.parse_expression()?;
        let op = match self.current() {
            Some(token) if token.kind.is_comparison() => ComparisonOp(self.advance(token)),
            found => return Err(SyntaxError::expected(Expected::ComparisonOperator, found)),
        };
        let right = self.parse_expression()?;
        Ok(Comparison { left, op, right })
    }

    fn parse_expression_list(&mut self) -> ParseResult<ExpressionList> {
        self.parse_comma_list(Self::parse_expression)
    }

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        let mut expr = Chain::new(self.parse_term()?);
        while let Some(op) = self.eat_any(&[TokenKind::Plus, TokenKind::Minus]) {
            expr.push(op, self.parse_term()?);
        }
        Ok(expr)
    }

    fn parse_term(&mut self) -> ParseResult<Term> {
        let mut term = Chain::new(self.parse_factor()?);
        while let Some(op) = self.eat_any(&[TokenKind::Star, TokenKind::Slash, TokenKind::Percent]) {
            term.push(op, self.parse_factor()?);
        }
        Ok(term)
    }

    fn parse_factor(&mut self) -> ParseResult<Factor> {
        let Some(token) = self.current() else {
            return Err(SyntaxError::expected(Expected::Factor, None));
        };
        match token.kind {
            TokenKind::Identifier => Ok(Factor::Identifier(self.advance(token))),
            TokenKind::Number => Ok(Factor::Number(self.advance(token))),
            TokenKind::String => Ok(Factor::String(self.advance(token))),
            TokenKind::LeftParen => {
                if self.depth >= MAX_NESTING {
                    return Err(SyntaxError::Internal {
                        message: format!("expression nesting exceeds {MAX_NESTING} levels"),
                        position: token.position,
                    });
                }
                let lparen = self.advance(token);
                self.depth += 1;
                let expr = self.parse_expression()?;
                self.depth -= 1;
                let rparen = self.expect(TokenKind::RightParen)?;
                Ok(Factor::Paren {
                    lparen,
                    expr: Box::new(expr),
                    rparen,
                })
            }
            _ => Err(SyntaxError::expected(Expected::Factor, Some(token))),
        }
    }

    /// Parses `item (',' item)*`.
    fn parse_comma_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Chain<T>> {
        let mut list = Chain::new(item(self)?);
        while let Some(comma) = self.eat(TokenKind::Comma) {
            list.push(comma, item(self)?);
        }
        Ok(list)
    }

    // Token helpers

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    /// Moves past `token`, which must be the current token, and returns a
    /// copy of it for the tree.
    fn advance(&mut self, token: &'a Token) -> Token {
        debug_assert!(core::ptr::eq(token, &self.tokens[self.pos]));
        self.pos += 1;
        token.clone()
    }

    /// Consumes the current token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        match self.current() {
            Some(token) if token.kind == kind => Some(self.advance(token)),
            _ => None,
        }
    }

    fn eat_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        match self.current() {
            Some(token) if kinds.contains(&token.kind) => Some(self.advance(token)),
            _ => None,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        self.eat(kind)
            .ok_or_else(|| SyntaxError::expected(Expected::Token(kind), self.current()))
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<Token> {
        self.expect(TokenKind::Keyword(keyword))
    }
}
