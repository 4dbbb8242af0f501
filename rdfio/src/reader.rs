//! Streaming reader: parses documents and drives handler callbacks.
//!
//! The reader owns no document state between parses except the blank node
//! counter, which keeps generated labels unique across multiple parses
//! through the same reader. Parsed IRIs arrive at the handler resolved
//! against the document base, and prefixed names arrive expanded; a name
//! using an undeclared prefix aborts the parse.

use std::collections::HashMap;
use std::path::Path;

use rdfio_model::vocab::rdf;
use rdfio_model::{BlankId, Literal, LiteralValue, Predicate, Statement, StatementFlags, Subject, Term};

use crate::error::{Diagnostic, RdfError, Result};
use crate::handle::EngineHandle;
use crate::iri;
use crate::lex::{tokenize, Token, TokenKind};
use crate::status::{Status, StatusError};
use crate::syntax::Syntax;

/// Receiver for parse events
///
/// Every callback reports its outcome as a `Status`; returning anything
/// other than `Status::Success` aborts the parse with the corresponding
/// error. All callbacks default to `Success`, so a handler implements only
/// what it cares about.
pub trait ReadHandler {
    /// A `@base` / `BASE` directive was parsed
    fn on_base(&mut self, _iri: &str) -> Status {
        Status::Success
    }

    /// A `@prefix` / `PREFIX` directive was parsed
    fn on_prefix(&mut self, _name: &str, _iri: &str) -> Status {
        Status::Success
    }

    /// A statement was parsed, with the syntactic context it came from
    fn on_statement(&mut self, _statement: &Statement, _flags: StatementFlags) -> Status {
        Status::Success
    }

    /// The innermost open anonymous node or collection was closed
    fn on_end_anonymous(&mut self) -> Status {
        Status::Success
    }

    /// A lenient-mode oddity was noticed; never aborts the parse
    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        tracing::warn!(position = diagnostic.position, "{}", diagnostic.message);
    }
}

/// Handler that buffers statements and directive state
#[derive(Debug, Default)]
pub struct StatementCollector {
    pub base: Option<String>,
    pub prefixes: HashMap<String, String>,
    pub statements: Vec<Statement>,
}

impl ReadHandler for StatementCollector {
    fn on_base(&mut self, iri: &str) -> Status {
        self.base = Some(iri.to_string());
        Status::Success
    }

    fn on_prefix(&mut self, name: &str, iri: &str) -> Status {
        self.prefixes.insert(name.to_string(), iri.to_string());
        Status::Success
    }

    fn on_statement(&mut self, statement: &Statement, _flags: StatementFlags) -> Status {
        self.statements.push(statement.clone());
        Status::Success
    }
}

/// Handler that records the full event stream, including structural flags
/// and end-of-anonymous markers
///
/// Useful for replaying a parsed document through a writer.
#[derive(Debug, Default)]
pub struct EventCollector {
    pub events: Vec<rdfio_model::Event>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ReadHandler for EventCollector {
    fn on_base(&mut self, iri: &str) -> Status {
        self.events.push(rdfio_model::Event::base(iri));
        Status::Success
    }

    fn on_prefix(&mut self, name: &str, iri: &str) -> Status {
        self.events.push(rdfio_model::Event::prefix(name, iri));
        Status::Success
    }

    fn on_statement(&mut self, statement: &Statement, flags: StatementFlags) -> Status {
        self.events
            .push(rdfio_model::Event::statement_with_flags(statement.clone(), flags));
        Status::Success
    }

    fn on_end_anonymous(&mut self) -> Status {
        self.events.push(rdfio_model::Event::EndAnonymous);
        Status::Success
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

/// Reader configuration
#[derive(Clone, Debug, Default)]
pub struct ReaderOptions {
    /// Reject input a lenient parse would accept with diagnostics
    /// (currently: illegal characters inside IRIs)
    pub strict: bool,
    /// Prepended to every blank node label the reader emits, keeping IDs
    /// from distinct parses disjoint when their results are merged
    pub blank_prefix: Option<String>,
    /// Graph label applied to statements that carry none
    pub default_graph: Option<Subject>,
}

/// Parser state that survives across parses
#[derive(Debug, Default)]
struct ParserCore {
    prefixes: HashMap<String, String>,
    base: Option<String>,
    blank_counter: u32,
}

/// Streaming parser for one of the supported syntaxes
pub struct Reader {
    syntax: Syntax,
    options: ReaderOptions,
    core: EngineHandle<ParserCore>,
}

impl Reader {
    /// Create a reader for the given syntax
    pub fn new(syntax: Syntax, options: ReaderOptions) -> Self {
        Self {
            syntax,
            options,
            core: EngineHandle::new(ParserCore::default()),
        }
    }

    /// The syntax this reader parses
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// The base IRI in effect after the last parse, if any
    pub fn base(&self) -> Option<&str> {
        self.core.get().and_then(|c| c.base.as_deref())
    }

    /// Parse a document string, driving the handler
    ///
    /// Directive state (prefixes, base) resets at the start of each parse;
    /// the blank node counter does not.
    pub fn parse_str<H: ReadHandler>(&mut self, input: &str, handler: &mut H) -> Result<()> {
        let syntax = self.syntax;
        let strict = self.options.strict;
        let blank_prefix = self.options.blank_prefix.as_deref();
        let default_graph = self.options.default_graph.as_ref();

        let core = self
            .core
            .get_mut()
            .ok_or_else(|| StatusError::BadArg("reader has been released".to_string()))?;
        core.prefixes.clear();
        core.base = None;

        tracing::debug!(%syntax, len = input.len(), "parsing document");

        let lex = tokenize(input, !strict)?;
        for diagnostic in &lex.diagnostics {
            handler.on_diagnostic(diagnostic);
        }

        let mut parse = Parse {
            tokens: lex.tokens,
            pos: 0,
            handler,
            core,
            syntax,
            blank_prefix,
            default_graph,
            graph: None,
        };
        parse.parse_document()
    }

    /// Parse a document from a file
    pub fn parse_file<P: AsRef<Path>, H: ReadHandler>(
        &mut self,
        path: P,
        handler: &mut H,
    ) -> Result<()> {
        let input = std::fs::read_to_string(path)?;
        self.parse_str(&input, handler)
    }

    /// Parse a document string and collect its statements
    pub fn parse_to_statements(&mut self, input: &str) -> Result<Vec<Statement>> {
        let mut collector = StatementCollector::default();
        self.parse_str(input, &mut collector)?;
        Ok(collector.statements)
    }

    /// Release the reader's internal state
    ///
    /// Idempotent; returns true if this call performed the release. A
    /// released reader fails subsequent parses with a bad-argument error.
    pub fn release(&mut self) -> bool {
        self.core.release()
    }
}

/// Syntactic context of the current subject
#[derive(Clone, Copy, Debug, PartialEq)]
enum SubjCtx {
    Plain,
    Anon,
    EmptyAnon,
}

/// Result of parsing a subject position
struct ParsedSubject {
    subject: Subject,
    ctx: SubjCtx,
    /// True if the subject was a `[...]` whose property list was already
    /// emitted, making a following predicate list optional
    from_property_list: bool,
}

/// One in-flight parse over a token stream
struct Parse<'a, H: ReadHandler> {
    tokens: Vec<Token>,
    pos: usize,
    handler: &'a mut H,
    core: &'a mut ParserCore,
    syntax: Syntax,
    blank_prefix: Option<&'a str>,
    default_graph: Option<&'a Subject>,
    /// Graph label of the enclosing TriG block, if inside one
    graph: Option<Subject>,
}

impl<H: ReadHandler> Parse<'_, H> {
    fn parse_document(&mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    // =========================================================================
    // Token stream helpers
    // =========================================================================

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// The token after the current one (EOF-saturating)
    fn peek_next(&self) -> &Token {
        self.tokens
            .get(self.pos + 1)
            .unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(RdfError::syntax(
                self.current().start,
                format!("expected {}, found {}", kind, self.current().kind),
            ))
        }
    }

    fn syntax_error<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(RdfError::syntax(self.current().start, message))
    }

    // =========================================================================
    // Statement dispatch
    // =========================================================================

    fn parse_statement(&mut self) -> Result<()> {
        match self.syntax {
            Syntax::Turtle => self.parse_turtle_statement(),
            Syntax::TriG => self.parse_trig_statement(),
            Syntax::NTriples | Syntax::NQuads => self.parse_line_statement(),
        }
    }

    fn parse_turtle_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples(),
        }
    }

    fn parse_trig_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::KwGraph => {
                self.advance();
                let label = self.parse_graph_label()?;
                self.parse_graph_block(Some(label))
            }
            TokenKind::LBrace => self.parse_graph_block(None),
            TokenKind::Eof => Ok(()),
            kind => {
                // `label { ... }` needs one token of lookahead to tell a
                // graph block from a plain subject
                let is_label = matches!(
                    kind,
                    TokenKind::Iri(_)
                        | TokenKind::PrefixedName { .. }
                        | TokenKind::PrefixedNameNs(_)
                        | TokenKind::BlankNodeLabel(_)
                );
                if is_label && matches!(self.peek_next().kind, TokenKind::LBrace) {
                    let label = self.parse_graph_label()?;
                    self.parse_graph_block(Some(label))
                } else {
                    self.parse_triples()
                }
            }
        }
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance();

        let prefix = match &self.current().kind {
            TokenKind::PrefixedNameNs(p) => p.to_string(),
            _ => return self.syntax_error("expected prefix namespace"),
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => self.resolve(iri)?,
            _ => return self.syntax_error("expected IRI for prefix namespace"),
        };
        self.advance();

        self.handler
            .on_prefix(&prefix, &namespace)
            .check("prefix handler aborted the parse")?;
        self.core.prefixes.insert(prefix, namespace);

        // Trailing dot is required for @prefix, absent for PREFIX
        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance();

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.to_string(),
            _ => return self.syntax_error("expected IRI for base"),
        };
        self.advance();

        self.handler
            .on_base(&base_iri)
            .check("base handler aborted the parse")?;
        self.core.base = Some(base_iri);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }

        Ok(())
    }

    // =========================================================================
    // Turtle / TriG triples
    // =========================================================================

    fn parse_triples(&mut self) -> Result<()> {
        let parsed = self.parse_subject()?;

        // `[ ... ] .` is a complete statement on its own
        if !(parsed.from_property_list && self.check(&TokenKind::Dot)) {
            self.parse_predicate_object_list(&parsed.subject, parsed.ctx)?;
        }

        self.expect(&TokenKind::Dot)?;
        Ok(())
    }

    /// Like `parse_triples` but with the trailing dot optional before `}`
    fn parse_triples_in_block(&mut self) -> Result<()> {
        let parsed = self.parse_subject()?;

        let ends_now = parsed.from_property_list
            && matches!(self.current().kind, TokenKind::Dot | TokenKind::RBrace);
        if !ends_now {
            self.parse_predicate_object_list(&parsed.subject, parsed.ctx)?;
        }

        match self.current().kind {
            TokenKind::Dot => {
                self.advance();
                Ok(())
            }
            TokenKind::RBrace => Ok(()),
            _ => self.syntax_error(format!(
                "expected '.' or '}}' after triples, found {}",
                self.current().kind
            )),
        }
    }

    fn parse_subject(&mut self) -> Result<ParsedSubject> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::iri(resolved),
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::iri(iri),
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::iri(iri),
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            TokenKind::BlankNodeLabel(label) => {
                let id = self.blank_from_label(label);
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::Blank(id),
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            TokenKind::Anon => {
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::Blank(self.fresh_blank()),
                    ctx: SubjCtx::EmptyAnon,
                    from_property_list: false,
                })
            }
            TokenKind::LBracket => {
                // Property-list subject: emit its statements first, then
                // whatever follows uses the node as a plain subject
                self.advance();
                let id = self.fresh_blank();
                let subject = Subject::Blank(id);
                self.parse_predicate_object_list(&subject, SubjCtx::Anon)?;
                self.expect(&TokenKind::RBracket)?;
                self.handler
                    .on_end_anonymous()
                    .check("end-anonymous handler aborted the parse")?;
                Ok(ParsedSubject {
                    subject,
                    ctx: SubjCtx::Plain,
                    from_property_list: true,
                })
            }
            TokenKind::LParen => {
                let head = self.parse_collection()?;
                let subject = Subject::try_from(head).map_err(RdfError::from)?;
                Ok(ParsedSubject {
                    subject,
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            TokenKind::Nil => {
                self.advance();
                Ok(ParsedSubject {
                    subject: Subject::iri(rdf::NIL),
                    ctx: SubjCtx::Plain,
                    from_property_list: false,
                })
            }
            kind => self.syntax_error(format!("expected subject, found {kind}")),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &Subject, ctx: SubjCtx) -> Result<()> {
        let mut first = true;
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, &predicate, ctx, &mut first)?;

            if matches!(self.current().kind, TokenKind::Semicolon) {
                // Runs of semicolons collapse: each may carry an empty
                // predicate-object pair
                while matches!(self.current().kind, TokenKind::Semicolon) {
                    self.advance();
                }
                // Trailing semicolon before the closer is allowed
                if matches!(
                    self.current().kind,
                    TokenKind::Dot | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Eof
                ) {
                    break;
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    fn parse_predicate(&mut self) -> Result<Predicate> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Ok(Predicate::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(Predicate::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(Predicate::iri(iri))
            }
            TokenKind::KwA => {
                self.advance();
                Ok(Predicate::iri(rdf::TYPE))
            }
            kind => self.syntax_error(format!("expected predicate, found {kind}")),
        }
    }

    fn parse_object_list(
        &mut self,
        subject: &Subject,
        predicate: &Predicate,
        ctx: SubjCtx,
        first: &mut bool,
    ) -> Result<()> {
        loop {
            self.parse_object_emit(subject, predicate, ctx, first)?;

            if matches!(self.current().kind, TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse one object and emit the resulting statement, handling the
    /// `[...]` and `(...)` shorthands in object position
    fn parse_object_emit(
        &mut self,
        subject: &Subject,
        predicate: &Predicate,
        ctx: SubjCtx,
        first: &mut bool,
    ) -> Result<()> {
        match self.current().kind {
            TokenKind::LBracket => {
                // Emit the outer statement before the node's own
                // properties so a streaming consumer sees text order
                self.advance();
                let id = self.fresh_blank();
                let mut flags = self.subject_flags(ctx, first);
                flags.anon_object = true;
                self.emit(subject, predicate, Term::Blank(id.clone()), flags)?;

                let inner = Subject::Blank(id);
                self.parse_predicate_object_list(&inner, SubjCtx::Anon)?;
                self.expect(&TokenKind::RBracket)?;
                self.handler
                    .on_end_anonymous()
                    .check("end-anonymous handler aborted the parse")?;
                Ok(())
            }
            TokenKind::Anon => {
                self.advance();
                let id = self.fresh_blank();
                let mut flags = self.subject_flags(ctx, first);
                flags.empty_anon_object = true;
                self.emit(subject, predicate, Term::Blank(id), flags)
            }
            TokenKind::LParen => {
                // An empty collection with interior comments lexes as
                // LParen RParen rather than Nil
                if matches!(self.peek_next().kind, TokenKind::RParen) {
                    self.advance();
                    self.advance();
                    let flags = self.subject_flags(ctx, first);
                    return self.emit(subject, predicate, Term::iri(rdf::NIL), flags);
                }
                self.advance();
                let head = self.fresh_blank();
                let flags = self.subject_flags(ctx, first);
                self.emit(subject, predicate, Term::Blank(head.clone()), flags)?;
                self.parse_collection_items(head)
            }
            TokenKind::Nil => {
                self.advance();
                let flags = self.subject_flags(ctx, first);
                self.emit(subject, predicate, Term::iri(rdf::NIL), flags)
            }
            _ => {
                let object = self.parse_value_object()?;
                let flags = self.subject_flags(ctx, first);
                self.emit(subject, predicate, object, flags)
            }
        }
    }

    /// Parse a non-structural object term: IRI, prefixed name, labeled
    /// blank, or literal
    fn parse_value_object(&mut self) -> Result<Term> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                let id = self.blank_from_label(label);
                self.advance();
                Ok(Term::Blank(id))
            }
            TokenKind::String(_)
            | TokenKind::Integer(_)
            | TokenKind::Decimal(_)
            | TokenKind::Double(_)
            | TokenKind::KwTrue
            | TokenKind::KwFalse => self.parse_literal(),
            kind => self.syntax_error(format!("expected object, found {kind}")),
        }
    }

    fn parse_literal(&mut self) -> Result<Term> {
        match &self.current().kind.clone() {
            TokenKind::String(value) => {
                let value = value.clone();
                self.advance();

                match &self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        let lang = lang.clone();
                        self.advance();
                        Ok(Term::lang_string(&*value, &*lang))
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype_iri = self.parse_datatype_iri()?;
                        let parsed = LiteralValue::parse(&value, &datatype_iri)?;
                        Ok(Term::Literal(Literal::new(parsed, None)?))
                    }
                    _ => Ok(Term::string(&*value)),
                }
            }
            TokenKind::Integer(n) => {
                let n = *n;
                self.advance();
                Ok(Term::integer(n))
            }
            TokenKind::Decimal(s) => {
                let s = s.clone();
                self.advance();
                Ok(Term::decimal(&*s))
            }
            TokenKind::Double(n) => {
                let n = *n;
                self.advance();
                Ok(Term::double(n))
            }
            TokenKind::KwTrue => {
                self.advance();
                Ok(Term::boolean(true))
            }
            TokenKind::KwFalse => {
                self.advance();
                Ok(Term::boolean(false))
            }
            kind => self.syntax_error(format!("expected literal, found {kind}")),
        }
    }

    fn parse_datatype_iri(&mut self) -> Result<String> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Ok(resolved)
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(iri)
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(iri)
            }
            kind => self.syntax_error(format!("expected datatype IRI, found {kind}")),
        }
    }

    /// Parse `( item1 item2 ... )` in subject position; returns the head
    fn parse_collection(&mut self) -> Result<Term> {
        self.expect(&TokenKind::LParen)?;

        if matches!(self.current().kind, TokenKind::RParen) {
            self.advance();
            return Ok(Term::iri(rdf::NIL));
        }

        let head = self.fresh_blank();
        self.parse_collection_items(head.clone())?;
        Ok(Term::Blank(head))
    }

    /// Parse collection items after the head node exists, emitting the
    /// `rdf:first` / `rdf:rest` chain
    fn parse_collection_items(&mut self, head: BlankId) -> Result<()> {
        let first_pred = Predicate::iri(rdf::FIRST);
        let rest_pred = Predicate::iri(rdf::REST);

        let mut current = Subject::Blank(head);
        let mut first_item = true;

        loop {
            let item = self.parse_collection_item()?;

            let mut flags = StatementFlags::default();
            if first_item {
                flags.list_begin = true;
                first_item = false;
            } else {
                flags.list_continue = true;
            }
            self.emit(&current, &first_pred, item, flags)?;

            let rest_flags = StatementFlags {
                list_continue: true,
                ..Default::default()
            };

            if matches!(self.current().kind, TokenKind::RParen) {
                self.emit(&current, &rest_pred, Term::iri(rdf::NIL), rest_flags)?;
                break;
            }

            let next = self.fresh_blank();
            self.emit(&current, &rest_pred, Term::Blank(next.clone()), rest_flags)?;
            current = Subject::Blank(next);
        }

        self.expect(&TokenKind::RParen)?;
        self.handler
            .on_end_anonymous()
            .check("end-anonymous handler aborted the parse")?;
        Ok(())
    }

    /// Parse a single collection item, which may itself be structured
    fn parse_collection_item(&mut self) -> Result<Term> {
        match self.current().kind {
            TokenKind::LParen => self.parse_collection(),
            TokenKind::LBracket => {
                self.advance();
                let id = self.fresh_blank();
                let inner = Subject::Blank(id.clone());
                self.parse_predicate_object_list(&inner, SubjCtx::Anon)?;
                self.expect(&TokenKind::RBracket)?;
                self.handler
                    .on_end_anonymous()
                    .check("end-anonymous handler aborted the parse")?;
                Ok(Term::Blank(id))
            }
            TokenKind::Anon => {
                self.advance();
                Ok(Term::Blank(self.fresh_blank()))
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Term::iri(rdf::NIL))
            }
            _ => self.parse_value_object(),
        }
    }

    // =========================================================================
    // TriG graph blocks
    // =========================================================================

    fn parse_graph_label(&mut self) -> Result<Subject> {
        match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Ok(Subject::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(prefix, local)?;
                self.advance();
                Ok(Subject::iri(iri))
            }
            TokenKind::PrefixedNameNs(prefix) => {
                let iri = self.expand_prefixed_name(prefix, "")?;
                self.advance();
                Ok(Subject::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                let id = self.blank_from_label(label);
                self.advance();
                Ok(Subject::Blank(id))
            }
            kind => self.syntax_error(format!("expected graph label, found {kind}")),
        }
    }

    fn parse_graph_block(&mut self, label: Option<Subject>) -> Result<()> {
        self.expect(&TokenKind::LBrace)?;

        let prev = self.graph.take();
        self.graph = label;

        let result = self.parse_graph_block_body();
        self.graph = prev;
        result
    }

    fn parse_graph_block_body(&mut self) -> Result<()> {
        loop {
            match self.current().kind {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Eof => {
                    return self.syntax_error("unterminated graph block");
                }
                _ => self.parse_triples_in_block()?,
            }
        }
    }

    // =========================================================================
    // N-Triples / N-Quads lines
    // =========================================================================

    fn parse_line_statement(&mut self) -> Result<()> {
        if matches!(
            self.current().kind,
            TokenKind::KwPrefix
                | TokenKind::KwBase
                | TokenKind::KwSparqlPrefix
                | TokenKind::KwSparqlBase
        ) {
            return self.syntax_error(format!("directives are not allowed in {}", self.syntax));
        }

        let subject = match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Subject::iri(resolved)
            }
            TokenKind::BlankNodeLabel(label) => {
                let id = self.blank_from_label(label);
                self.advance();
                Subject::Blank(id)
            }
            kind => return self.syntax_error(format!("expected subject, found {kind}")),
        };

        let predicate = match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Predicate::iri(resolved)
            }
            kind => return self.syntax_error(format!("expected predicate IRI, found {kind}")),
        };

        let object = match &self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve(iri)?;
                self.advance();
                Term::iri(resolved)
            }
            TokenKind::BlankNodeLabel(label) => {
                let id = self.blank_from_label(label);
                self.advance();
                Term::Blank(id)
            }
            TokenKind::String(value) => {
                let value = value.clone();
                self.advance();
                match &self.current().kind.clone() {
                    TokenKind::LangTag(lang) => {
                        let lang = lang.clone();
                        self.advance();
                        Term::lang_string(&*value, &*lang)
                    }
                    TokenKind::DoubleCaret => {
                        self.advance();
                        let datatype_iri = match &self.current().kind.clone() {
                            TokenKind::Iri(iri) => {
                                let resolved = self.resolve(iri)?;
                                self.advance();
                                resolved
                            }
                            kind => {
                                return self
                                    .syntax_error(format!("expected datatype IRI, found {kind}"))
                            }
                        };
                        let parsed = LiteralValue::parse(&value, &datatype_iri)?;
                        Term::Literal(Literal::new(parsed, None)?)
                    }
                    _ => Term::string(&*value),
                }
            }
            kind => return self.syntax_error(format!("expected object, found {kind}")),
        };

        // N-Quads admits an optional graph label before the dot
        let graph = if self.syntax == Syntax::NQuads {
            match &self.current().kind.clone() {
                TokenKind::Iri(iri) => {
                    let resolved = self.resolve(iri)?;
                    self.advance();
                    Some(Subject::iri(resolved))
                }
                TokenKind::BlankNodeLabel(label) => {
                    let id = self.blank_from_label(label);
                    self.advance();
                    Some(Subject::Blank(id))
                }
                _ => None,
            }
        } else {
            None
        };

        self.expect(&TokenKind::Dot)?;

        let statement = match graph.or_else(|| self.default_graph.cloned()) {
            Some(g) => Statement::quad(subject, predicate, object, g),
            None => Statement::triple(subject, predicate, object),
        };
        self.handler
            .on_statement(&statement, StatementFlags::default())
            .check("statement handler aborted the parse")?;
        Ok(())
    }

    // =========================================================================
    // Emission and naming
    // =========================================================================

    fn subject_flags(&self, ctx: SubjCtx, first: &mut bool) -> StatementFlags {
        let mut flags = StatementFlags::default();
        match ctx {
            SubjCtx::Plain => {}
            SubjCtx::Anon => {
                if *first {
                    flags.anon_subject_begin = true;
                } else {
                    flags.anon_subject_continue = true;
                }
            }
            SubjCtx::EmptyAnon => flags.empty_anon_subject = true,
        }
        *first = false;
        flags
    }

    fn emit(
        &mut self,
        subject: &Subject,
        predicate: &Predicate,
        object: Term,
        flags: StatementFlags,
    ) -> Result<()> {
        let graph = self.graph.clone().or_else(|| self.default_graph.cloned());
        let statement = match graph {
            Some(g) => Statement::quad(subject.clone(), predicate.clone(), object, g),
            None => Statement::triple(subject.clone(), predicate.clone(), object),
        };
        self.handler
            .on_statement(&statement, flags)
            .check("statement handler aborted the parse")?;
        Ok(())
    }

    fn fresh_blank(&mut self) -> BlankId {
        let n = self.core.blank_counter;
        self.core.blank_counter += 1;
        match self.blank_prefix {
            Some(p) => BlankId::new(format!("{p}b{n}")),
            None => BlankId::new(format!("b{n}")),
        }
    }

    fn blank_from_label(&self, label: &str) -> BlankId {
        match self.blank_prefix {
            Some(p) => BlankId::new(format!("{p}{label}")),
            None => BlankId::new(label),
        }
    }

    fn resolve(&self, reference: &str) -> Result<String> {
        iri::resolve(self.core.base.as_deref(), reference)
    }

    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        match self.core.prefixes.get(prefix) {
            Some(namespace) => Ok(format!("{namespace}{local}")),
            None => Err(StatusError::BadCurie(format!("prefix '{prefix}' is not declared")).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdfio_model::vocab::xsd;

    fn parse(syntax: Syntax, input: &str) -> Result<Vec<Statement>> {
        Reader::new(syntax, ReaderOptions::default()).parse_to_statements(input)
    }

    fn parse_turtle(input: &str) -> Result<Vec<Statement>> {
        parse(Syntax::Turtle, input)
    }

    #[test]
    fn test_simple_triple() {
        let input = r#"<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" ."#;
        let stmts = parse_turtle(input).unwrap();

        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].subject(), &Subject::iri("http://example.org/alice"));
        assert_eq!(
            stmts[0].predicate(),
            &Predicate::iri("http://xmlns.com/foaf/0.1/name")
        );
        assert_eq!(stmts[0].object(), &Term::string("Alice"));
    }

    #[test]
    fn test_prefix_directive() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            ex:alice foaf:name "Alice" .
        "#;
        let stmts = parse_turtle(input).unwrap();

        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].subject(), &Subject::iri("http://example.org/alice"));
        assert_eq!(
            stmts[0].predicate(),
            &Predicate::iri("http://xmlns.com/foaf/0.1/name")
        );
    }

    #[test]
    fn test_undeclared_prefix_fails() {
        let err = parse_turtle("ex:alice ex:name \"Alice\" .").unwrap_err();
        assert!(matches!(
            err,
            RdfError::Engine(StatusError::BadCurie(_))
        ));
    }

    #[test]
    fn test_a_keyword() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice a ex:Person .
        "#;
        let stmts = parse_turtle(input).unwrap();

        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].predicate(), &Predicate::iri(rdf::TYPE));
    }

    #[test]
    fn test_semicolon_syntax() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" ;
                     ex:age 30 .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[1].object(), &Term::integer(30));
    }

    #[test]
    fn test_consecutive_semicolons() {
        // The grammar allows an empty predicate-object pair between semicolons
        let stmts = parse_turtle("<http://a> <http://p> 1 ;; <http://q> 2 .").unwrap();
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[1].object(), &Term::integer(2));

        let stmts = parse_turtle("<http://a> <http://p> 1 ;; .").unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_integer_literal_out_of_range() {
        let err = parse_turtle("<http://a> <http://p> 9223372036854775808 .").unwrap_err();
        assert!(matches!(err, RdfError::Syntax { .. }));
    }

    #[test]
    fn test_comma_syntax() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:knows ex:bob, ex:charlie .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn test_labeled_blank_node() {
        let stmts = parse_turtle(r#"_:b1 <http://example.org/name> "Bob" ."#).unwrap();
        assert_eq!(stmts[0].subject(), &Subject::blank("b1"));
    }

    #[test]
    fn test_blank_prefix_applied() {
        let options = ReaderOptions {
            blank_prefix: Some("doc1-".to_string()),
            ..Default::default()
        };
        let mut reader = Reader::new(Syntax::Turtle, options);
        let stmts = reader
            .parse_to_statements(r#"_:b1 <http://example.org/name> "Bob" ."#)
            .unwrap();
        assert_eq!(stmts[0].subject(), &Subject::blank("doc1-b1"));
    }

    #[test]
    fn test_generated_blank_labels_disjoint_across_readers() {
        let input = r#"[ <http://example.org/p> "v" ] ."#;

        let mut a = Reader::new(
            Syntax::Turtle,
            ReaderOptions {
                blank_prefix: Some("a-".to_string()),
                ..Default::default()
            },
        );
        let mut b = Reader::new(
            Syntax::Turtle,
            ReaderOptions {
                blank_prefix: Some("b-".to_string()),
                ..Default::default()
            },
        );

        let sa = a.parse_to_statements(input).unwrap();
        let sb = b.parse_to_statements(input).unwrap();
        assert_ne!(sa[0].subject(), sb[0].subject());
    }

    #[test]
    fn test_blank_counter_persists_across_parses() {
        let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
        let input = r#"[ <http://example.org/p> "v" ] ."#;
        let first = reader.parse_to_statements(input).unwrap();
        let second = reader.parse_to_statements(input).unwrap();
        assert_ne!(first[0].subject(), second[0].subject());
    }

    #[test]
    fn test_anon_object_flags_and_end_event() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:knows [ ex:name "Bob" ; ex:age 42 ] .
        "#;
        let mut collector = EventCollector::default();
        Reader::new(Syntax::Turtle, ReaderOptions::default())
            .parse_str(input, &mut collector)
            .unwrap();

        let flags: Vec<StatementFlags> = collector
            .events
            .iter()
            .filter_map(|e| match e {
                rdfio_model::Event::Statement { flags, .. } => Some(*flags),
                _ => None,
            })
            .collect();

        assert_eq!(flags.len(), 3);
        assert!(flags[0].anon_object);
        assert!(flags[1].anon_subject_begin);
        assert!(flags[2].anon_subject_continue);
        assert!(collector
            .events
            .iter()
            .any(|e| matches!(e, rdfio_model::Event::EndAnonymous)));
    }

    #[test]
    fn test_empty_anon_flags() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            [] ex:sees [] .
        "#;
        let mut collector = EventCollector::default();
        Reader::new(Syntax::Turtle, ReaderOptions::default())
            .parse_str(input, &mut collector)
            .unwrap();

        match &collector.events[1] {
            rdfio_model::Event::Statement { flags, .. } => {
                assert!(flags.empty_anon_subject);
                assert!(flags.empty_anon_object);
            }
            other => panic!("expected statement event, got {other:?}"),
        }
    }

    #[test]
    fn test_registered_typed_literal() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:alice ex:age "30"^^xsd:integer .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts[0].object(), &Term::integer(30));
    }

    #[test]
    fn test_unknown_datatype_fails() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:alice ex:birthdate "2000-01-01"^^xsd:date .
        "#;
        let err = parse_turtle(input).unwrap_err();
        assert!(matches!(err, RdfError::UnknownDatatype(_)));
    }

    #[test]
    fn test_language_tagged_literal() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice"@en .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts[0].object(), &Term::lang_string("Alice", "en"));
    }

    #[test]
    fn test_bare_literals() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:x ex:i 30 ; ex:d 3.14 ; ex:e 1.5e2 ; ex:b true .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts[0].object(), &Term::integer(30));
        assert_eq!(stmts[1].object(), &Term::decimal("3.14"));
        assert_eq!(stmts[2].object(), &Term::double(1.5e2));
        assert_eq!(stmts[3].object(), &Term::boolean(true));
    }

    #[test]
    fn test_collection() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:friends ( ex:bob ex:charlie ) .
        "#;
        let stmts = parse_turtle(input).unwrap();

        // outer statement + first/rest pairs for two items
        assert_eq!(stmts.len(), 5);
        assert_eq!(stmts[1].predicate(), &Predicate::iri(rdf::FIRST));
        assert_eq!(stmts[1].object(), &Term::iri("http://example.org/bob"));
        assert_eq!(stmts[4].object(), &Term::iri(rdf::NIL));
    }

    #[test]
    fn test_collection_flags() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:nums ( 1 2 ) .
        "#;
        let mut collector = EventCollector::default();
        Reader::new(Syntax::Turtle, ReaderOptions::default())
            .parse_str(input, &mut collector)
            .unwrap();

        let flags: Vec<StatementFlags> = collector
            .events
            .iter()
            .filter_map(|e| match e {
                rdfio_model::Event::Statement { flags, .. } => Some(*flags),
                _ => None,
            })
            .collect();
        assert_eq!(flags.len(), 5);
        assert!(flags[1].list_begin);
        assert!(flags[2].list_continue);
        assert!(flags[3].list_continue);
        assert!(flags[4].list_continue);
    }

    #[test]
    fn test_empty_collection() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:friends () .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts.len(), 1);
        assert_eq!(stmts[0].object(), &Term::iri(rdf::NIL));
    }

    #[test]
    fn test_sparql_prefix_syntax() {
        let input = r#"
            PREFIX ex: <http://example.org/>
            ex:alice ex:name "Alice" .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts.len(), 1);
    }

    #[test]
    fn test_base_iri_resolution() {
        let input = r#"
            @base <http://example.org/path/> .
            <alice> <name> "Alice" .
            <../bob> <name> "Bob" .
        "#;
        let stmts = parse_turtle(input).unwrap();

        assert_eq!(stmts.len(), 2);
        assert_eq!(
            stmts[0].subject(),
            &Subject::iri("http://example.org/path/alice")
        );
        assert_eq!(
            stmts[0].predicate(),
            &Predicate::iri("http://example.org/path/name")
        );
        assert_eq!(stmts[1].subject(), &Subject::iri("http://example.org/bob"));
    }

    #[test]
    fn test_empty_iri_resolves_to_base() {
        let input = r#"
            @base <http://example.org/doc> .
            <> <name> "The Document" .
        "#;
        let stmts = parse_turtle(input).unwrap();
        assert_eq!(stmts[0].subject(), &Subject::iri("http://example.org/doc"));
    }

    #[test]
    fn test_relative_iri_without_base_fails() {
        let err = parse_turtle(r#"<alice> <name> "Alice" ."#).unwrap_err();
        assert!(matches!(err, RdfError::IriResolution(_)));
    }

    #[test]
    fn test_default_graph_promotes_triples() {
        let options = ReaderOptions {
            default_graph: Some(Subject::iri("http://example.org/g")),
            ..Default::default()
        };
        let mut reader = Reader::new(Syntax::Turtle, options);
        let stmts = reader
            .parse_to_statements(r#"<http://a> <http://b> "c" ."#)
            .unwrap();
        assert_eq!(stmts[0].graph(), Some(&Subject::iri("http://example.org/g")));
    }

    #[test]
    fn test_ntriples_rejects_directives() {
        let err = parse(Syntax::NTriples, "@prefix ex: <http://example.org/> .").unwrap_err();
        assert!(matches!(err, RdfError::Syntax { .. }));
    }

    #[test]
    fn test_ntriples_rejects_bare_literals() {
        let err = parse(Syntax::NTriples, "<http://a> <http://b> 30 .").unwrap_err();
        assert!(matches!(err, RdfError::Syntax { .. }));
    }

    #[test]
    fn test_ntriples_parses_typed_literal() {
        let input = r#"<http://a> <http://b> "30"^^<http://www.w3.org/2001/XMLSchema#integer> ."#;
        let stmts = parse(Syntax::NTriples, input).unwrap();
        assert_eq!(stmts[0].object(), &Term::integer(30));
        assert_eq!(stmts[0].object().as_literal().unwrap().datatype(), Some(xsd::INTEGER));
    }

    #[test]
    fn test_nquads_graph_label() {
        let input = r#"<http://a> <http://b> "c" <http://g> ."#;
        let stmts = parse(Syntax::NQuads, input).unwrap();
        assert_eq!(stmts[0].graph(), Some(&Subject::iri("http://g")));
    }

    #[test]
    fn test_nquads_without_label_is_triple() {
        let input = r#"<http://a> <http://b> "c" ."#;
        let stmts = parse(Syntax::NQuads, input).unwrap();
        assert_eq!(stmts[0].graph(), None);
    }

    #[test]
    fn test_trig_graph_block() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g1 {
                ex:alice ex:name "Alice" .
                ex:bob ex:name "Bob"
            }
            ex:carol ex:name "Carol" .
        "#;
        let stmts = parse(Syntax::TriG, input).unwrap();
        assert_eq!(stmts.len(), 3);
        assert_eq!(stmts[0].graph(), Some(&Subject::iri("http://example.org/g1")));
        assert_eq!(stmts[1].graph(), Some(&Subject::iri("http://example.org/g1")));
        assert_eq!(stmts[2].graph(), None);
    }

    #[test]
    fn test_trig_graph_keyword() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            GRAPH ex:g1 { ex:a ex:b ex:c . }
            graph ex:g2 { ex:d ex:e ex:f . }
        "#;
        let stmts = parse(Syntax::TriG, input).unwrap();
        assert_eq!(stmts[0].graph(), Some(&Subject::iri("http://example.org/g1")));
        assert_eq!(stmts[1].graph(), Some(&Subject::iri("http://example.org/g2")));
    }

    #[test]
    fn test_trig_default_graph_block() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            { ex:a ex:b ex:c . }
        "#;
        let stmts = parse(Syntax::TriG, input).unwrap();
        assert_eq!(stmts[0].graph(), None);
    }

    #[test]
    fn test_trig_unterminated_block() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:g1 { ex:a ex:b ex:c .
        "#;
        assert!(parse(Syntax::TriG, input).is_err());
    }

    #[test]
    fn test_turtle_rejects_graph_blocks() {
        let input = r#"<http://g> { <http://a> <http://b> <http://c> . }"#;
        assert!(parse_turtle(input).is_err());
    }

    #[test]
    fn test_handler_abort_propagates() {
        struct Abort;
        impl ReadHandler for Abort {
            fn on_statement(&mut self, _: &Statement, _: StatementFlags) -> Status {
                Status::Failure
            }
        }

        let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
        let err = reader
            .parse_str(r#"<http://a> <http://b> "c" ."#, &mut Abort)
            .unwrap_err();
        assert!(matches!(err, RdfError::Engine(StatusError::Failure(_))));
    }

    #[test]
    fn test_released_reader_fails() {
        let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
        assert!(reader.release());
        assert!(!reader.release());

        let err = reader
            .parse_to_statements(r#"<http://a> <http://b> "c" ."#)
            .unwrap_err();
        assert!(matches!(err, RdfError::Engine(StatusError::BadArg(_))));
    }

    #[test]
    fn test_lax_iri_produces_diagnostic() {
        let mut collector = EventCollector::default();
        Reader::new(Syntax::Turtle, ReaderOptions::default())
            .parse_str(
                "<http://example.org/a b> <http://example.org/p> \"v\" .",
                &mut collector,
            )
            .unwrap();
        assert_eq!(collector.diagnostics.len(), 1);
    }

    #[test]
    fn test_strict_rejects_bad_iri() {
        let options = ReaderOptions {
            strict: true,
            ..Default::default()
        };
        let mut reader = Reader::new(Syntax::Turtle, options);
        let err = reader
            .parse_to_statements("<http://example.org/a b> <http://example.org/p> \"v\" .")
            .unwrap_err();
        assert!(matches!(err, RdfError::Syntax { .. }));
    }

    #[test]
    fn test_prefixes_reset_between_parses() {
        let mut reader = Reader::new(Syntax::Turtle, ReaderOptions::default());
        reader
            .parse_to_statements("@prefix ex: <http://example.org/> . ex:a ex:b ex:c .")
            .unwrap();
        let err = reader.parse_to_statements("ex:a ex:b ex:c .").unwrap_err();
        assert!(matches!(err, RdfError::Engine(StatusError::BadCurie(_))));
    }
}
