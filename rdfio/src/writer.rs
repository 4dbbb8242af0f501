//! Streaming writer: serializes statements and directives to an output.
//!
//! The writer is event-driven and holds only the state needed to close
//! what it has opened: an abbreviation run (subject/predicate carried
//! across statements) and, for TriG, the current graph block. Blank nodes
//! are always written with their labels; the structural flags a reader
//! attaches to statements are advisory here and are not consulted.

use std::collections::BTreeMap;
use std::io::Write;

use rdfio_model::vocab::rdf;
use rdfio_model::{Event, Literal, LiteralValue, Predicate, Statement, StatementFlags, Subject, Term};

use crate::error::{RdfError, Result};
use crate::handle::EngineHandle;
use crate::status::StatusError;
use crate::syntax::Syntax;

/// Buffered output is flushed to the sink in pages of roughly this size
/// when bulk mode is on
const PAGE_SIZE: usize = 4096;

/// Writer configuration
///
/// All options default to off; the default rendition is one plain
/// statement per line.
#[derive(Clone, Debug, Default)]
pub struct WriterOptions {
    /// Group statements sharing a subject (`;`) or subject and predicate
    /// (`,`); only effective for syntaxes that support abbreviation
    pub abbreviate: bool,
    /// Escape all non-ASCII characters in strings and IRIs
    pub ascii: bool,
    /// Expand CURIE terms to full IRIs even where the syntax could carry
    /// them as written
    pub resolved: bool,
    /// Abbreviate full IRIs back to prefixed names where a declared
    /// namespace matches
    pub curied: bool,
    /// Buffer output and flush in pages instead of per event
    pub bulk: bool,
    /// Stripped from the front of blank node labels on output, undoing a
    /// reader's blank prefix
    pub chop_blank_prefix: Option<String>,
}

/// Declared prefix namespaces, ordered by name
#[derive(Debug, Default)]
struct NamespaceTable {
    map: BTreeMap<String, String>,
}

impl NamespaceTable {
    /// Declare a namespace. Redeclaring the same binding is a no-op;
    /// rebinding a name to a different IRI is an ID clash.
    fn declare(&mut self, name: &str, iri: &str) -> std::result::Result<(), StatusError> {
        match self.map.get(name) {
            Some(existing) if existing != iri => Err(StatusError::IdClash(format!(
                "prefix '{name}' is already bound to <{existing}>"
            ))),
            Some(_) => Ok(()),
            None => {
                self.map.insert(name.to_string(), iri.to_string());
                Ok(())
            }
        }
    }

    fn expand(&self, prefix: &str) -> Option<&str> {
        self.map.get(prefix).map(String::as_str)
    }

    /// Find the longest declared namespace that prefixes the IRI and
    /// leaves a local part usable as a prefixed name
    fn abbreviate<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        let mut best: Option<(&str, &str)> = None;
        for (name, namespace) in &self.map {
            if let Some(local) = iri.strip_prefix(namespace.as_str()) {
                if local.contains('/') || local.contains('#') {
                    continue;
                }
                // Shorter local part means a longer namespace match
                let better = match best {
                    Some((_, best_local)) => local.len() < best_local.len(),
                    None => true,
                };
                if better {
                    best = Some((name, local));
                }
            }
        }
        best
    }
}

/// Serializer state behind the resource handle
#[derive(Debug, Default)]
struct SerializerCore {
    buf: String,
    /// Base IRI declared through `write_base`, used by the `resolved` option
    base: Option<String>,
    /// Open abbreviation run: last written subject and predicate
    run: Option<(Subject, Predicate)>,
    /// Open TriG graph block label (None also while outside any block)
    current_graph: Option<Subject>,
}

/// Streaming serializer for one of the supported syntaxes
pub struct Writer<W: Write> {
    out: Option<W>,
    syntax: Syntax,
    options: WriterOptions,
    core: EngineHandle<SerializerCore>,
    namespaces: EngineHandle<NamespaceTable>,
    finished: bool,
}

impl<W: Write> Writer<W> {
    /// Create a writer over an output sink
    pub fn new(out: W, syntax: Syntax, options: WriterOptions) -> Self {
        Self {
            out: Some(out),
            syntax,
            options,
            core: EngineHandle::new(SerializerCore::default()),
            namespaces: EngineHandle::new(NamespaceTable::default()),
            finished: false,
        }
    }

    /// The syntax this writer emits
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Declare a prefix without emitting a directive
    ///
    /// Works for every syntax; the binding feeds CURIE expansion and,
    /// with the `curied` option, IRI abbreviation. Rebinding a name to a
    /// different IRI is an ID clash.
    pub fn declare_prefix(&mut self, name: &str, iri: &str) -> Result<()> {
        let namespaces = self
            .namespaces
            .get_mut()
            .ok_or_else(released_error)?;
        namespaces.declare(name, iri)?;
        Ok(())
    }

    /// Write one event
    pub fn write_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Base { iri } => self.write_base(iri),
            Event::Prefix { name, iri } => self.write_prefix(name, iri),
            Event::Statement { statement, flags } => self.write_statement_flags(statement, *flags),
            // Blank nodes are written labeled, so there is no bracket to
            // close; an open abbreviation run still ends here
            Event::EndAnonymous => {
                let core = self.core.get_mut().ok_or_else(released_error)?;
                close_run(core);
                self.flush_page(false)
            }
        }
    }

    /// Write one statement
    pub fn write_statement(&mut self, statement: &Statement) -> Result<()> {
        self.write_statement_flags(statement, StatementFlags::default())
    }

    /// Emit a base directive
    ///
    /// Fails without touching the output for syntaxes that have no
    /// directives.
    pub fn write_base(&mut self, iri: &str) -> Result<()> {
        if !self.syntax.supports_directives() {
            return Err(RdfError::unsupported(format!(
                "directives are not supported in {}",
                self.syntax
            )));
        }

        let ascii = self.options.ascii;
        let core = self.core.get_mut().ok_or_else(released_error)?;
        close_run(core);
        close_block(core);

        core.buf.push_str("@base ");
        push_iri(&mut core.buf, iri, ascii);
        core.buf.push_str(" .\n");
        core.base = Some(iri.to_string());
        self.flush_page(false)
    }

    /// Emit a prefix directive and record the binding
    ///
    /// Fails without touching the output for syntaxes that have no
    /// directives, or when the name is already bound to a different IRI.
    pub fn write_prefix(&mut self, name: &str, iri: &str) -> Result<()> {
        if !self.syntax.supports_directives() {
            return Err(RdfError::unsupported(format!(
                "directives are not supported in {}",
                self.syntax
            )));
        }

        // Clash detection runs before anything is written
        let namespaces = self
            .namespaces
            .get_mut()
            .ok_or_else(released_error)?;
        namespaces.declare(name, iri)?;

        let ascii = self.options.ascii;
        let core = self.core.get_mut().ok_or_else(released_error)?;
        close_run(core);
        close_block(core);

        core.buf.push_str("@prefix ");
        core.buf.push_str(name);
        core.buf.push_str(": ");
        push_iri(&mut core.buf, iri, ascii);
        core.buf.push_str(" .\n");
        self.flush_page(false)
    }

    fn write_statement_flags(&mut self, statement: &Statement, _flags: StatementFlags) -> Result<()> {
        let base = self
            .core
            .get()
            .ok_or_else(released_error)?
            .base
            .clone();
        let renderer = Renderer {
            syntax: self.syntax,
            options: &self.options,
            namespaces: self.namespaces.get().ok_or_else(released_error)?,
            base,
        };
        let core = self.core.get_mut().ok_or_else(released_error)?;

        match self.syntax {
            Syntax::NTriples | Syntax::Turtle => {
                if statement.graph().is_some() {
                    return Err(RdfError::unsupported(format!(
                        "named graphs are not supported in {}",
                        self.syntax
                    )));
                }
            }
            Syntax::NQuads | Syntax::TriG => {}
        }

        // Each statement renders to a scratch fragment first so a
        // rendering failure leaves the output untouched
        match self.syntax {
            Syntax::NTriples | Syntax::NQuads => {
                let mut line = String::new();
                renderer.subject(&mut line, statement.subject())?;
                line.push(' ');
                renderer.predicate(&mut line, statement.predicate())?;
                line.push(' ');
                renderer.term(&mut line, statement.object())?;
                if let Some(graph) = statement.graph() {
                    line.push(' ');
                    renderer.subject(&mut line, graph)?;
                }
                line.push_str(" .\n");
                core.buf.push_str(&line);
            }
            Syntax::Turtle | Syntax::TriG => {
                if self.syntax == Syntax::TriG {
                    sync_graph(core, &renderer, statement.graph())?;
                }
                let indent = if core.current_graph.is_some() { "    " } else { "" };

                if self.options.abbreviate {
                    let mut frag = String::new();
                    match &core.run {
                        Some((s, p)) if s == statement.subject() && p == statement.predicate() => {
                            frag.push_str(", ");
                            renderer.term(&mut frag, statement.object())?;
                        }
                        Some((s, _)) if s == statement.subject() => {
                            frag.push_str(" ;\n");
                            frag.push_str(indent);
                            frag.push_str("    ");
                            renderer.predicate(&mut frag, statement.predicate())?;
                            frag.push(' ');
                            renderer.term(&mut frag, statement.object())?;
                        }
                        _ => {
                            frag.push_str(indent);
                            renderer.subject(&mut frag, statement.subject())?;
                            frag.push(' ');
                            renderer.predicate(&mut frag, statement.predicate())?;
                            frag.push(' ');
                            renderer.term(&mut frag, statement.object())?;
                            close_run(core);
                        }
                    }
                    core.buf.push_str(&frag);
                    core.run = Some((statement.subject().clone(), statement.predicate().clone()));
                } else {
                    let mut line = String::from(indent);
                    renderer.subject(&mut line, statement.subject())?;
                    line.push(' ');
                    renderer.predicate(&mut line, statement.predicate())?;
                    line.push(' ');
                    renderer.term(&mut line, statement.object())?;
                    line.push_str(" .\n");
                    core.buf.push_str(&line);
                }
            }
        }

        self.flush_page(false)
    }

    /// Close any open run or block and flush everything to the sink
    ///
    /// Idempotent; further statements after a finish continue normally.
    pub fn finish(&mut self) -> Result<()> {
        let core = self.core.get_mut().ok_or_else(released_error)?;
        close_run(core);
        close_block(core);
        self.flush_page(true)?;
        if let Some(out) = self.out.as_mut() {
            out.flush()?;
        }
        self.finished = true;
        Ok(())
    }

    /// Release the writer, flushing best-effort
    ///
    /// Idempotent; returns true if this call performed the release. A
    /// released writer fails subsequent writes with a bad-argument error.
    pub fn release(&mut self) -> bool {
        if !self.finished {
            // Flush failures cannot surface here; call finish() first
            // when they matter
            let _ = self.finish();
        }
        let released = self.core.release();
        self.namespaces.release();
        released
    }

    /// Consume the writer and hand back the sink
    pub fn into_inner(mut self) -> W {
        self.release();
        // The sink is only ever taken here, and `self` is consumed
        self.out.take().expect("output sink present")
    }

    fn flush_page(&mut self, force: bool) -> Result<()> {
        let bulk = self.options.bulk;
        if let (Some(core), Some(out)) = (self.core.get_mut(), self.out.as_mut()) {
            if force || !bulk || core.buf.len() >= PAGE_SIZE {
                out.write_all(core.buf.as_bytes())?;
                core.buf.clear();
            }
        }
        Ok(())
    }
}

impl<W: Write> Drop for Writer<W> {
    fn drop(&mut self) {
        self.release();
    }
}

fn released_error() -> RdfError {
    StatusError::BadArg("writer has been released".to_string()).into()
}

fn close_run(core: &mut SerializerCore) {
    if core.run.take().is_some() {
        core.buf.push_str(" .\n");
    }
}

fn close_block(core: &mut SerializerCore) {
    if core.current_graph.take().is_some() {
        core.buf.push_str("}\n");
    }
}

/// Move to the graph of the next statement, closing and opening TriG
/// blocks as needed
fn sync_graph(core: &mut SerializerCore, renderer: &Renderer<'_>, graph: Option<&Subject>) -> Result<()> {
    if core.current_graph.as_ref() == graph {
        return Ok(());
    }

    let mut opening = String::new();
    if let Some(label) = graph {
        renderer.subject(&mut opening, label)?;
        opening.push_str(" {\n");
    }

    close_run(core);
    close_block(core);
    core.buf.push_str(&opening);
    core.current_graph = graph.cloned();
    Ok(())
}

// =============================================================================
// Term rendering
// =============================================================================

struct Renderer<'a> {
    syntax: Syntax,
    options: &'a WriterOptions,
    namespaces: &'a NamespaceTable,
    /// Base IRI for the `resolved` option
    base: Option<String>,
}

impl Renderer<'_> {
    fn subject(&self, out: &mut String, subject: &Subject) -> Result<()> {
        match subject {
            Subject::Iri(iri) => self.iri(out, iri),
            Subject::Curie { prefix, name } => self.curie(out, prefix, name),
            Subject::Blank(id) => {
                self.blank(out, id.as_str());
                Ok(())
            }
        }
    }

    fn predicate(&self, out: &mut String, predicate: &Predicate) -> Result<()> {
        match predicate {
            Predicate::Iri(iri) => {
                if self.syntax.supports_abbreviation() && &**iri == rdf::TYPE {
                    out.push('a');
                    Ok(())
                } else {
                    self.iri(out, iri)
                }
            }
            Predicate::Curie { prefix, name } => self.curie(out, prefix, name),
        }
    }

    fn term(&self, out: &mut String, term: &Term) -> Result<()> {
        match term {
            Term::Iri(iri) => self.iri(out, iri),
            Term::Curie { prefix, name } => self.curie(out, prefix, name),
            Term::Blank(id) => {
                self.blank(out, id.as_str());
                Ok(())
            }
            Term::Literal(literal) => self.literal(out, literal),
        }
    }

    fn iri(&self, out: &mut String, iri: &str) -> Result<()> {
        let owned;
        let iri = if self.options.resolved && !crate::iri::is_absolute(iri) {
            owned = crate::iri::resolve(self.base.as_deref(), iri)?;
            owned.as_str()
        } else {
            iri
        };
        if self.options.curied && self.syntax.supports_abbreviation() {
            if let Some((name, local)) = self.namespaces.abbreviate(iri) {
                out.push_str(name);
                out.push(':');
                out.push_str(local);
                return Ok(());
            }
        }
        push_iri(out, iri, self.options.ascii);
        Ok(())
    }

    fn curie(&self, out: &mut String, prefix: &str, name: &str) -> Result<()> {
        // Line syntaxes carry no prefixes, so expansion is mandatory there
        if self.syntax.supports_abbreviation() && !self.options.resolved {
            out.push_str(prefix);
            out.push(':');
            out.push_str(name);
            return Ok(());
        }

        match self.namespaces.expand(prefix) {
            Some(namespace) => {
                let full = format!("{namespace}{name}");
                push_iri(out, &full, self.options.ascii);
                Ok(())
            }
            None => Err(StatusError::BadCurie(format!("prefix '{prefix}' is not declared")).into()),
        }
    }

    fn blank(&self, out: &mut String, label: &str) {
        let label = match &self.options.chop_blank_prefix {
            Some(chop) => label.strip_prefix(chop.as_str()).unwrap_or(label),
            None => label,
        };
        out.push_str("_:");
        out.push_str(label);
    }

    fn literal(&self, out: &mut String, literal: &Literal) -> Result<()> {
        if let Some(lang) = literal.language() {
            self.quoted(out, &literal.value().lexical());
            out.push('@');
            out.push_str(lang);
            return Ok(());
        }

        let value = literal.value();
        if self.syntax.supports_abbreviation() {
            match value {
                LiteralValue::String(s) => {
                    self.quoted(out, s);
                    return Ok(());
                }
                LiteralValue::Boolean(_) | LiteralValue::Integer(_) | LiteralValue::Decimal(_) => {
                    out.push_str(&value.lexical());
                    return Ok(());
                }
                LiteralValue::Double(d) if d.is_finite() => {
                    out.push_str(&value.lexical());
                    return Ok(());
                }
                // INF and NaN have no bare form; fall through to the
                // quoted rendition
                LiteralValue::Double(_) => {}
            }
        }

        self.quoted(out, &value.lexical());
        if let Some(datatype) = value.datatype() {
            out.push_str("^^");
            self.iri(out, datatype)?;
        }
        Ok(())
    }

    fn quoted(&self, out: &mut String, s: &str) {
        out.push('"');
        for c in s.chars() {
            push_string_char(out, c, self.options.ascii);
        }
        out.push('"');
    }
}

fn push_iri(out: &mut String, iri: &str, ascii: bool) {
    out.push('<');
    for c in iri.chars() {
        if ascii && !c.is_ascii() {
            push_unicode_escape(out, c);
        } else {
            out.push(c);
        }
    }
    out.push('>');
}

fn push_string_char(out: &mut String, c: char, ascii: bool) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if ascii && !c.is_ascii() => push_unicode_escape(out, c),
        c => out.push(c),
    }
}

fn push_unicode_escape(out: &mut String, c: char) {
    let cp = c as u32;
    if cp <= 0xFFFF {
        out.push_str(&format!("\\u{cp:04X}"));
    } else {
        out.push_str(&format!("\\U{cp:08X}"));
    }
}
