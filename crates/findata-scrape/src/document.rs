//! Parsed HTML documents and XPath evaluation.

use scraper::{ElementRef, Html, Node};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::xpath::{Axis, Expr, NodeTest, Operand, Step, XPath};

/// Classifies a tree node into a [`Hit`], ignoring comments and doctypes.
macro_rules! classify {
    ($node:expr) => {{
        let node = $node;
        match node.value() {
            Node::Element(_) => ElementRef::wrap(node).map(Hit::Element),
            Node::Text(text) => Some(Hit::Text {
                text: &**text,
                parent: node.parent().and_then(ElementRef::wrap),
                node: node_addr(node.value()),
            }),
            _ => None,
        }
    }};
}

/// A node selected while evaluating a path.
#[derive(Clone, Copy)]
enum Hit<'a> {
    Document,
    Element(ElementRef<'a>),
    Text {
        text: &'a str,
        parent: Option<ElementRef<'a>>,
        node: usize,
    },
    Attribute {
        value: &'a str,
        owner: ElementRef<'a>,
        index: usize,
    },
}

/// Address of a tree node, stable for the lifetime of the document.
///
/// Text and attribute values may share buffers across nodes, so identity
/// always goes through the owning tree node.
fn node_addr(node: &Node) -> usize {
    std::ptr::from_ref(node) as usize
}

fn element_addr(el: &ElementRef<'_>) -> usize {
    node_addr((**el).value())
}

impl Hit<'_> {
    /// Identity used to drop duplicate selections.
    fn key(&self) -> (u8, usize, usize) {
        match self {
            Self::Document => (0, 0, 0),
            Self::Element(el) => (1, element_addr(el), 0),
            Self::Text { node, .. } => (2, *node, 0),
            Self::Attribute { owner, index, .. } => (3, element_addr(owner), *index),
        }
    }

    /// Position in document order. Attributes sort after their owner and
    /// before its children.
    fn position(&self, order: &HashMap<usize, usize>) -> (usize, usize) {
        let at = |addr: usize| order.get(&addr).copied().unwrap_or(usize::MAX);
        match self {
            Self::Document => (0, 0),
            Self::Element(el) => (at(element_addr(el)), 0),
            Self::Text { node, .. } => (at(*node), 0),
            Self::Attribute { owner, index, .. } => (at(element_addr(owner)), index + 1),
        }
    }
}

/// A tolerantly parsed HTML document.
///
/// Parsing never fails: malformed markup is repaired the way browsers do.
pub struct HtmlDocument {
    html: Html,
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("parse_errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

impl HtmlDocument {
    /// Parses a document.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!(errors = html.errors.len(), "Recovered from malformed HTML");
        }
        Self { html }
    }

    /// Parses a document from raw bytes, replacing invalid UTF-8.
    #[must_use]
    pub fn parse_bytes(bytes: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(bytes))
    }

    /// Returns the number of markup errors recovered from during parsing.
    #[must_use]
    pub fn parse_errors(&self) -> usize {
        self.html.errors.len()
    }

    /// Returns the string value of every node the path selects, in
    /// selection order, including empty ones.
    #[must_use]
    pub fn select(&self, xpath: &XPath) -> Vec<String> {
        let hits = self.evaluate(xpath);
        let mut out = Vec::with_capacity(hits.len());
        out.extend(hits.iter().map(|hit| self.string_value(hit)));
        out
    }

    /// Returns the text of every selected node whose content is non-empty
    /// after trimming.
    ///
    /// The text itself is returned untrimmed.
    #[must_use]
    pub fn extract_text(&self, xpath: &XPath) -> Vec<String> {
        let hits = self.evaluate(xpath);
        let mut out = Vec::with_capacity(hits.len());
        for hit in &hits {
            let text = self.string_value(hit);
            if !text.trim().is_empty() {
                out.push(text);
            }
        }
        out
    }

    fn evaluate(&self, xpath: &XPath) -> Vec<Hit<'_>> {
        let order = self.document_order();
        let mut context = vec![Hit::Document];
        for step in &xpath.steps {
            context = self.apply_step(&context, step, &order);
            if context.is_empty() {
                break;
            }
        }
        context
    }

    /// Maps every tree node to its pre-order index.
    fn document_order(&self) -> HashMap<usize, usize> {
        self.html
            .tree
            .root()
            .descendants()
            .enumerate()
            .map(|(i, node)| (node_addr(node.value()), i))
            .collect()
    }

    fn apply_step<'a>(
        &'a self,
        context: &[Hit<'a>],
        step: &Step,
        order: &HashMap<usize, usize>,
    ) -> Vec<Hit<'a>> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();

        for hit in context {
            let mut candidates: Vec<Hit<'a>> = self
                .axis(hit, step)
                .into_iter()
                .filter(|c| step.axis == Axis::Attribute || node_test(c, &step.test))
                .collect();

            for predicate in &step.predicates {
                let size = candidates.len();
                candidates = candidates
                    .into_iter()
                    .enumerate()
                    .filter(|(i, c)| self.matches(c, predicate, i + 1, size))
                    .map(|(_, c)| c)
                    .collect();
            }

            for candidate in candidates {
                if seen.insert(candidate.key()) {
                    out.push(candidate);
                }
            }
        }

        out.sort_by_key(|hit| hit.position(order));
        out
    }

    fn axis<'a>(&'a self, hit: &Hit<'a>, step: &Step) -> Vec<Hit<'a>> {
        let root = self.html.root_element();
        match (step.axis, *hit) {
            (Axis::SelfNode, h) => vec![h],

            (Axis::Child, Hit::Document) => vec![Hit::Element(root)],
            (Axis::Child, Hit::Element(el)) => el.children().filter_map(|n| classify!(n)).collect(),

            (Axis::Descendant, Hit::Document) => {
                root.descendants().filter_map(|n| classify!(n)).collect()
            }
            (Axis::Descendant, Hit::Element(el)) => el
                .descendants()
                .skip(1)
                .filter_map(|n| classify!(n))
                .collect(),

            (Axis::DescendantOrSelf, Hit::Document) => std::iter::once(Hit::Document)
                .chain(root.descendants().filter_map(|n| classify!(n)))
                .collect(),
            (Axis::DescendantOrSelf, Hit::Element(el)) => {
                el.descendants().filter_map(|n| classify!(n)).collect()
            }
            (Axis::DescendantOrSelf, h) => vec![h],

            (Axis::Parent, Hit::Element(el)) => match el.parent() {
                Some(parent) => vec![ElementRef::wrap(parent).map_or(Hit::Document, Hit::Element)],
                None => Vec::new(),
            },
            (Axis::Parent, Hit::Text { parent, .. }) => {
                parent.map(Hit::Element).into_iter().collect()
            }
            (Axis::Parent, Hit::Attribute { owner, .. }) => vec![Hit::Element(owner)],

            (Axis::Attribute, Hit::Element(el)) => el
                .value()
                .attrs()
                .enumerate()
                .filter(|(_, (name, _))| match &step.test {
                    NodeTest::Name(want) => name.eq_ignore_ascii_case(want),
                    NodeTest::Any | NodeTest::Node => true,
                    NodeTest::Text => false,
                })
                .map(|(index, (_, value))| Hit::Attribute {
                    value,
                    owner: el,
                    index,
                })
                .collect(),

            _ => Vec::new(),
        }
    }

    fn matches(&self, hit: &Hit<'_>, expr: &Expr, position: usize, size: usize) -> bool {
        match expr {
            Expr::Position(p) => position == *p,
            Expr::Last => position == size,
            Expr::Exists(operand) => !self.operand_values(hit, operand).is_empty(),
            Expr::Equals(operand, lit) => {
                self.operand_values(hit, operand).iter().any(|v| v == lit)
            }
            Expr::NotEquals(operand, lit) => {
                self.operand_values(hit, operand).iter().any(|v| v != lit)
            }
            Expr::Contains(operand, needle) => self
                .operand_values(hit, operand)
                .first()
                .is_some_and(|v| v.contains(needle.as_str())),
            Expr::StartsWith(operand, prefix) => self
                .operand_values(hit, operand)
                .first()
                .is_some_and(|v| v.starts_with(prefix.as_str())),
            Expr::Not(inner) => !self.matches(hit, inner, position, size),
            Expr::And(a, b) => {
                self.matches(hit, a, position, size) && self.matches(hit, b, position, size)
            }
            Expr::Or(a, b) => {
                self.matches(hit, a, position, size) || self.matches(hit, b, position, size)
            }
        }
    }

    fn operand_values(&self, hit: &Hit<'_>, operand: &Operand) -> Vec<String> {
        match (operand, hit) {
            (Operand::Context, h) => vec![self.string_value(h)],
            (Operand::Attribute(name), Hit::Element(el)) => el
                .value()
                .attrs()
                .filter(|(attr, _)| attr.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.to_string())
                .collect(),
            (Operand::Text, Hit::Element(el)) => el
                .children()
                .filter_map(|n| n.value().as_text().map(|t| String::from(&**t)))
                .collect(),
            (Operand::Child(name), Hit::Element(el)) => el
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|child| child.value().name().eq_ignore_ascii_case(name))
                .map(|child| child.text().collect())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn string_value(&self, hit: &Hit<'_>) -> String {
        match hit {
            Hit::Document => self.html.root_element().text().collect(),
            Hit::Element(el) => el.text().collect(),
            Hit::Text { text, .. } => (*text).to_string(),
            Hit::Attribute { value, .. } => (*value).to_string(),
        }
    }
}

fn node_test(hit: &Hit<'_>, test: &NodeTest) -> bool {
    match (test, hit) {
        (NodeTest::Node, _) => true,
        (NodeTest::Any, Hit::Element(_)) => true,
        (NodeTest::Name(name), Hit::Element(el)) => el.value().name().eq_ignore_ascii_case(name),
        (NodeTest::Text, Hit::Text { .. }) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONSTITUENTS: &str = r#"
        <html><body>
          <table class="wikitable sortable">
            <tbody>
              <tr><th>Symbol</th><th>Security</th></tr>
              <tr><td><a href="/a">MMM</a></td><td><a>3M</a></td></tr>
              <tr><td><a href="/b">AOS</a></td><td><a>A. O. Smith</a></td></tr>
              <tr><td><a href="/c"> </a></td><td><a>Blank Co</a></td></tr>
              <tr><td><a href="/d">ABT</a></td><td><a>Abbott</a></td></tr>
            </tbody>
          </table>
        </body></html>
    "#;

    fn xpath(expr: &str) -> XPath {
        expr.parse().unwrap()
    }

    #[test]
    fn test_extract_text_skips_blank_nodes() {
        let doc = HtmlDocument::parse(CONSTITUENTS);
        let tickers = doc.extract_text(&xpath("//table/tbody/tr/td[1]/a/text()"));
        assert_eq!(tickers, vec!["MMM", "AOS", "ABT"]);

        let all = doc.select(&xpath("//table/tbody/tr/td[1]/a/text()"));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_five_matches_two_empty() {
        let doc = HtmlDocument::parse(
            "<ul><li>a</li><li></li><li>b</li><li>  \n </li><li>c</li></ul>",
        );
        let items = doc.extract_text(&xpath("//ul/li"));
        assert_eq!(items, vec!["a", "b", "c"]);
        assert_eq!(doc.select(&xpath("//ul/li")).len(), 5);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let doc = HtmlDocument::parse("<p><b> SAP.DE\n</b></p>");
        assert_eq!(doc.extract_text(&xpath("//b/text()")), vec![" SAP.DE\n"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let doc = HtmlDocument::parse("<p><i>X</i><i>X</i></p>");
        assert_eq!(doc.extract_text(&xpath("//i")), vec!["X", "X"]);
    }

    #[test]
    fn test_positional_predicate_on_tables() {
        let doc = HtmlDocument::parse(
            r#"<div>
                 <table class="wikitable"><tr><td>first</td></tr></table>
                 <table class="infobox"><tr><td>skip</td></tr></table>
                 <table class="wikitable"><tr><td>second</td></tr></table>
               </div>"#,
        );
        let out = doc.extract_text(&xpath(
            "//table[contains(@class, 'wikitable')][2]/tbody/tr/td/text()",
        ));
        assert_eq!(out, vec!["second"]);

        let last = doc.extract_text(&xpath("//table[last()]//td"));
        assert_eq!(last, vec!["second"]);
    }

    #[test]
    fn test_caption_and_attribute_predicates() {
        let doc = HtmlDocument::parse(
            r#"<table>
                 <caption>Other</caption>
                 <tr><th scope="row">IGNORED</th></tr>
               </table>
               <table>
                 <caption>DJIA component companies</caption>
                 <tr><th scope="row"><a>Apple</a></th><td>AAPL</td></tr>
                 <tr><th scope="col">Header</th></tr>
                 <tr><th scope="row"><a>Boeing</a></th><td>BA</td></tr>
               </table>"#,
        );
        let names = doc.extract_text(&xpath(
            "//table[contains(caption, 'DJIA')]/tbody/tr/th[@scope='row']/a/text()",
        ));
        assert_eq!(names, vec!["Apple", "Boeing"]);

        let tickers =
            doc.extract_text(&xpath("//table[contains(caption,'DJIA')]//tr/td[1]"));
        assert_eq!(tickers, vec!["AAPL", "BA"]);
    }

    #[test]
    fn test_attribute_selection() {
        let doc = HtmlDocument::parse(CONSTITUENTS);
        let hrefs = doc.extract_text(&xpath("//td/a/@href"));
        assert_eq!(hrefs, vec!["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_parent_and_boolean_predicates() {
        let doc = HtmlDocument::parse(
            r#"<div id="x"><span class="a">one</span></div>
               <div><span class="b">two</span></div>"#,
        );
        let ids = doc.extract_text(&xpath("//span[@class='a']/../@id"));
        assert_eq!(ids, vec!["x"]);

        let spans = doc.extract_text(&xpath("//span[not(@class='a') or starts-with(., 'o')]"));
        assert_eq!(spans, vec!["one", "two"]);

        let neither = doc.extract_text(&xpath("//span[@class='a' and @class='b']"));
        assert!(neither.is_empty());
    }

    #[test]
    fn test_nested_matches_come_back_in_document_order() {
        let doc = HtmlDocument::parse("<div><div><span>a</span></div><span>b</span></div>");
        assert_eq!(doc.extract_text(&xpath("//div//span")), vec!["a", "b"]);

        let doc = HtmlDocument::parse(
            r#"<ul id="outer"><li>1<ul id="inner"><li>2</li></ul></li><li>3</li></ul>"#,
        );
        assert_eq!(doc.select(&xpath("//ul/li/text()")), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_attributes_of_cloned_elements_are_distinct() {
        let doc = HtmlDocument::parse(r#"<p><b class="highlighted-longvalue">one<p>two</b></p>"#);
        let bold = doc.select(&xpath("//b"));
        let classes = doc.select(&xpath("//b/@class"));
        assert_eq!(classes.len(), bold.len());
        assert!(classes.iter().all(|c| c == "highlighted-longvalue"));
    }

    #[test]
    fn test_malformed_html_is_recovered() {
        let doc = HtmlDocument::parse("<table><tr><td>AAPL<td>MSFT</tr><p>unclosed");
        assert!(doc.parse_errors() > 0);
        assert_eq!(doc.extract_text(&xpath("//td")), vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_parse_bytes_replaces_invalid_utf8() {
        let doc = HtmlDocument::parse_bytes(b"<p>ok\xff</p>");
        assert_eq!(doc.extract_text(&xpath("//p")), vec!["ok\u{fffd}"]);
    }

    #[test]
    fn test_no_matches() {
        let doc = HtmlDocument::parse(CONSTITUENTS);
        assert!(doc.extract_text(&xpath("//ol/li")).is_empty());
    }
}
