//! CSS selector parsing.
//! Reference: <https://www.w3.org/TR/selectors-3/>

use crate::{Combinator, ComplexSelector, CompoundSelector, SelectorList, SimpleSelector};
use core::mem::take;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Internal tokenizer token kinds.
pub enum Tok {
    /// A combinator token like child/adjacent/general sibling.
    Combinator(Combinator),
    /// Whitespace that implies a descendant combinator.
    DescendantWS,
    /// A simple selector token (type, class, id, attribute, universal).
    Simple(SimpleSelector),
    /// A pseudo-class or pseudo-element with its raw parenthesised argument.
    Pseudo {
        name: String,
        argument: Option<String>,
    },
}

/// Tokenizer over a selector string.
pub struct SelectorTokenizer<'src> {
    /// Selector bytes.
    input_bytes: &'src [u8],
    /// Current cursor index into `input_bytes`.
    index: usize,
    /// Whether the whitespace just skipped should be reported as a descendant combinator.
    pending_whitespace: bool,
}

impl<'src> SelectorTokenizer<'src> {
    /// Construct a tokenizer from input.
    #[inline]
    pub(crate) const fn new(input: &'src str) -> Self {
        Self {
            input_bytes: input.as_bytes(),
            index: 0,
            pending_whitespace: false,
        }
    }

    /// Return the next selector token, if any.
    #[inline]
    pub(crate) fn next(&mut self) -> Option<Tok> {
        self.skip_whitespace_descendant();
        if self.pending_whitespace {
            self.pending_whitespace = false;
            return Some(Tok::DescendantWS);
        }
        loop {
            let &current = self.input_bytes.get(self.index)?;
            let tok = match current {
                b'*' => {
                    self.index = self.index.saturating_add(1);
                    Tok::Simple(SimpleSelector::Universal)
                }
                b'.' => self.consume_class(),
                b'#' => self.consume_id(),
                b'[' => self.consume_attr(),
                b':' => self.consume_pseudo(),
                b'>' => {
                    self.index = self.index.saturating_add(1);
                    Tok::Combinator(Combinator::Child)
                }
                b'+' => {
                    self.index = self.index.saturating_add(1);
                    Tok::Combinator(Combinator::AdjacentSibling)
                }
                b'~' => {
                    self.index = self.index.saturating_add(1);
                    Tok::Combinator(Combinator::GeneralSibling)
                }
                byte if is_ident_byte(byte) => self.consume_type(),
                byte => {
                    log::debug!("selector: ignoring unsupported character {:?}", char::from(byte));
                    self.index = self.index.saturating_add(1);
                    continue;
                }
            };
            return Some(tok);
        }
    }

    /// Skip whitespace and mark that a descendant combinator should be emitted next.
    #[inline]
    fn skip_whitespace_descendant(&mut self) {
        let start = self.index;
        self.skip_spaces();
        // Trailing whitespace does not imply a combinator.
        if self.index != start && self.index < self.input_bytes.len() {
            self.pending_whitespace = true;
        }
    }

    /// Consume an identifier consisting of ASCII alphanumerics, '-' and '_'.
    #[inline]
    fn consume_ident(&mut self) -> String {
        let start = self.index;
        while self.input_bytes.get(self.index).copied().is_some_and(is_ident_byte) {
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).into_owned()
    }

    /// Parse a type selector identifier into a `SimpleSelector::Type`, lowercased.
    #[inline]
    fn consume_type(&mut self) -> Tok {
        let ident = self.consume_ident().to_ascii_lowercase();
        Tok::Simple(SimpleSelector::Type(ident))
    }

    /// Parse a class selector following '.' into `SimpleSelector::Class`.
    #[inline]
    fn consume_class(&mut self) -> Tok {
        // skip '.'
        self.index = self.index.saturating_add(1);
        let ident = self.consume_ident();
        Tok::Simple(SimpleSelector::Class(ident))
    }

    /// Parse an id selector following '#' into `SimpleSelector::IdSelector`.
    /// Ids are case-sensitive and kept as written.
    #[inline]
    fn consume_id(&mut self) -> Tok {
        // skip '#'
        self.index = self.index.saturating_add(1);
        let ident = self.consume_ident();
        Tok::Simple(SimpleSelector::IdSelector(ident))
    }

    /// Parse an attribute selector, supporting `[name]` and `[name=value]` (quoted or unquoted).
    #[inline]
    fn consume_attr(&mut self) -> Tok {
        // skip '['
        self.index = self.index.saturating_add(1);
        self.skip_spaces();
        let name = self.consume_ident().to_ascii_lowercase();
        self.skip_spaces();
        let value = if self.peek_is(b'=') {
            self.index = self.index.saturating_add(1);
            self.skip_spaces();
            match self.input_bytes.get(self.index) {
                Some(&quote) if quote == b'"' || quote == b'\'' => {
                    self.index = self.index.saturating_add(1);
                    Some(self.consume_quoted_attr_value(quote))
                }
                _ => Some(self.consume_unquoted_attr_value()),
            }
        } else {
            None
        };
        // Anything up to the closing bracket is unsupported syntax (e.g. `~=`).
        while self.input_bytes.get(self.index).is_some_and(|&byte| byte != b']') {
            self.index = self.index.saturating_add(1);
        }
        if self.peek_is(b']') {
            self.index = self.index.saturating_add(1);
        }
        Tok::Simple(match value {
            Some(value) => SimpleSelector::AttrEquals { name, value },
            None => SimpleSelector::AttrExists(name),
        })
    }

    /// Consume an unquoted attribute value until whitespace or a closing bracket.
    #[inline]
    fn consume_unquoted_attr_value(&mut self) -> String {
        let start = self.index;
        while let Some(&byte) = self.input_bytes.get(self.index) {
            if byte.is_ascii_whitespace() || byte == b']' {
                break;
            }
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        String::from_utf8_lossy(slice).into_owned()
    }

    /// Consume a quoted attribute value until the matching quote byte.
    #[inline]
    fn consume_quoted_attr_value(&mut self, quote: u8) -> String {
        let start = self.index;
        while matches!(self.input_bytes.get(self.index), Some(&byte) if byte != quote) {
            self.index = self.index.saturating_add(1);
        }
        let slice = self.input_bytes.get(start..self.index).unwrap_or(&[]);
        let out = String::from_utf8_lossy(slice).into_owned();
        if self.input_bytes.get(self.index).is_some() {
            self.index = self.index.saturating_add(1);
        }
        out
    }

    /// Consume `:name` or `::name` plus an optional balanced `( ... )` argument.
    #[inline]
    fn consume_pseudo(&mut self) -> Tok {
        while self.peek_is(b':') {
            self.index = self.index.saturating_add(1);
        }
        let name = self.consume_ident().to_ascii_lowercase();
        let argument = if self.peek_is(b'(') {
            self.index = self.index.saturating_add(1);
            Some(self.consume_argument())
        } else {
            None
        };
        Tok::Pseudo { name, argument }
    }

    /// Consume up to the `)` closing an already opened parenthesis, skipping
    /// nested parentheses and quoted strings. An unterminated argument runs to
    /// the end of the input.
    #[inline]
    fn consume_argument(&mut self) -> String {
        let start = self.index;
        let end = argument_end(self.input_bytes, start);
        let slice = self.input_bytes.get(start..end).unwrap_or(&[]);
        self.index = end.saturating_add(1).min(self.input_bytes.len());
        String::from_utf8_lossy(slice).into_owned()
    }

    #[inline]
    fn peek_is(&self, expected: u8) -> bool {
        self.input_bytes.get(self.index) == Some(&expected)
    }

    /// Skip ASCII whitespace.
    #[inline]
    fn skip_spaces(&mut self) {
        while matches!(self.input_bytes.get(self.index), Some(byte) if byte.is_ascii_whitespace()) {
            self.index = self.index.saturating_add(1);
        }
    }
}

const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Index of the `)` closing a parenthesis opened just before `start`, or the
/// input length if it never closes.
fn argument_end(bytes: &[u8], start: usize) -> usize {
    let mut depth = 0_usize;
    let mut quote: Option<u8> = None;
    for (index, &byte) in bytes.iter().enumerate().skip(start) {
        match (quote, byte) {
            (Some(open), _) if byte == open => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'(') => depth = depth.saturating_add(1),
            (None, b')') => match depth.checked_sub(1) {
                Some(outer) => depth = outer,
                None => return index,
            },
            (None, _) => {}
        }
    }
    bytes.len()
}

/// Split a selector list on commas that are not nested in parentheses,
/// brackets or quotes.
fn split_top_level(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (index, character) in input.char_indices() {
        match (quote, character) {
            (Some(open), _) if character == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(character),
            (None, '(' | '[') => depth = depth.saturating_add(1),
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(input.get(start..index).unwrap_or_default());
                start = index.saturating_add(1);
            }
            (None, _) => {}
        }
    }
    parts.push(input.get(start..).unwrap_or_default());
    parts
}

/// Parse a selector list from CSS text.
///
/// Empty entries are dropped, and so is every entry using syntax this engine
/// cannot match (pseudo-classes other than `:not`, pseudo-elements), so the
/// rest of the list keeps working.
/// Selectors-3 §3, 4, 5–8, 11
pub fn parse_selector_list(input: &str) -> SelectorList {
    SelectorList {
        selectors: split_top_level(input)
            .into_iter()
            .filter_map(|part| parse_complex_selector(part.trim()))
            .collect(),
    }
}

/// `:not(...)` over a list of compound selectors. Any other pseudo-class, or a
/// negation whose argument holds combinators or unsupported syntax, is `None`.
/// Selectors-3 §6.6.7
fn parse_negation(name: &str, argument: Option<&str>) -> Option<SimpleSelector> {
    if name != "not" {
        return None;
    }
    let compounds = split_top_level(argument?)
        .into_iter()
        .map(|part| {
            parse_complex_selector(part.trim())
                .and_then(|complex| complex.rest.is_empty().then_some(complex.first))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(SimpleSelector::Not(compounds))
}

/// Parse one complex selector (very permissive, minimal error handling).
///
/// Returns `None` when nothing was parsed or when the selector uses a
/// pseudo-class or pseudo-element that cannot be matched.
/// Selectors-3 §11: Combinators; §5–8: simple selectors
pub fn parse_complex_selector(input: &str) -> Option<ComplexSelector> {
    let mut tokens = SelectorTokenizer::new(input);
    let mut first: Option<CompoundSelector> = None;
    let mut rest: Vec<(Combinator, CompoundSelector)> = Vec::new();
    let mut current = CompoundSelector::default();
    // Combinator joining the previous compound to `current`.
    let mut link: Option<Combinator> = None;
    // Combinator seen since `current` was last extended.
    let mut pending: Option<Combinator> = None;

    let mut close = |compound: CompoundSelector, joined_by: Option<Combinator>| {
        if first.is_none() {
            first = Some(compound);
        } else {
            rest.push((joined_by.unwrap_or(Combinator::Descendant), compound));
        }
    };

    while let Some(token) = tokens.next() {
        let simple = match token {
            Tok::Combinator(comb) => {
                pending = Some(comb);
                continue;
            }
            Tok::DescendantWS => {
                if pending.is_none() {
                    pending = Some(Combinator::Descendant);
                }
                continue;
            }
            Tok::Simple(simple) => simple,
            Tok::Pseudo { name, argument } => {
                let Some(negation) = parse_negation(&name, argument.as_deref()) else {
                    log::debug!("selector: dropping {input:?}, unsupported pseudo :{name}");
                    return None;
                };
                negation
            }
        };
        if let Some(comb) = pending.take()
            && !current.is_empty()
        {
            close(take(&mut current), link);
            link = Some(comb);
        }
        current.simples.push(simple);
    }
    if !current.is_empty() {
        close(current, link);
    }

    first.map(|first_compound| ComplexSelector {
        first: first_compound,
        rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_compound(input: &str) -> Option<Vec<SimpleSelector>> {
        parse_complex_selector(input).map(|sel| sel.first.simples)
    }

    #[test]
    fn parses_selector_list_with_whitespace() {
        let list = parse_selector_list(" td , th ");
        assert_eq!(list.selectors.len(), 2);
        assert_eq!(
            list.selectors[1].first.simples,
            vec![SimpleSelector::Type("th".into())]
        );
    }

    #[test]
    fn attribute_without_value_is_presence() {
        assert_eq!(
            first_compound("[data-keyboard-skip]"),
            Some(vec![SimpleSelector::AttrExists("data-keyboard-skip".into())])
        );
    }

    #[test]
    fn attribute_with_quoted_value() {
        assert_eq!(
            first_compound("div[role='gridcell']"),
            Some(vec![
                SimpleSelector::Type("div".into()),
                SimpleSelector::AttrEquals {
                    name: "role".into(),
                    value: "gridcell".into()
                }
            ])
        );
    }

    #[test]
    fn explicit_combinators_survive_surrounding_whitespace() {
        let sel = parse_complex_selector("table > tr td + td");
        assert_eq!(
            sel.as_ref().map(|complex| complex.first.simples.clone()),
            Some(vec![SimpleSelector::Type("table".into())])
        );
        let combinators: Vec<Combinator> = sel
            .iter()
            .flat_map(|complex| complex.rest.iter().map(|pair| pair.0))
            .collect();
        assert_eq!(
            combinators,
            vec![
                Combinator::Child,
                Combinator::Descendant,
                Combinator::AdjacentSibling
            ]
        );
    }

    #[test]
    fn negation_wraps_its_argument() {
        assert_eq!(
            first_compound("button:not([disabled])"),
            Some(vec![
                SimpleSelector::Type("button".into()),
                SimpleSelector::Not(vec![CompoundSelector {
                    simples: vec![SimpleSelector::AttrExists("disabled".into())]
                }])
            ])
        );
    }

    #[test]
    fn negation_list_keeps_its_commas() {
        let list = parse_selector_list("td:not(.a, [role='x,y']), th");
        assert_eq!(list.selectors.len(), 2);
        assert_eq!(
            first_compound("td:not(.a, [role='x,y'])"),
            Some(vec![
                SimpleSelector::Type("td".into()),
                SimpleSelector::Not(vec![
                    CompoundSelector {
                        simples: vec![SimpleSelector::Class("a".into())]
                    },
                    CompoundSelector {
                        simples: vec![SimpleSelector::AttrEquals {
                            name: "role".into(),
                            value: "x,y".into()
                        }]
                    }
                ])
            ])
        );
    }

    #[test]
    fn unsupported_pseudo_classes_drop_the_whole_selector() {
        assert_eq!(first_compound("button:hover"), None);
        assert_eq!(first_compound("button:first-child"), None);
        assert_eq!(first_compound("li::before"), None);
        assert_eq!(first_compound("td:nth-child(2n + 1)"), None);
        assert_eq!(first_compound("td:not(a > b)"), None);
        assert_eq!(first_compound("td:not(:hover)"), None);

        // The argument never leaks into the rest of the list.
        let list = parse_selector_list("td:nth-child(2n+1), th");
        assert_eq!(list.selectors.len(), 1);
        assert_eq!(
            list.selectors[0].first.simples,
            vec![SimpleSelector::Type("th".into())]
        );
    }

    #[test]
    fn unsupported_characters_do_not_stall() {
        assert_eq!(
            first_compound("td$"),
            Some(vec![SimpleSelector::Type("td".into())])
        );
        assert_eq!(first_compound(""), None);
    }
}
