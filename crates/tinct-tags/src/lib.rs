//! Angle-bracket tag scanner for terminal styling.
//!
//! This crate handles `<tag>content</tag>` style markup, designed for
//! terminal output styling. It pairs tags with a per-name nesting stack,
//! so `<info><info>x</info></info>` closes where a reader expects, and it
//! leaves anything that does not pair as literal text.
//!
//! The scanner knows nothing about colours. Tag names are resolved through a
//! [`StyleResolver`], which returns the SGR parameter string for a name (or
//! `None` when the name is unknown).
//!
//! # Example
//!
//! ```rust
//! use tinct_tags::{strip_tags, TagParser};
//!
//! let parser = TagParser::new(|name: &str| match name {
//!     "info" => Some("32".to_string()),
//!     _ => None,
//! });
//!
//! // Known tags become escape sequences
//! assert_eq!(parser.process("<info>ok</info>"), "\x1b[32mok\x1b[0m");
//!
//! // Unknown tags stay as written
//! assert_eq!(parser.process("<what>ok</what>"), "<what>ok</what>");
//!
//! // Stripping ignores names entirely
//! assert_eq!(strip_tags("<info>ok</info> and <what>x</what>"), "ok and x");
//! ```
//!
//! # Tag Name Syntax
//!
//! - Starts with an ASCII letter
//! - Followed by ASCII letters, `=`, `;` or `,`
//! - Case-sensitive
//!
//! The extra punctuation lets a tag carry an inline style such as
//! `<fg=red;options=bold,underscore>`.

use std::collections::HashMap;
use std::fmt;

/// The escape character that starts every control sequence.
pub const ESC: char = '\x1b';

/// Resets all colours and attributes.
pub const RESET: &str = "\x1b[0m";

/// Builds a Select Graphic Rendition sequence from a parameter string.
///
/// ```rust
/// assert_eq!(tinct_tags::sgr("1;31"), "\x1b[1;31m");
/// ```
pub fn sgr(params: &str) -> String {
    format!("{ESC}[{params}m")
}

/// Looks up the SGR parameters for a tag name.
///
/// `Some("")` means the name is known but carries no styling: no escape is
/// emitted and the markers stay as written. `None` means the name is unknown.
pub trait StyleResolver {
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> StyleResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Configuration for handling well-formed tags the resolver does not know.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnknownTagBehavior {
    /// Keep the tags exactly as written. Their content is still processed.
    #[default]
    Passthrough,

    /// Strip unknown tags (keep content, remove tag markers).
    Strip,

    /// Strip the markers and prefix content with an indicator (e.g., "(!?)").
    Indicate(String),
}

/// A stack-based tag parser that turns markup into ANSI escapes.
///
/// The parser processes `<tag>content</tag>` pairs, asking its
/// [`StyleResolver`] for each tag's parameters.
#[derive(Debug, Clone)]
pub struct TagParser<R> {
    resolver: R,
    unknown_behavior: UnknownTagBehavior,
}

/// A styled tag waiting for its closing marker.
struct Frame {
    open: usize,
    params: String,
}

/// What became of a paired opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opened {
    /// Not reached yet.
    Pending,
    /// Escape emitted, still on the stack.
    Styled,
    /// Escape emitted and reset already written.
    Closed,
    /// Known but unstyled; markers kept as written.
    Plain,
    /// Rejected by the resolver.
    Unknown,
}

impl<R: StyleResolver> TagParser<R> {
    /// Creates a new parser that resolves tag names with `resolver`.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            unknown_behavior: UnknownTagBehavior::default(),
        }
    }

    /// Sets the behavior for unknown tags.
    pub fn unknown_behavior(mut self, behavior: UnknownTagBehavior) -> Self {
        self.unknown_behavior = behavior;
        self
    }

    /// Parses the input and replaces every paired tag with escape sequences.
    ///
    /// # Arguments
    ///
    /// * `input` - The input string containing `<tag>...</tag>` markup
    ///
    /// # Returns
    ///
    /// The transformed string. Unpaired markers are left as literal text.
    pub fn process(&self, input: &str) -> String {
        let tokens: Vec<Token<'_>> = Tokenizer::new(input).map(|(_, token)| token).collect();
        let partners = pair_tags(&tokens);
        let mut opened = vec![Opened::Pending; tokens.len()];
        let mut output = String::with_capacity(input.len() + 16);
        let mut stack: Vec<Frame> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Text(text) => output.push_str(text),
                Token::OpenTag(tag) => {
                    if partners[i].is_none() {
                        push_literal_open(&mut output, tag);
                        continue;
                    }
                    opened[i] = match self.resolver.resolve(tag) {
                        Some(params) if params.is_empty() => {
                            push_literal_open(&mut output, tag);
                            Opened::Plain
                        }
                        Some(params) => {
                            output.push_str(&sgr(&params));
                            stack.push(Frame { open: i, params });
                            Opened::Styled
                        }
                        None => {
                            self.emit_unknown_open(&mut output, tag);
                            Opened::Unknown
                        }
                    };
                }
                Token::CloseTag(tag) => {
                    let Some(open) = partners[i] else {
                        // Orphan close tag - treat as literal text
                        push_literal_close(&mut output, tag);
                        continue;
                    };
                    let state = opened[open];
                    match state {
                        Opened::Plain => push_literal_close(&mut output, tag),
                        Opened::Unknown => {
                            if self.unknown_behavior == UnknownTagBehavior::Passthrough {
                                push_literal_close(&mut output, tag);
                            }
                        }
                        Opened::Styled => {
                            // Close everything styled after this tag, then the tag itself
                            while let Some(frame) = stack.pop() {
                                opened[frame.open] = Opened::Closed;
                                emit_close(&mut output, &stack);
                                if frame.open == open {
                                    break;
                                }
                            }
                        }
                        // Already reset when an enclosing tag closed
                        Opened::Closed | Opened::Pending => {}
                    }
                }
            }
        }

        output
    }

    fn emit_unknown_open(&self, output: &mut String, tag: &str) {
        match self.unknown_behavior {
            UnknownTagBehavior::Passthrough => push_literal_open(output, tag),
            UnknownTagBehavior::Strip => {}
            UnknownTagBehavior::Indicate(ref indicator) => {
                output.push_str(indicator);
                output.push(' ');
            }
        }
    }
}

/// Resets, then re-applies the styles still open in `remaining`.
fn emit_close(output: &mut String, remaining: &[Frame]) {
    output.push_str(RESET);
    let active = remaining
        .iter()
        .map(|frame| frame.params.as_str())
        .collect::<Vec<_>>()
        .join(";");
    if !active.is_empty() {
        output.push_str(&sgr(&active));
    }
}

/// Pairs every opening tag with its closing tag in one pass.
///
/// Depth is counted per name, so a nested tag with the same name consumes
/// its own closing marker first. Unpaired tags map to `None`.
fn pair_tags(tokens: &[Token<'_>]) -> Vec<Option<usize>> {
    let mut partners = vec![None; tokens.len()];
    let mut open: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, token) in tokens.iter().enumerate() {
        match *token {
            Token::OpenTag(name) => open.entry(name).or_default().push(i),
            Token::CloseTag(name) => {
                if let Some(j) = open.get_mut(name).and_then(Vec::pop) {
                    partners[i] = Some(j);
                    partners[j] = Some(i);
                }
            }
            Token::Text(_) => {}
        }
    }
    partners
}

fn push_literal_open(output: &mut String, tag: &str) {
    output.push('<');
    output.push_str(tag);
    output.push('>');
}

fn push_literal_close(output: &mut String, tag: &str) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

/// Removes every recognizable opening and closing marker from `input`.
///
/// Pairing and names are ignored: `<anything>` and `</anything>` go away as
/// long as `anything` is a valid tag name. Removal is repeated until nothing
/// changes, so the result never contains a marker.
pub fn strip_tags(input: &str) -> String {
    let mut current = strip_once(input);
    loop {
        let next = strip_once(&current);
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn strip_once(input: &str) -> String {
    Tokenizer::new(input)
        .filter_map(|(_, token)| match token {
            Token::Text(text) => Some(text),
            Token::OpenTag(_) | Token::CloseTag(_) => None,
        })
        .collect()
}

/// Returns the names of all opening tags in `input`, in order of appearance.
pub fn tag_names(input: &str) -> impl Iterator<Item = &str> {
    Tokenizer::new(input).filter_map(|(_, token)| match token {
        Token::OpenTag(name) => Some(name),
        _ => None,
    })
}

/// Checks if a string is a valid tag name.
pub fn is_valid_tag_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(is_tag_char),
        _ => false,
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '=' | ';' | ',')
}

/// Which side of a tag pair an [`UnknownTagError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTagKind {
    /// `<name>`
    Open,
    /// `</name>`
    Close,
}

/// A tag whose name was rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagError {
    /// The tag name as written.
    pub name: String,
    /// Opening or closing marker.
    pub kind: UnknownTagKind,
    /// Byte offset of the `<` in the input.
    pub offset: usize,
}

impl fmt::Display for UnknownTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            UnknownTagKind::Open => format!("<{}>", self.name),
            UnknownTagKind::Close => format!("</{}>", self.name),
        };
        write!(f, "unknown tag {} at offset {}", marker, self.offset)
    }
}

impl std::error::Error for UnknownTagError {}

/// All unknown tags found in one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownTagErrors {
    errors: Vec<UnknownTagError>,
}

impl UnknownTagErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnknownTagError> {
        self.errors.iter()
    }

    /// Distinct tag names, in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !names.contains(&error.name.as_str()) {
                names.push(&error.name);
            }
        }
        names
    }
}

impl fmt::Display for UnknownTagErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "found {} unknown tag(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for UnknownTagErrors {}

impl IntoIterator for UnknownTagErrors {
    type Item = UnknownTagError;
    type IntoIter = std::vec::IntoIter<UnknownTagError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Reports every opening or closing tag whose name `is_known` rejects.
///
/// Pairing is not checked; a stray `</name>` is reported like any other tag.
pub fn validate<F>(input: &str, is_known: F) -> Result<(), UnknownTagErrors>
where
    F: Fn(&str) -> bool,
{
    let errors: Vec<UnknownTagError> = Tokenizer::new(input)
        .filter_map(|(offset, token)| {
            let (name, kind) = match token {
                Token::OpenTag(name) => (name, UnknownTagKind::Open),
                Token::CloseTag(name) => (name, UnknownTagKind::Close),
                Token::Text(_) => return None,
            };
            (!is_known(name)).then(|| UnknownTagError {
                name: name.to_string(),
                kind,
                offset,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(UnknownTagErrors { errors })
    }
}

/// Token types produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// Plain text content, including any `<` that does not start a tag.
    Text(&'a str),
    /// Opening tag: `<tagname>`
    OpenTag(&'a str),
    /// Closing tag: `</tagname>`
    CloseTag(&'a str),
}

/// Tokenizer for angle-bracket tags. Yields each token with its byte offset.
struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Scans a tag at the start of `s`, which must begin with `<`.
    ///
    /// Returns the token and the number of bytes it spans.
    fn scan_tag(s: &'a str) -> Option<(Token<'a>, usize)> {
        let (closing, start) = if s[1..].starts_with('/') {
            (true, 2)
        } else {
            (false, 1)
        };
        let body = &s[start..];
        let len = body.find(|c: char| !is_tag_char(c)).unwrap_or(body.len());
        let name = &body[..len];
        if !body[len..].starts_with('>') || !is_valid_tag_name(name) {
            return None;
        }
        let token = if closing {
            Token::CloseTag(name)
        } else {
            Token::OpenTag(name)
        };
        Some((token, start + len + 1))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let start = self.pos;
        let remaining = &self.input[start..];

        match remaining.find('<') {
            // No more brackets - rest is text
            None => {
                self.pos = self.input.len();
                Some((start, Token::Text(remaining)))
            }
            // There's text before the bracket
            Some(bracket_pos) if bracket_pos > 0 => {
                self.pos += bracket_pos;
                Some((start, Token::Text(&remaining[..bracket_pos])))
            }
            Some(_) => match Self::scan_tag(remaining) {
                Some((token, consumed)) => {
                    self.pos += consumed;
                    Some((start, token))
                }
                None => {
                    // A lone '<' is text
                    self.pos += 1;
                    Some((start, Token::Text(&remaining[..1])))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_styles() -> HashMap<String, String> {
        let mut styles = HashMap::new();
        styles.insert("bold".to_string(), "1".to_string());
        styles.insert("red".to_string(), "31".to_string());
        styles.insert("faint".to_string(), "2".to_string());
        styles.insert("title".to_string(), "1;36".to_string());
        styles.insert("plain".to_string(), String::new());
        styles
    }

    fn parser() -> TagParser<impl Fn(&str) -> Option<String>> {
        let styles = test_styles();
        TagParser::new(move |name: &str| styles.get(name).cloned())
    }

    // ==================== Apply Tests ====================

    mod apply {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(parser().process("hello world"), "hello world");
        }

        #[test]
        fn single_tag() {
            assert_eq!(parser().process("<bold>hello</bold>"), "\x1b[1mhello\x1b[0m");
        }

        #[test]
        fn compound_params() {
            assert_eq!(
                parser().process("<title>Report</title>"),
                "\x1b[1;36mReport\x1b[0m"
            );
        }

        #[test]
        fn text_around_tags() {
            assert_eq!(
                parser().process("before <red>middle</red> after"),
                "before \x1b[31mmiddle\x1b[0m after"
            );
        }

        #[test]
        fn adjacent_tags() {
            assert_eq!(
                parser().process("<bold>a</bold><red>b</red>"),
                "\x1b[1ma\x1b[0m\x1b[31mb\x1b[0m"
            );
        }

        #[test]
        fn nested_tags_restore_outer_style() {
            assert_eq!(
                parser().process("<red>a <bold>b</bold> c</red>"),
                "\x1b[31ma \x1b[1mb\x1b[0m\x1b[31m c\x1b[0m"
            );
        }

        #[test]
        fn same_name_nesting_pairs_by_depth() {
            assert_eq!(
                parser().process("<red><red>x</red>y</red>"),
                "\x1b[31m\x1b[31mx\x1b[0m\x1b[31my\x1b[0m"
            );
        }

        #[test]
        fn empty_params_keep_markers() {
            assert_eq!(parser().process("<plain>quiet</plain>"), "<plain>quiet</plain>");
        }

        #[test]
        fn empty_params_inside_styled_tag() {
            assert_eq!(
                parser().process("<bold><plain>a</plain></bold>"),
                "\x1b[1m<plain>a</plain>\x1b[0m"
            );
        }

        #[test]
        fn empty_content_keeps_escapes() {
            assert_eq!(parser().process("<bold></bold>"), "\x1b[1m\x1b[0m");
        }

        #[test]
        fn multiline_content() {
            assert_eq!(
                parser().process("<bold>line1\nline2</bold>"),
                "\x1b[1mline1\nline2\x1b[0m"
            );
        }
    }

    // ==================== Unknown Tag Tests ====================

    mod unknown {
        use super::*;

        #[test]
        fn passthrough_by_default() {
            assert_eq!(
                parser().process("<unknown>text</unknown>"),
                "<unknown>text</unknown>"
            );
        }

        #[test]
        fn passthrough_still_styles_inner_tags() {
            assert_eq!(
                parser().process("<unknown><bold>x</bold></unknown>"),
                "<unknown>\x1b[1mx\x1b[0m</unknown>"
            );
        }

        #[test]
        fn strip_with_config() {
            let parser = parser().unknown_behavior(UnknownTagBehavior::Strip);
            assert_eq!(parser.process("<unknown>text</unknown>"), "text");
        }

        #[test]
        fn indicate_with_config() {
            let parser =
                parser().unknown_behavior(UnknownTagBehavior::Indicate("(!?)".to_string()));
            assert_eq!(parser.process("<unknown>text</unknown>"), "(!?) text");
        }
    }

    // ==================== Edge Cases ====================

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_input() {
            assert_eq!(parser().process(""), "");
        }

        #[test]
        fn unclosed_tag_passthrough() {
            assert_eq!(parser().process("<bold>hello"), "<bold>hello");
        }

        #[test]
        fn orphan_close_tag_passthrough() {
            assert_eq!(parser().process("hello</bold>"), "hello</bold>");
        }

        #[test]
        fn mismatched_close_is_literal() {
            assert_eq!(
                parser().process("<bold>hello</red></bold>"),
                "\x1b[1mhello</red>\x1b[0m"
            );
        }

        #[test]
        fn overlapping_tags_auto_close() {
            // <red> opened inside <bold>; closing bold closes red first
            let result = parser().process("<bold><red>hello</bold></red>");
            assert_eq!(result, "\x1b[1m\x1b[31mhello\x1b[0m\x1b[1m\x1b[0m");
        }

        #[test]
        fn unknown_tag_crossing_styled_close() {
            let result = parser().process("<bold>x<unk>y</bold>z</unk>");
            assert_eq!(result, "\x1b[1mx<unk>y\x1b[0mz</unk>");
            assert_eq!(result.matches("</unk>").count(), 1);
        }

        #[test]
        fn unknown_tag_crossing_styled_close_stripped() {
            let parser = parser().unknown_behavior(UnknownTagBehavior::Strip);
            assert_eq!(
                parser.process("<bold>x<unk>y</bold>z</unk>"),
                "\x1b[1mxy\x1b[0mz"
            );
        }

        #[test]
        fn plain_tag_crossing_styled_close() {
            assert_eq!(
                parser().process("<red>a<plain>b</red>c</plain>"),
                "\x1b[31ma<plain>b\x1b[0mc</plain>"
            );
        }

        #[test]
        fn many_unclosed_tags() {
            let input = "<bold>".repeat(50_000);
            assert_eq!(parser().process(&input), input);
        }

        #[test]
        fn pairing_counts_depth_per_name() {
            let tokens: Vec<Token<'_>> = Tokenizer::new("<a><b><a></a></b></a></a>")
                .map(|(_, token)| token)
                .collect();
            assert_eq!(
                pair_tags(&tokens),
                vec![Some(5), Some(4), Some(3), Some(2), Some(1), Some(0), None]
            );
        }

        #[test]
        fn comparison_operators_are_text() {
            assert_eq!(parser().process("a < b > c"), "a < b > c");
            assert_eq!(parser().process("x <= y"), "x <= y");
        }

        #[test]
        fn invalid_tag_syntax_passthrough() {
            assert_eq!(parser().process("<123>text</123>"), "<123>text</123>");
            assert_eq!(parser().process("<-bad>text</-bad>"), "<-bad>text</-bad>");
            assert_eq!(parser().process("<my tag>x</my tag>"), "<my tag>x</my tag>");
        }

        #[test]
        fn unclosed_bracket() {
            assert_eq!(parser().process("hello <bold world"), "hello <bold world");
        }

        #[test]
        fn non_ascii_content() {
            assert_eq!(
                parser().process("<red>héllo → wörld</red>"),
                "\x1b[31mhéllo → wörld\x1b[0m"
            );
        }
    }

    // ==================== Strip Tests ====================

    mod strip {
        use super::*;

        #[test]
        fn strips_known_and_unknown() {
            assert_eq!(strip_tags("<bold>a</bold> <nope>b</nope>"), "a b");
        }

        #[test]
        fn strips_unpaired_markers() {
            assert_eq!(strip_tags("<bold>a</red>"), "a");
        }

        #[test]
        fn strips_inline_styles() {
            assert_eq!(strip_tags("<fg=red;options=bold>hi</fg=red;options=bold>"), "hi");
        }

        #[test]
        fn keeps_invalid_markers() {
            assert_eq!(strip_tags("<1>a</1> a<b"), "<1>a</1> a<b");
        }

        #[test]
        fn strips_markers_revealed_by_stripping() {
            assert_eq!(strip_tags("<<a>b>x"), "x");
        }
    }

    // ==================== Tag Name Validation Tests ====================

    mod tag_names {
        use super::*;

        #[test]
        fn valid_simple_names() {
            assert!(is_valid_tag_name("bold"));
            assert!(is_valid_tag_name("darkGray"));
            assert!(is_valid_tag_name("a"));
        }

        #[test]
        fn valid_inline_styles() {
            assert!(is_valid_tag_name("fg=red"));
            assert!(is_valid_tag_name("fg=red;bg=white"));
            assert!(is_valid_tag_name("options=bold,underscore"));
        }

        #[test]
        fn invalid_first_char() {
            assert!(!is_valid_tag_name("=red"));
            assert!(!is_valid_tag_name(";"));
            assert!(!is_valid_tag_name("1style"));
        }

        #[test]
        fn invalid_special_chars() {
            assert!(!is_valid_tag_name("my_style"));
            assert!(!is_valid_tag_name("my-style"));
            assert!(!is_valid_tag_name("my style"));
            assert!(!is_valid_tag_name("h1"));
        }

        #[test]
        fn invalid_empty() {
            assert!(!is_valid_tag_name(""));
        }

        #[test]
        fn names_in_order() {
            let names: Vec<_> = super::super::tag_names("<a>x</a> <b><c>y</c></b>").collect();
            assert_eq!(names, vec!["a", "b", "c"]);
        }
    }

    // ==================== Validation Tests ====================

    mod validation {
        use super::*;

        #[test]
        fn all_known() {
            assert!(validate("<bold>x</bold>", |name| name == "bold").is_ok());
        }

        #[test]
        fn reports_unknown_with_offsets() {
            let errors = validate("ok <oops>x</oops>", |name| name == "bold").unwrap_err();
            let errors: Vec<_> = errors.into_iter().collect();
            assert_eq!(
                errors,
                vec![
                    UnknownTagError {
                        name: "oops".to_string(),
                        kind: UnknownTagKind::Open,
                        offset: 3,
                    },
                    UnknownTagError {
                        name: "oops".to_string(),
                        kind: UnknownTagKind::Close,
                        offset: 10,
                    },
                ]
            );
        }

        #[test]
        fn distinct_names() {
            let errors = validate("<a>1</a><b>2</b><a>3</a>", |_| false).unwrap_err();
            assert_eq!(errors.len(), 6);
            assert_eq!(errors.names(), vec!["a", "b"]);
        }

        #[test]
        fn display_lists_each_tag() {
            let errors = validate("<a>x</a>", |_| false).unwrap_err();
            let message = errors.to_string();
            assert!(message.contains("2 unknown tag"));
            assert!(message.contains("<a> at offset 0"));
            assert!(message.contains("</a> at offset 4"));
        }
    }

    // ==================== Tokenizer Tests ====================

    mod tokenizer {
        use super::*;

        fn tokens(input: &str) -> Vec<Token<'_>> {
            Tokenizer::new(input).map(|(_, token)| token).collect()
        }

        #[test]
        fn tokenize_plain_text() {
            assert_eq!(tokens("hello world"), vec![Token::Text("hello world")]);
        }

        #[test]
        fn tokenize_single_tag() {
            assert_eq!(
                tokens("<bold>hello</bold>"),
                vec![
                    Token::OpenTag("bold"),
                    Token::Text("hello"),
                    Token::CloseTag("bold"),
                ]
            );
        }

        #[test]
        fn tokenize_lone_bracket() {
            assert_eq!(
                tokens("a<b"),
                vec![Token::Text("a"), Token::Text("<"), Token::Text("b")]
            );
        }

        #[test]
        fn tokenize_offsets() {
            let offsets: Vec<usize> = Tokenizer::new("a<b>c</b>").map(|(at, _)| at).collect();
            assert_eq!(offsets, vec![0, 1, 4, 5]);
        }
    }
}
