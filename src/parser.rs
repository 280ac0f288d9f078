use unicase::UniCase;
use winnow::combinator::{cut_err, delimited, eof, opt, preceded};
use winnow::error::StrContext;
use winnow::token::{one_of, rest, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::CommitType;

/// The pieces of a header that matched the conventional commit grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ParsedHeader<'a> {
    pub(crate) type_: &'a str,
    pub(crate) scope: Option<&'a str>,
    pub(crate) breaking: bool,
    pub(crate) subject: Subject<'a>,
}

/// The header text after the `:`, split around an inline ticket when one is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Subject<'a> {
    Plain(&'a str),
    Ticketed {
        before: &'a str,
        ticket: &'a str,
        after: &'a str,
    },
}

/// Match a whole header line against the conventional commit grammar.
///
/// Returns `None` when any part of the line does not conform.
pub(crate) fn parse_header(header: &str) -> Option<ParsedHeader<'_>> {
    let (type_, scope, breaking, text) = summary.parse(header).ok()?;
    Some(ParsedHeader {
        type_,
        scope,
        breaking: breaking.is_some(),
        subject: split_ticket(text),
    })
}

/// Find the first issue key anywhere in `haystack`.
pub(crate) fn find_issue_key(haystack: &str) -> Option<&str> {
    haystack
        .char_indices()
        .filter(|&(at, c)| c.is_ascii_uppercase() && !continues_key(&haystack[..at]))
        .find_map(|(at, _)| {
            let mut input = &haystack[at..];
            issue_key.parse_next(&mut input).ok()
        })
}

// The ticket closes the subject, optionally followed by an attribution:
// <text>, "(", <issue-key>, ")", [",", <whitespace>, "by", <whitespace>, <text>]
fn split_ticket(text: &str) -> Subject<'_> {
    text.match_indices('(')
        .find_map(|(at, _)| {
            let mut input = &text[at..];
            let ticket = delimited('(', issue_key, ')').parse_next(&mut input).ok()?;
            let after = input;
            (opt(attribution), eof).parse_next(&mut input).ok()?;
            Some(Subject::Ticketed {
                before: &text[..at],
                ticket,
                after,
            })
        })
        .unwrap_or(Subject::Plain(text))
}

// <CR>              ::= "0x000D"
// <LF>              ::= "0x000A"
// <newline>         ::= [<CR>], <LF>
fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

// <parens>          ::= "(" | ")"
fn is_parens(c: char) -> bool {
    c == '(' || c == ')'
}

// <key-char>        ::= [A-Z0-9]
fn is_key_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

// An issue key may not start inside another token: the text before it must not end
// with <key-char> or <key-char> "-".
fn continues_key(before: &str) -> bool {
    let mut chars = before.chars().rev();
    match chars.next() {
        Some(c) if is_key_char(c) => true,
        Some('-') => chars.next().is_some_and(is_key_char),
        _ => false,
    }
}

fn whitespace<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., char::is_whitespace).parse_next(i)
}

fn is_known_type(token: &str) -> bool {
    let token = UniCase::new(token);
    CommitType::ALL
        .into_iter()
        .any(|kind| UniCase::new(kind.prefix()) == token)
}

// <type>            ::= "feat" | "fix" | "perf" | ... | "others"  /* case-insensitive */
//
// The whole token is read before it is checked, so "feature" is not "feat".
fn type_<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        !is_line_ending(c) && !is_parens(c) && c != ':' && c != '!' && !c.is_whitespace()
    })
    .verify(|token: &str| is_known_type(token))
    .context(StrContext::Label("type"))
    .parse_next(i)
}

// <scope>           ::= <any UTF8-octets except newline or parens>+
fn scope<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !is_line_ending(c) && !is_parens(c))
        .context(StrContext::Label("scope"))
        .parse_next(i)
}

// <text>            ::= <any UTF8-octets except newline>+
fn text<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., is_line_ending)
        .context(StrContext::Label("description"))
        .parse_next(i)
}

// <issue-key>       ::= [A-Z], <key-char>+, "-", [1-9], [0-9]*
fn issue_key<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of('A'..='Z'),
        take_while(1.., is_key_char),
        '-',
        one_of('1'..='9'),
        take_while(0.., |c: char| c.is_ascii_digit()),
    )
        .take()
        .context(StrContext::Label("issue key"))
        .parse_next(i)
}

// <attribution>     ::= ",", <whitespace>, "by", <whitespace>, <text>
fn attribution<'i>(i: &mut &'i str) -> ModalResult<&'i str> {
    (',', one_of(char::is_whitespace), "by", one_of(char::is_whitespace), rest)
        .take()
        .parse_next(i)
}

// /* "!" should be added to the AST as a <breaking-change> node with the value "!" */
// <summary>         ::= <type>, "(", <scope>, ")", ["!"], ":", <whitespace>+, <text>
//                    |  <type>, ["!"], ":", <whitespace>+, <text>
#[allow(clippy::type_complexity)]
fn summary<'i>(
    i: &mut &'i str,
) -> ModalResult<(&'i str, Option<&'i str>, Option<&'i str>, &'i str)> {
    (
        type_,
        opt(delimited('(', cut_err(scope), ')')),
        opt("!"),
        preceded((':', whitespace), text),
    )
        .parse_next(i)
}
