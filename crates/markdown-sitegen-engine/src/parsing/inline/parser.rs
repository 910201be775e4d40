use crate::html::HtmlNode;
use crate::parsing::ParseError;

use super::{
    kinds::{Emphasis, Image, Link, LinkMatch},
    types::{TextToken, TokenKind},
};

/// Tokenizes inline Markdown into a sequence of [`TextToken`]s.
///
/// Empty input yields no tokens. Fails with
/// [`ParseError::UnterminatedDelimiter`] if any plain segment is left with an
/// unmatched delimiter.
pub fn tokenize(text: &str) -> Result<Vec<TextToken>, ParseError> {
    if text.is_empty() {
        return Ok(vec![]);
    }

    let tokens = Emphasis::ALL
        .into_iter()
        .try_fold(vec![TextToken::plain(text)], split_emphasis)?;
    let tokens = split_matches(tokens, Image::find_all, |url| TokenKind::Image { url });
    Ok(split_matches(tokens, Link::find_all, |url| TokenKind::Link { url }))
}

/// Tokenizes `text` and converts every token into an [`HtmlNode`].
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(tokenize(text)?.into_iter().map(HtmlNode::from).collect())
}

/// Splits every plain token on `emphasis`'s delimiter.
///
/// Odd segments take the emphasis kind. Empty segments are dropped, but only
/// after the delimiter count has been checked on the unfiltered split.
fn split_emphasis(
    tokens: Vec<TextToken>,
    emphasis: Emphasis,
) -> Result<Vec<TextToken>, ParseError> {
    let delimiter = emphasis.delimiter();
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }

        let sections: Vec<&str> = token.content.split(delimiter).collect();
        if sections.len() % 2 == 0 {
            return Err(ParseError::UnterminatedDelimiter {
                delimiter,
                text: token.content.clone(),
            });
        }

        for (i, section) in sections.into_iter().enumerate() {
            if section.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                TokenKind::Plain
            } else {
                emphasis.token_kind()
            };
            out.push(TextToken::new(kind, section));
        }
    }

    Ok(out)
}

/// Splits every plain token around the constructs found by `find`.
fn split_matches(
    tokens: Vec<TextToken>,
    find: fn(&str) -> Vec<LinkMatch<'_>>,
    kind: fn(String) -> TokenKind,
) -> Vec<TextToken> {
    let mut out = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            out.push(token);
            continue;
        }
        match split_around(&token.content, find, kind) {
            Some(pieces) => out.extend(pieces),
            None => out.push(token),
        }
    }

    out
}

/// Text before, between and after matches stays plain (if non-empty); each
/// match becomes a token of the kind built by `kind` from its URL.
///
/// Returns `None` when `content` holds no match.
fn split_around(
    content: &str,
    find: fn(&str) -> Vec<LinkMatch<'_>>,
    kind: fn(String) -> TokenKind,
) -> Option<Vec<TextToken>> {
    let matches = find(content);
    if matches.is_empty() {
        return None;
    }

    let mut out = vec![];
    let mut rest = 0;
    for m in matches {
        let before = &content[rest..m.range.start];
        if !before.is_empty() {
            out.push(TextToken::plain(before));
        }
        out.push(TextToken::new(kind(m.url.to_string()), m.text));
        rest = m.range.end;
    }

    let after = &content[rest..];
    if !after.is_empty() {
        out.push(TextToken::plain(after));
    }
    Some(out)
}
