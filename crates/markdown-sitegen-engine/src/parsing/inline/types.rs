use crate::html::HtmlNode;

/// The kind of an inline token. Only links and images carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A typed span of inline text.
///
/// `content` is the display text, or the alt text for images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    pub kind: TokenKind,
    pub content: String,
}

impl TextToken {
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(TokenKind::Plain, content)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(TokenKind::Link { url: url.into() }, content)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(TokenKind::Image { url: url.into() }, alt)
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, TokenKind::Plain)
    }

    /// The link or image target, if this kind has one.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Link { url } | TokenKind::Image { url } => Some(url),
            _ => None,
        }
    }
}

impl From<TextToken> for HtmlNode {
    fn from(token: TextToken) -> Self {
        let TextToken { kind, content } = token;
        match kind {
            TokenKind::Plain => HtmlNode::text(content),
            TokenKind::Bold => HtmlNode::leaf("b", content),
            TokenKind::Italic => HtmlNode::leaf("i", content),
            TokenKind::Code => HtmlNode::leaf("code", content),
            TokenKind::Link { url } => HtmlNode::leaf("a", content).with_attr("href", url),
            TokenKind::Image { url } => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_when_kind_and_content_match() {
        let a = TextToken::new(TokenKind::Bold, "This is a text node");
        let b = TextToken::new(TokenKind::Bold, "This is a text node");
        assert_eq!(a, b);
    }

    #[test]
    fn not_equal_with_different_content() {
        let a = TextToken::new(TokenKind::Bold, "This is a text node");
        let b = TextToken::new(TokenKind::Bold, "This is not a text node");
        assert_ne!(a, b);
    }

    #[test]
    fn not_equal_with_different_kind() {
        let a = TextToken::new(TokenKind::Bold, "This is a text node");
        let b = TextToken::new(TokenKind::Italic, "This is a text node");
        assert_ne!(a, b);
    }

    #[test]
    fn not_equal_with_different_url() {
        let a = TextToken::link("some text", "https://www.boot.dev/");
        let b = TextToken::link("some text", "https://exercism.org/");
        assert_ne!(a, b);
    }

    #[test]
    fn link_and_image_with_same_url_differ() {
        assert_ne!(TextToken::link("x", "/u"), TextToken::image("x", "/u"));
    }

    #[test]
    fn url_only_for_links_and_images() {
        assert_eq!(TextToken::plain("x").url(), None);
        assert_eq!(TextToken::link("x", "").url(), Some(""));
        assert_eq!(TextToken::image("x", "/i.png").url(), Some("/i.png"));
    }

    #[test]
    fn plain_becomes_raw_text() {
        let node = HtmlNode::from(TextToken::plain("This is a text node"));
        assert_eq!(node.tag(), None);
        assert_eq!(node.render(), "This is a text node");
    }

    #[test]
    fn formatted_kinds_become_tagged_leaves() {
        let bold = HtmlNode::from(TextToken::new(TokenKind::Bold, "b"));
        let italic = HtmlNode::from(TextToken::new(TokenKind::Italic, "i"));
        let code = HtmlNode::from(TextToken::new(TokenKind::Code, "c"));
        assert_eq!(bold.render(), "<b>b</b>");
        assert_eq!(italic.render(), "<i>i</i>");
        assert_eq!(code.render(), "<code>c</code>");
    }

    #[test]
    fn link_becomes_anchor_with_href() {
        let node = HtmlNode::from(TextToken::link("boot dev", "https://www.boot.dev"));
        assert_eq!(
            node.render(),
            r#"<a href="https://www.boot.dev">boot dev</a>"#
        );
    }

    #[test]
    fn image_becomes_img_with_src_then_alt() {
        let node = HtmlNode::from(TextToken::image("a cat", "/cat.png"));
        assert_eq!(node.attrs().get("src"), Some("/cat.png"));
        assert_eq!(node.attrs().get("alt"), Some("a cat"));
        assert_eq!(node.render(), r#"<img src="/cat.png" alt="a cat"></img>"#);
    }
}
