//! Stop name extraction from station listing pages.
//!
//! Source pages are scanned with small, tolerant patterns rather than a full
//! HTML parser: each system only needs one kind of element picked out.

use std::sync::LazyLock;

use regex::Regex;

static CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s)class\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("class attribute pattern is valid")
});

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| element_pattern("a"));
static H3: LazyLock<Regex> = LazyLock::new(|| element_pattern("h3"));
static SPAN: LazyLock<Regex> = LazyLock::new(|| element_pattern("span"));

fn element_pattern(tag: &str) -> Regex {
    Regex::new(&format!(r"(?is)<{tag}\b([^>]*)>(.*?)</{tag}\s*>"))
        .expect("element pattern is valid")
}

/// Element names a rule can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    A,
    H3,
    Span,
}

impl Tag {
    fn pattern(self) -> &'static Regex {
        match self {
            Tag::A => &*ANCHOR,
            Tag::H3 => &*H3,
            Tag::Span => &*SPAN,
        }
    }
}

/// Which elements of a page hold stop names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractRule {
    /// `<a>` elements carrying the given class token.
    AnchorWithClass(&'static str),
    /// `<tag>` elements whose text contains `needle`, ignoring case.
    TagContaining { tag: Tag, needle: &'static str },
}

impl ExtractRule {
    /// Pull stop names out of a page, in document order.
    ///
    /// Elements with no visible text are skipped.
    pub fn extract(&self, html: &str) -> Vec<String> {
        match *self {
            ExtractRule::AnchorWithClass(class) => elements(html, Tag::A)
                .filter(|(attrs, _)| has_class(attrs, class))
                .map(|(_, inner)| element_text(inner))
                .filter(|name| !name.is_empty())
                .collect(),
            ExtractRule::TagContaining { tag, needle } => {
                let needle = needle.to_lowercase();
                elements(html, tag)
                    .map(|(_, inner)| element_text(inner))
                    .filter(|name| name.to_lowercase().contains(&needle))
                    .collect()
            }
        }
    }
}

/// `(attributes, inner markup)` of every `<tag ...>...</tag>` element.
fn elements(html: &str, tag: Tag) -> impl Iterator<Item = (&str, &str)> {
    tag.pattern().captures_iter(html).map(|caps| {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        let inner = caps.get(2).map_or("", |m| m.as_str());
        (attrs, inner)
    })
}

fn has_class(attrs: &str, class: &str) -> bool {
    CLASS_ATTR.captures_iter(attrs).any(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .is_some_and(|value| value.as_str().split_whitespace().any(|c| c == class))
    })
}

/// Visible text of an element: tags dropped, entities decoded, whitespace collapsed.
fn element_text(inner: &str) -> String {
    let mut text = String::with_capacity(inner.len());
    let mut in_tag = false;
    for c in inner.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = decode_entities(&text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entities(text: &str) -> String {
    // &amp; last so that "&amp;lt;" stays "&lt;"
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_with_class_token() {
        let html = r#"
            <ul>
              <li><a class="station-link" href="/kipling">Kipling</a></li>
              <li><a href="/x" class="nav station-link active">
                    Union
                  </a></li>
              <li><a class="station-link-extra" href="/no">Not Me</a></li>
              <li><a href="/plain">Plain</a></li>
            </ul>
        "#;

        let names = ExtractRule::AnchorWithClass("station-link").extract(html);
        assert_eq!(names, vec!["Kipling", "Union"]);
    }

    #[test]
    fn single_quoted_class_and_nested_markup() {
        let html = "<a class='station'><span>Powell</span> <b>St</b></a>";
        let names = ExtractRule::AnchorWithClass("station").extract(html);
        assert_eq!(names, vec!["Powell St"]);
    }

    #[test]
    fn data_attributes_are_not_classes() {
        let html = r#"<a data-class="station" href="/">Fake</a>"#;
        let names = ExtractRule::AnchorWithClass("station").extract(html);
        assert!(names.is_empty());
    }

    #[test]
    fn tags_containing_needle() {
        let html = r#"
            <h3>Oakville GO Station</h3>
            <h3 class="title">Schedules</h3>
            <H3>Pickering STATION</H3>
            <h2>Union Station</h2>
        "#;

        let rule = ExtractRule::TagContaining {
            tag: Tag::H3,
            needle: "station",
        };
        assert_eq!(
            rule.extract(html),
            vec!["Oakville GO Station", "Pickering STATION"]
        );
    }

    #[test]
    fn tag_prefix_does_not_match() {
        let html = "<spanner>Fake Station</spanner><span>Real Station</span>";
        let rule = ExtractRule::TagContaining {
            tag: Tag::Span,
            needle: "station",
        };
        assert_eq!(rule.extract(html), vec!["Real Station"]);
    }

    #[test]
    fn entities_decoded() {
        let html = r#"<a class="station">12th St &amp; Oakland&nbsp;City</a>"#;
        let names = ExtractRule::AnchorWithClass("station").extract(html);
        assert_eq!(names, vec!["12th St & Oakland City"]);
    }

    #[test]
    fn empty_page_yields_nothing() {
        let rule = ExtractRule::AnchorWithClass("station-link");
        assert!(rule.extract("").is_empty());

        let rule = ExtractRule::TagContaining {
            tag: Tag::H3,
            needle: "station",
        };
        assert!(rule.extract("<html><body></body></html>").is_empty());
    }

    #[test]
    fn shared_patterns_serve_repeated_calls() {
        let rule = ExtractRule::TagContaining {
            tag: Tag::Span,
            needle: "station",
        };
        let first = rule.extract("<span>Times Sq Station</span>");
        let second = rule.extract("<span>Penn Station</span><span>Exit</span>");
        assert_eq!(first, vec!["Times Sq Station"]);
        assert_eq!(second, vec!["Penn Station"]);
        assert!(std::ptr::eq(Tag::Span.pattern(), Tag::Span.pattern()));
    }

    #[test]
    fn every_tag_pattern_compiles() {
        for tag in [Tag::A, Tag::H3, Tag::Span] {
            assert!(tag.pattern().is_match("<a></a><h3></h3><span></span>"));
        }
        assert!(CLASS_ATTR.is_match(r#" class="x""#));
    }

    #[test]
    fn blank_anchors_skipped() {
        let html = r#"<a class="station"> <img src="x.png"> </a><a class="station">Daly City</a>"#;
        let names = ExtractRule::AnchorWithClass("station").extract(html);
        assert_eq!(names, vec!["Daly City"]);
    }
}
