use std::sync::OnceLock;

use regex::Regex;

pub const SOURCE_SITE: &str = "https://www.kanjidamage.com";

/// Turns a site-relative link into an absolute URL on the source site.
pub fn resolve_link(link: &str) -> String {
    if link.starts_with("http") {
        return link.to_string();
    }

    if link.starts_with('/') {
        format!("{}{}", SOURCE_SITE, link)
    } else {
        format!("{}/{}", SOURCE_SITE, link)
    }
}

/// Flattens the HTML of mnemonic and breakdown fields to plain text for egui.
pub fn strip_html(html: &str) -> String {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    static TAGS: OnceLock<Regex> = OnceLock::new();
    static SPACES: OnceLock<Regex> = OnceLock::new();

    let breaks =
        BREAKS.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</p>|</li>").expect("valid regex"));
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"));
    let spaces = SPACES.get_or_init(|| Regex::new(r"[ \t]+").expect("valid regex"));

    let text = breaks.replace_all(html, "\n");
    let text = tags.replace_all(&text, "");
    let text = decode_entities(&text);
    let text = spaces.replace_all(&text, " ");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_link() {
        assert_eq!(resolve_link("/kanji/1-one"), "https://www.kanjidamage.com/kanji/1-one");
        assert_eq!(resolve_link("kanji/1-one"), "https://www.kanjidamage.com/kanji/1-one");
        assert_eq!(
            resolve_link("https://www.kanjidamage.com/kanji/1-one"),
            "https://www.kanjidamage.com/kanji/1-one"
        );
    }

    #[test]
    fn test_strip_html() {
        let html = "<p>A <b>dog</b> with a <a href=\"/kanji/5\">big</a> dot.</p><p>Tom &amp; Jerry&nbsp;again</p>";
        assert_eq!(strip_html(html), "A dog with a big dot.\nTom & Jerry again");
        assert_eq!(strip_html("line one<br/>line two"), "line one\nline two");
        assert_eq!(strip_html("   "), "");
    }
}
