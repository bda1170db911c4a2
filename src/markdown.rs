//! Markdown → HTML rendering for skill bodies.
//!
//! pulldown-cmark does the CommonMark work. Raw HTML passes through
//! unchanged and smart punctuation is on. Bare URLs in prose are turned
//! into links by rewriting the event stream before it reaches the HTML
//! writer. URLs are matched against the source text, so smart punctuation
//! never alters a link target.

use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{
    html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use regex::Regex;

/// Bare URL candidates; trailing punctuation is trimmed afterwards.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("url regex must compile")
});

fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION
}

/// Render a Markdown document body to an HTML fragment.
#[must_use]
pub fn render_markdown(body: &str) -> String {
    let events = linkify(body, Parser::new_ext(body, options()).into_offset_iter());

    let mut html = String::with_capacity(body.len() * 3 / 2);
    push_html(&mut html, TextMergeStream::new(events.into_iter()));
    html
}

/// Replace bare URLs in text events with autolinks.
///
/// Consecutive text events are collected into a run and linked together,
/// because smart punctuation splits one source word into several events.
/// Text inside links, images, code blocks and raw `<a>` elements is left
/// alone.
fn linkify<'a>(
    body: &'a str,
    events: impl Iterator<Item = (Event<'a>, Range<usize>)>,
) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    let mut link_depth = 0usize;
    let mut in_code_block = false;
    let mut in_raw_anchor = false;

    for (event, range) in events {
        let event = match event {
            Event::Text(text) if link_depth == 0 && !in_code_block && !in_raw_anchor => {
                run.push((text, range));
                continue;
            }
            other => other,
        };
        flush_run(body, &mut run, &mut out);

        match &event {
            Event::Start(Tag::Link { .. } | Tag::Image { .. }) => link_depth += 1,
            Event::End(TagEnd::Link | TagEnd::Image) => link_depth = link_depth.saturating_sub(1),
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::InlineHtml(html) => {
                let tag = html.trim_start().to_ascii_lowercase();
                if tag.starts_with("<a ") || tag.starts_with("<a>") {
                    in_raw_anchor = true;
                } else if tag.starts_with("</a") {
                    in_raw_anchor = false;
                }
            }
            _ => {}
        }
        out.push(event);
    }
    flush_run(body, &mut run, &mut out);
    out
}

/// A bare URL found in the source: its byte range and link destination.
struct UrlSpan {
    range: Range<usize>,
    dest: String,
}

/// Bare URLs within `span` of the source.
fn find_urls(body: &str, span: Range<usize>) -> Vec<UrlSpan> {
    let offset = span.start;
    URL_RE
        .find_iter(&body[span])
        .filter_map(|m| {
            let url = trim_url(m.as_str());
            let dest = link_destination(url)?;
            let start = offset + m.start();
            Some(UrlSpan {
                range: start..start + url.len(),
                dest,
            })
        })
        .collect()
}

/// Link target for a matched URL, or `None` if it is not worth linking.
fn link_destination(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    if let Some(host) = lower.strip_prefix("www.") {
        return host.contains('.').then(|| format!("http://{url}"));
    }
    if lower.ends_with("://") {
        return None;
    }
    Some(url.to_string())
}

/// Emit a run of text events, linking the bare URLs in its source span.
///
/// Text that is a verbatim copy of its source can be split at URL
/// boundaries. Replaced text (typographic quotes, dashes, entities) is kept
/// whole: dropped when it falls inside a URL, emitted unchanged otherwise.
fn flush_run<'a>(
    body: &'a str,
    run: &mut Vec<(CowStr<'a>, Range<usize>)>,
    out: &mut Vec<Event<'a>>,
) {
    let (Some((_, first)), Some((_, last))) = (run.first(), run.last()) else {
        return;
    };
    let urls = find_urls(body, first.start..last.end);
    if urls.is_empty() {
        out.extend(run.drain(..).map(|(text, _)| Event::Text(text)));
        return;
    }

    let mut urls = urls.into_iter().peekable();
    // Source offset up to which text already belongs to an emitted link.
    let mut covered = 0;

    for (text, range) in run.drain(..) {
        if body.get(range.clone()) != Some(&*text) {
            if range.start >= covered {
                out.push(Event::Text(text));
            }
            continue;
        }

        let mut pos = range.start.max(covered);
        while pos < range.end {
            match urls.peek() {
                Some(url) if url.range.start < range.end => {
                    if url.range.start > pos {
                        out.push(Event::Text(CowStr::Borrowed(&body[pos..url.range.start])));
                    }
                    push_link(out, &body[url.range.clone()], &url.dest);
                    covered = covered.max(url.range.end);
                    pos = pos.max(covered);
                    urls.next();
                }
                _ => {
                    out.push(Event::Text(CowStr::Borrowed(&body[pos..range.end])));
                    pos = range.end;
                }
            }
        }
    }
}

fn push_link<'a>(out: &mut Vec<Event<'a>>, text: &'a str, dest: &str) {
    out.push(Event::Start(Tag::Link {
        link_type: LinkType::Autolink,
        dest_url: CowStr::from(dest.to_string()),
        title: CowStr::Borrowed(""),
        id: CowStr::Borrowed(""),
    }));
    out.push(Event::Text(CowStr::Borrowed(text)));
    out.push(Event::End(TagEnd::Link));
}

/// Drop trailing sentence punctuation and unbalanced closing parentheses.
fn trim_url(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let candidate = &url[..end];
        let Some(last) = candidate.chars().last() else {
            break;
        };
        let trim = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '*' | '_' | '\u{2019}' | '\u{201d}' => true,
            ')' => candidate.matches(')').count() > candidate.matches('(').count(),
            _ => false,
        };
        if !trim {
            break;
        }
        end -= last.len_utf8();
    }
    &url[..end]
}
