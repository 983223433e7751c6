use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Summary;

pub const MAX_KEYWORDS: usize = 8;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\d+\s*[.)]\s*)?(?:#+\s*)?[*_]*\s*(title|key\s+points|bullet\s+points|bullets|highlights|suggested\s+action|next\s+step|action)\s*[*_]*\s*(?:[:\-–]\s*[*_]*\s*(.*))?$",
    )
    .unwrap()
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•–‣]|\d+\s*[.)])\s+(.+)$").unwrap());

static KEYWORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;\n]+").unwrap());

static KEYWORD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:keywords|tags)\s*:\s*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Title,
    Bullets,
    Action,
}

/// Chat replies pass through untouched apart from surrounding whitespace.
pub fn format_chat_reply(reply: &str) -> String {
    reply.trim().to_string()
}

/// Best-effort parse of a summary reply. Never fails; `bullets` is never empty.
pub fn parse_summary(reply: &str) -> Summary {
    let mut title = String::new();
    let mut action = String::new();
    let mut bullets: Vec<String> = Vec::new();
    let mut loose: Vec<String> = Vec::new();
    let mut section = Section::None;

    for raw_line in reply.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            let heading = caps[1].to_lowercase();
            let inline = clean(caps.get(2).map_or("", |m| m.as_str()));
            section = match heading.split_whitespace().next().unwrap_or_default() {
                "title" => Section::Title,
                "suggested" | "next" | "action" => Section::Action,
                _ => Section::Bullets,
            };

            if !inline.is_empty() {
                match section {
                    Section::Title if title.is_empty() => title = inline,
                    Section::Action if action.is_empty() => action = inline,
                    Section::Bullets => bullets.push(inline),
                    _ => {}
                }
                if section != Section::Bullets {
                    section = Section::None;
                }
            }
            continue;
        }

        let bullet = BULLET.captures(line).map(|caps| clean(&caps[1]));

        match section {
            Section::Title => {
                title = clean(bullet.as_deref().unwrap_or(line));
                section = Section::None;
            }
            Section::Action => {
                action = clean(bullet.as_deref().unwrap_or(line));
                section = Section::None;
            }
            Section::Bullets => {
                let text = bullet.unwrap_or_else(|| clean(line));
                if !text.is_empty() {
                    bullets.push(text);
                }
            }
            Section::None => match bullet {
                Some(text) if !text.is_empty() => bullets.push(text),
                _ => loose.push(clean(line)),
            },
        }
    }

    if bullets.is_empty() {
        bullets = loose.into_iter().filter(|l| !l.is_empty()).collect();
    }

    if bullets.is_empty() {
        return Summary {
            title,
            action,
            ..Summary::unstructured(reply)
        };
    }

    Summary {
        title,
        bullets,
        action,
        keywords: Vec::new(),
    }
}

/// Splits a comma/semicolon/newline separated tag list into at most
/// [`MAX_KEYWORDS`] distinct lower-case keywords.
pub fn parse_keywords(reply: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for candidate in KEYWORD_SEPARATOR.split(reply) {
        let candidate = KEYWORD_LABEL.replace(candidate.trim(), "");
        let candidate = BULLET
            .captures(&candidate)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| candidate.to_string());
        let keyword = clean(&candidate).to_lowercase();

        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
        if keywords.len() >= MAX_KEYWORDS {
            break;
        }
    }

    keywords
}

fn clean(text: &str) -> String {
    text.trim()
        .trim_matches(|c: char| matches!(c, '*' | '_' | '"' | '\'' | '`' | '#'))
        .trim()
        .to_string()
}
