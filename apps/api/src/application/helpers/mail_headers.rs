//! Parsing of free-form mail headers into `ParsedHeaders`.

use nanopost_types::ContentType;

use crate::domain::entities::{outgoing_mail::OneOrMany, parsed_headers::ParsedHeaders};

/// Parse raw headers, given as one newline-delimited string or as a list of
/// `Name: value` lines.
///
/// Unknown header names and lines without a colon are skipped. Never fails.
pub fn parse_headers(input: Option<&OneOrMany>) -> ParsedHeaders {
    let mut parsed = ParsedHeaders::default();

    let Some(input) = input else {
        return parsed;
    };

    let normalized;
    let lines: Vec<&str> = match input {
        OneOrMany::One(raw) => {
            normalized = raw.replace("\r\n", "\n");
            normalized.split('\n').collect()
        }
        OneOrMany::Many(lines) => lines.iter().map(String::as_str).collect(),
    };

    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim().to_lowercase();
        let value = value.trim();

        match name.as_str() {
            "from" => match split_mailbox(value) {
                Some((display, address)) => {
                    parsed.from_name = display.to_string();
                    parsed.from = address.to_string();
                }
                None => parsed.from = value.to_string(),
            },
            "reply-to" => parsed.reply_to = value.to_string(),
            "cc" => parsed.cc.push(value.to_string()),
            "bcc" => parsed.bcc.push(value.to_string()),
            "content-type" => {
                if value.to_ascii_lowercase().contains("text/html") {
                    parsed.content_type = ContentType::TextHtml;
                }
            }
            _ => {}
        }
    }

    parsed
}

/// Split `Display Name <addr>` into its display name and address.
///
/// The display name is taken up to the first `<` that leaves a non-empty
/// address before the closing `>`, with quotes and spaces trimmed off.
fn split_mailbox(value: &str) -> Option<(&str, &str)> {
    let inner = value.strip_suffix('>')?;

    inner
        .char_indices()
        .filter(|&(i, c)| c == '<' && i > 0)
        .find(|&(i, _)| i + 1 < inner.len())
        .map(|(i, _)| {
            let display = inner[..i]
                .trim_end()
                .trim_matches(|c| c == ' ' || c == '"' || c == '\'');
            (display, &inner[i + 1..])
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> OneOrMany {
        OneOrMany::One(s.to_string())
    }

    #[test]
    fn parses_crlf_headers_with_repeated_cc() {
        let parsed = parse_headers(Some(&raw(
            "From: A <a@x.com>\r\nCc: b@x.com\r\nCc: c@x.com\r\nContent-Type: text/html",
        )));

        assert_eq!(parsed.from, "a@x.com");
        assert_eq!(parsed.from_name, "A");
        assert_eq!(parsed.cc, vec!["b@x.com", "c@x.com"]);
        assert!(parsed.bcc.is_empty());
        assert_eq!(parsed.content_type, ContentType::TextHtml);
    }

    #[test]
    fn defaults_for_missing_or_empty_headers() {
        assert_eq!(parse_headers(None), ParsedHeaders::default());
        assert_eq!(parse_headers(Some(&raw(""))), ParsedHeaders::default());
        assert_eq!(
            parse_headers(Some(&OneOrMany::Many(vec![]))),
            ParsedHeaders::default()
        );
        assert_eq!(ParsedHeaders::default().content_type, ContentType::TextPlain);
    }

    #[test]
    fn lines_without_colon_contribute_nothing() {
        let parsed = parse_headers(Some(&raw("garbage line\nX-Mailer\n\nCc: b@x.com")));
        assert_eq!(parsed.cc, vec!["b@x.com"]);
        assert_eq!(parsed.from, "");

        let only_garbage = parse_headers(Some(&OneOrMany::Many(vec![
            "no colon here".to_string(),
            "still none".to_string(),
        ])));
        assert_eq!(only_garbage, ParsedHeaders::default());
    }

    #[test]
    fn list_input_is_parsed_line_by_line() {
        let parsed = parse_headers(Some(&OneOrMany::Many(vec![
            "Reply-To: Support <help@x.com>".to_string(),
            "BCC: audit@x.com".to_string(),
            "Bcc: archive@x.com".to_string(),
            "X-Priority: 1".to_string(),
        ])));

        assert_eq!(parsed.reply_to, "Support <help@x.com>");
        assert_eq!(parsed.bcc, vec!["audit@x.com", "archive@x.com"]);
        assert!(parsed.cc.is_empty());
    }

    #[test]
    fn from_without_display_name_is_the_address() {
        let parsed = parse_headers(Some(&raw("From: plain@x.com")));
        assert_eq!(parsed.from, "plain@x.com");
        assert_eq!(parsed.from_name, "");
    }

    #[test]
    fn from_display_name_is_unquoted() {
        let parsed = parse_headers(Some(&raw(r#"From: "Site Admin" <admin@x.com>"#)));
        assert_eq!(parsed.from_name, "Site Admin");
        assert_eq!(parsed.from, "admin@x.com");

        let single = parse_headers(Some(&raw("From: 'Ops'<ops@x.com>")));
        assert_eq!(single.from_name, "Ops");
        assert_eq!(single.from, "ops@x.com");
    }

    #[test]
    fn from_with_bare_angle_address_keeps_whole_value() {
        // No display name before '<'
        let parsed = parse_headers(Some(&raw("From: <only@x.com>")));
        assert_eq!(parsed.from, "<only@x.com>");
        assert_eq!(parsed.from_name, "");

        let empty_addr = parse_headers(Some(&raw("From: Name <>")));
        assert_eq!(empty_addr.from, "Name <>");
    }

    #[test]
    fn value_keeps_text_after_first_colon() {
        let parsed = parse_headers(Some(&raw("Reply-To: Team: Ops <ops@x.com>")));
        assert_eq!(parsed.reply_to, "Team: Ops <ops@x.com>");
    }

    #[test]
    fn content_type_match_is_case_insensitive() {
        let parsed = parse_headers(Some(&raw("content-TYPE: TEXT/HTML; charset=UTF-8")));
        assert_eq!(parsed.content_type, ContentType::TextHtml);

        let plain = parse_headers(Some(&raw("Content-Type: text/plain; charset=UTF-8")));
        assert_eq!(plain.content_type, ContentType::TextPlain);
    }
}
