/// Pull diagram markup out of a model reply that may wrap it in a Markdown
/// code fence (```` ```mermaid ... ``` ````), possibly after some prose.
///
/// Replies without a fence are returned trimmed.
pub fn strip_code_fence(reply: &str) -> String {
    let trimmed = reply.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed.to_string();
    };

    let after_open = &trimmed[open + 3..];
    // A one-word fence line is the info string. Anything else starts the body,
    // possibly behind an inline `mermaid` tag.
    let body = match after_open.split_once('\n') {
        Some((info, rest)) if !info.trim().contains(char::is_whitespace) => rest,
        _ => strip_info_word(after_open),
    };

    let body = match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    };

    body.trim().to_string()
}

fn strip_info_word(text: &str) -> &str {
    let text = text.trim_start();
    for tag in ["mermaid", "mmd"] {
        if let Some(rest) = text.strip_prefix(tag)
            && rest.starts_with(char::is_whitespace)
        {
            return rest.trim_start();
        }
    }
    text
}
