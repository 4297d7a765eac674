// Prompt-building utilities shared by every service's prompts.rs.

/// Replaces each `{name}` placeholder in `template` with its value in one pass.
///
/// Substituted values are never rescanned, so user text containing `{bio}` or
/// similar is inserted literally. Unknown placeholders and stray braces are
/// kept as written (JSON examples in templates rely on this).
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });
        match value {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
