//! HTML entity encoder.

/// Escape markup characters and write every non-ASCII character as a decimal
/// numeric reference.
pub fn encode_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut run_start = None;

    for (i, c) in input.char_indices() {
        let replacement = match c {
            '"' => Some("&quot;".to_string()),
            '\'' => Some("&apos;".to_string()),
            c if !c.is_ascii() => Some(format!("&#{};", c as u32)),
            _ => None,
        };

        match replacement {
            Some(entity) => {
                if let Some(start) = run_start.take() {
                    html_escape::encode_text_to_string(&input[start..i], &mut out);
                }
                out.push_str(&entity);
            }
            None => {
                run_start.get_or_insert(i);
            }
        }
    }

    if let Some(start) = run_start {
        html_escape::encode_text_to_string(&input[start..], &mut out);
    }

    out
}

/// Decode named, decimal and hexadecimal references. Unknown entities are
/// left as they are.
pub fn decode_html(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}
