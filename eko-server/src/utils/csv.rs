//! Minimal CSV quoting for the admin export endpoints

/// Quote a field when it contains a delimiter, quote or newline
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(csv_field("Acme Ltd"), "Acme Ltd");
    }

    #[test]
    fn quotes_delimiters_and_embedded_quotes() {
        assert_eq!(csv_field("Acme, Ltd"), "\"Acme, Ltd\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
    }
}
