use crate::artifacts::classify::style::LineStyle;

/// Highlights the `Key:` prefix of an `svn info` line.
pub fn classify(line: &str) -> String {
    match line.find(':') {
        Some(colon) => {
            let (key, value) = line.split_at(colon + 1);
            format!("{}{value}", LineStyle::InfoKey.paint(key))
        }
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_up_to_first_colon_is_highlighted() {
        colored::control::set_override(true);

        assert_eq!(
            classify("URL: https://svn.example.org/repo/trunk"),
            format!(
                "{} https://svn.example.org/repo/trunk",
                LineStyle::InfoKey.paint("URL:")
            )
        );
    }

    #[test]
    fn line_without_colon_is_unchanged() {
        assert_eq!(classify("no key here"), "no key here");
    }
}
