//! Shared utility functions.

/// Split a command string into an argument vector, honoring single and
/// double quotes.
///
/// A quoted span is a single token regardless of embedded spaces; the quote
/// characters themselves are stripped. An unterminated quote runs to the end
/// of the input. Whitespace outside quotes separates tokens and is never
/// included in them.
pub fn split_command(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => {
                if ch == '\'' || ch == '"' {
                    quote = Some(ch);
                    in_token = true;
                } else if ch.is_whitespace() {
                    if in_token {
                        args.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else {
                    current.push(ch);
                    in_token = true;
                }
            }
        }
    }
    if in_token {
        args.push(current);
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_plain() {
        assert_eq!(split_command("npm install"), vec!["npm", "install"]);
    }

    #[test]
    fn split_collapses_whitespace() {
        assert_eq!(
            split_command("  tsc   --noEmit  "),
            vec!["tsc", "--noEmit"]
        );
    }

    #[test]
    fn split_double_quoted_span() {
        assert_eq!(
            split_command(r#"eslint "src/my file.ts" --fix"#),
            vec!["eslint", "src/my file.ts", "--fix"]
        );
    }

    #[test]
    fn split_single_quoted_span() {
        assert_eq!(
            split_command("grep 'a b c' file.txt"),
            vec!["grep", "a b c", "file.txt"]
        );
    }

    #[test]
    fn split_quote_inside_token() {
        // Quote boundary glues onto the surrounding token
        assert_eq!(
            split_command(r#"echo --msg="hello world""#),
            vec!["echo", "--msg=hello world"]
        );
    }

    #[test]
    fn split_nested_other_quote() {
        assert_eq!(
            split_command(r#"sh -c "echo 'a b'""#),
            vec!["sh", "-c", "echo 'a b'"]
        );
    }

    #[test]
    fn split_empty_quotes_produce_empty_token() {
        assert_eq!(split_command(r#"cmd """#), vec!["cmd", ""]);
    }

    #[test]
    fn split_unterminated_quote_runs_to_end() {
        assert_eq!(
            split_command("cmd 'a b c"),
            vec!["cmd", "a b c"]
        );
    }

    #[test]
    fn split_empty_input() {
        assert!(split_command("").is_empty());
        assert!(split_command("   ").is_empty());
    }
}
