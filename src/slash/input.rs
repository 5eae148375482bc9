//! Parser for typed invocations such as `\review-pr 123 "needs tests"`.

/// A parsed slash invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

/// Parse `input` as a slash invocation.
///
/// Returns `None` when the input does not start with `\` (after leading
/// whitespace) or names no command.
pub fn parse_invocation(input: &str) -> Option<Invocation> {
    let rest = input.trim_start().strip_prefix('\\')?;

    let mut tokens = tokenize(rest).into_iter();
    let name = tokens.next()?;
    if name.is_empty() {
        return None;
    }

    Some(Invocation {
        name,
        args: tokens.collect(),
    })
}

/// Split on whitespace, honoring single and double quotes.
///
/// Inside quotes a backslash escapes the active quote character or another
/// backslash; any other backslash is kept literally. An unterminated quote
/// yields the partial argument. `""` yields an empty argument.
fn tokenize(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    match chars.peek() {
                        Some(&next) if next == q || next == '\\' => {
                            current.push(next);
                            chars.next();
                        }
                        _ => current.push(c),
                    }
                } else if c == q {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    // A quote inside a token continues that token.
                    quote = Some(c);
                    in_token = true;
                } else if c.is_whitespace() {
                    if in_token {
                        args.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else {
                    current.push(c);
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

    fn parse(input: &str) -> (String, Vec<String>) {
        let inv = parse_invocation(input).unwrap();
        (inv.name, inv.args)
    }

    #[test]
    fn test_simple_invocation() {
        let (name, args) = parse("\\review-pr 123 high");
        assert_eq!(name, "review-pr");
        assert_eq!(args, vec!["123", "high"]);
    }

    #[test]
    fn test_quoted_arguments() {
        let (name, args) = parse("\\cmd \"arg one\" \"arg two\" arg3");
        assert_eq!(name, "cmd");
        assert_eq!(args, vec!["arg one", "arg two", "arg3"]);
    }

    #[test]
    fn test_single_quotes_and_escapes() {
        let (_, args) = parse(r#"\cmd 'it\'s' "say \"hi\"" "c:\path" "a\\b""#);
        assert_eq!(args, vec!["it's", "say \"hi\"", "c:\\path", "a\\b"]);
    }

    #[test]
    fn test_quote_inside_token_joins() {
        let (_, args) = parse(r#"\cmd a"b c" --name='x y' z"#);
        assert_eq!(args, vec!["ab c", "--name=x y", "z"]);
    }

    #[test]
    fn test_empty_quoted_argument_is_kept() {
        let (_, args) = parse("\\cmd \"\" '' x");
        assert_eq!(args, vec!["", "", "x"]);
    }

    #[test]
    fn test_unterminated_quote_yields_partial() {
        let (_, args) = parse("\\cmd \"unfinished arg");
        assert_eq!(args, vec!["unfinished arg"]);
    }

    #[test]
    fn test_leading_whitespace_and_namespaces() {
        let (name, args) = parse("   \\frontend:components:button   primary  ");
        assert_eq!(name, "frontend:components:button");
        assert_eq!(args, vec!["primary"]);
    }

    #[test]
    fn test_not_a_command() {
        assert!(parse_invocation("review-pr 123").is_none());
        assert!(parse_invocation("/review-pr 123").is_none());
        assert!(parse_invocation("\\").is_none());
        assert!(parse_invocation("\\   ").is_none());
    }
}
