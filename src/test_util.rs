use winnow::ModalResult;

pub fn generic_command_parse<'a, F, T>(mut parser: F, input: &'a str, expect: T)
where
    F: FnMut(&mut &'a str) -> ModalResult<T>,
    T: PartialEq + std::fmt::Debug,
{
    let mut rest = input;
    let result = parser(&mut rest);
    assert!(result.is_ok(), "The result:\r\n{:#?}", result);
    let res = result.unwrap();
    assert_eq!(
        expect, res,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, res
    );
}

pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let result = parser(input);
    assert_eq!(
        expect, result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, result
    );
}

/// Split a line the way cmd.exe hands quoted arguments to a program:
/// `"` toggles quoting and `""` inside quotes is a literal quote.
pub fn split_batch(line: &str) -> Vec<String> {
    split_with_doubled_quote(line, '"')
}

/// Split a line by PowerShell's single-quoted string rules: `''` inside
/// quotes is a literal quote.
pub fn split_powershell(line: &str) -> Vec<String> {
    split_with_doubled_quote(line, '\'')
}

fn split_with_doubled_quote(line: &str, quote: char) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if quoted {
            if c == quote {
                if chars.peek() == Some(&quote) {
                    chars.next();
                    current.push(quote);
                } else {
                    quoted = false;
                }
            } else {
                current.push(c);
            }
        } else if c == quote {
            quoted = true;
            started = true;
        } else if c.is_whitespace() {
            if started {
                args.push(std::mem::take(&mut current));
                started = false;
            }
        } else {
            current.push(c);
            started = true;
        }
    }
    if started {
        args.push(current);
    }
    args
}
