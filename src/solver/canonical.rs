/// Strip parenthesis pairs that enclose the entire string, repeating until
/// none remains.
///
/// Inner grouping is left intact; a pair is only removed when its opening
/// parenthesis balances exactly at the final character.
pub fn strip_outer_parens(text: &str) -> String {
    let mut s = text.to_string();
    while encloses_whole(&s) {
        s = s[1..s.len() - 1].to_string();
    }
    s
}

fn encloses_whole(s: &str) -> bool {
    if !(s.starts_with('(') && s.ends_with(')')) {
        return false;
    }
    let mut depth = 0i32;
    for (i, ch) in s.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && i != s.len() - 1 {
            return false;
        }
    }
    depth == 0
}
