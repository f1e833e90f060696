/// Split one raw directory line into ordered candidate tokens.
///
/// Two stages: split on commas and on a period followed by whitespace,
/// then repair OCR jitter — a stray single character separated by a
/// space at either edge of a piece becomes its own token.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for piece in split_delimiters(line) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        for part in jitter_split(piece) {
            if !part.is_empty() {
                tokens.push(part);
            }
        }
    }
    tokens
}

/// Cut at `,` and at `". "`; the delimiter itself is discarded.
fn split_delimiters(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == ',' {
            pieces.push(std::mem::take(&mut current));
            i += 1;
        } else if c == '.' && chars.get(i + 1).is_some_and(|n| n.is_whitespace()) {
            pieces.push(std::mem::take(&mut current));
            i += 2;
        } else {
            current.push(c);
            i += 1;
        }
    }
    pieces.push(current);
    pieces
}

/// Isolate a single character bounded by a space at the start and/or end
/// of a piece (e.g. `"A SMITH"` or `"JOHN A"`). Typeset directory lines
/// render initials and abbreviation markers this way inside what should
/// be one token.
fn jitter_split(piece: &str) -> Vec<String> {
    let chars: Vec<char> = piece.chars().collect();
    let len = chars.len();
    let second_is_space = len >= 2 && chars[1] == ' ';
    let penultimate_is_space = len >= 2 && chars[len - 2] == ' ';

    let collect = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();

    if second_is_space && penultimate_is_space {
        let middle = if len >= 4 { collect(2..len - 2) } else { String::new() };
        vec![collect(0..1), middle, collect(len - 1..len)]
    } else if second_is_space {
        vec![collect(0..1), collect(2..len)]
    } else if penultimate_is_space {
        vec![collect(0..len - 2), collect(len - 1..len)]
    } else {
        vec![piece.to_string()]
    }
}
