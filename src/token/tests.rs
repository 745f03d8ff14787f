use super::{read_token, Kind, Tokens};

const LINES: &[&str] = &[
    "467..114..",
    "...*......",
    "..592.....",
    "...$.*....",
    "1+2=3#x@/%&-",
    "..§..12",
    "",
];

#[test]
fn test_round_trip() {
    for line in LINES {
        let rebuilt = Tokens::new(line)
            .map(|(_, token)| token.value())
            .collect::<String>();

        assert_eq!(rebuilt, *line);
    }
}

#[test]
fn test_partition() {
    for line in LINES {
        let mut tokens = Tokens::new(line);
        let mut expected = 0;

        for (offset, token) in tokens.by_ref() {
            assert_eq!(offset, expected, "{line:?}");
            assert!(token.span() > 0);
            expected += token.span();
        }

        assert_eq!(tokens.offset(), line.len());
        assert!(tokens.is_exhausted());
        assert!(read_token(line, line.len()).is_none());
    }
}

#[test]
fn test_classification() {
    let kinds = Tokens::new("12.*..#345$")
        .map(|(offset, token)| (offset, token.value(), token.kind()))
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        [
            (0, "12", Kind::Number),
            (2, ".", Kind::Period),
            (3, "*", Kind::Symbol),
            (4, ".", Kind::Period),
            (5, ".", Kind::Period),
            (6, "#", Kind::Symbol),
            (7, "345", Kind::Number),
            (10, "$", Kind::Symbol),
        ]
    );
}

#[test]
fn test_symbols_are_single_characters() {
    let token = read_token("**12", 0).unwrap();
    assert_eq!(token.value(), "*");
    assert_eq!(token.span(), 1);

    let token = read_token("§1", 0).unwrap();
    assert_eq!(token.kind(), Kind::Symbol);
    assert_eq!(token.span(), "§".len());
}

#[test]
fn test_whitespace_stops() {
    assert!(read_token(" 12", 0).is_none());
    assert!(read_token("\t", 0).is_none());
    assert!(read_token("12\r", 2).is_none());

    let mut tokens = Tokens::new("1.2 *3");
    assert_eq!(tokens.by_ref().count(), 3);
    assert_eq!(tokens.offset(), 3);
    assert!(!tokens.is_exhausted());
}

#[test]
fn test_out_of_range_offsets() {
    assert!(read_token("12", 3).is_none());
    assert!(read_token("12", usize::MAX).is_none());
    // Inside of a multi-byte character.
    assert!(read_token("§", 1).is_none());
}
