use speech::to_ordinal_word;

#[test]
fn days_of_month_match_table() {
    let expected = [
        "first",
        "second",
        "third",
        "fourth",
        "fifth",
        "sixth",
        "seventh",
        "eighth",
        "ninth",
        "tenth",
        "eleventh",
        "twelfth",
        "thirteenth",
        "fourteenth",
        "fifteenth",
        "sixteenth",
        "seventeenth",
        "eighteenth",
        "nineteenth",
        "twentieth",
        "twenty-first",
        "twenty-second",
        "twenty-third",
        "twenty-fourth",
        "twenty-fifth",
        "twenty-sixth",
        "twenty-seventh",
        "twenty-eighth",
        "twenty-ninth",
        "thirtieth",
        "thirty-first",
    ];
    for (n, word) in (1..=31).zip(expected) {
        assert_eq!(to_ordinal_word(n), word, "n = {n}");
    }
}

#[test]
fn composes_beyond_the_month() {
    assert_eq!(to_ordinal_word(32), "thirty-second");
    assert_eq!(to_ordinal_word(40), "fortieth");
    assert_eq!(to_ordinal_word(47), "forty-seventh");
    assert_eq!(to_ordinal_word(90), "ninetieth");
    assert_eq!(to_ordinal_word(99), "ninety-ninth");
}

#[test]
fn falls_back_to_numeral() {
    assert_eq!(to_ordinal_word(100), "100th");
    assert_eq!(to_ordinal_word(2025), "2025th");
    assert_eq!(to_ordinal_word(0), "0th");
}
