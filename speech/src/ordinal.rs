//! Ordinal words for day-of-month numbers.

/// Ordinal words for 1 through 31, indexed from zero.
const DAY_ORDINALS: [&str; 31] = [
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

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const TENS_ORDINALS: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

/// Convert `n` to its ordinal word, e.g. `7` to `"seventh"`.
///
/// Days of the month come straight from a table. Values up to 99 are
/// composed from tens and ones (`47` is `"forty-seventh"`); anything else
/// falls back to a numeral with a `th` suffix.
pub fn to_ordinal_word(n: u32) -> String {
    match n {
        1..=31 => DAY_ORDINALS[n as usize - 1].to_string(),
        32..=99 => {
            let tens = (n / 10) as usize;
            match n % 10 {
                0 => TENS_ORDINALS[tens].to_string(),
                ones => format!("{}-{}", TENS[tens], DAY_ORDINALS[ones as usize - 1]),
            }
        }
        _ => format!("{n}th"),
    }
}
