//! Compact pattern-letter grammar.
//!
//! Patterns use single letters for fields: `y` year, `M` month, `d`
//! day, `H` hour-24, `h` hour-12, `m` minute, `s` second. Letter case
//! is significant (`M` is month, `m` is minute). Repeating a letter
//! selects the zero-padded form; any other character is literal text
//! and passes through unchanged.
//!
//! chrono's format engine has compatible semantics but a different
//! surface grammar, so patterns are translated once here and every
//! other module hands chrono a `%`-specifier string.

/// Translate a compact pattern into a chrono format string.
///
/// `yyyy-MM-dd HH:mm:ss` becomes `%Y-%m-%d %H:%M:%S`. Literal `%` in
/// pattern text is escaped for the chrono engine.
pub(crate) fn to_chrono(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }
        match c {
            'y' => out.push_str(if run == 2 { "%y" } else { "%Y" }),
            'M' => out.push_str(if run >= 2 { "%m" } else { "%-m" }),
            'd' => out.push_str(if run >= 2 { "%d" } else { "%-d" }),
            'H' => out.push_str(if run >= 2 { "%H" } else { "%-H" }),
            'h' => out.push_str(if run >= 2 { "%I" } else { "%-I" }),
            'm' => out.push_str(if run >= 2 { "%M" } else { "%-M" }),
            's' => out.push_str(if run >= 2 { "%S" } else { "%-S" }),
            other => {
                for _ in 0..run {
                    if other == '%' {
                        out.push_str("%%");
                    } else {
                        out.push(other);
                    }
                }
            }
        }
    }
    out
}

/// Whether the pattern carries any time-of-day field.
///
/// Date-only patterns parse through a date fallback that fills in
/// midnight; this check selects that path.
pub(crate) fn has_time_fields(pattern: &str) -> bool {
    pattern.chars().any(|c| matches!(c, 'H' | 'h' | 'm' | 's'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_pattern() {
        assert_eq!(to_chrono("yyyy-MM-dd HH:mm:ss"), "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_compact_patterns() {
        assert_eq!(to_chrono("yyyyMMddHHmmss"), "%Y%m%d%H%M%S");
        assert_eq!(to_chrono("yyyyMMdd"), "%Y%m%d");
        assert_eq!(to_chrono("HHmmss"), "%H%M%S");
    }

    #[test]
    fn test_cjk_literals_pass_through() {
        assert_eq!(to_chrono("yyyy年MM月dd日"), "%Y年%m月%d日");
        assert_eq!(to_chrono("yyyy年MM月dd日 HH时mm分ss秒"), "%Y年%m月%d日 %H时%M分%S秒");
    }

    #[test]
    fn test_single_letters_unpadded() {
        assert_eq!(to_chrono("y-M-d H:m:s"), "%Y-%-m-%-d %-H:%-M:%-S");
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(to_chrono("yyMMdd"), "%y%m%d");
    }

    #[test]
    fn test_hour_case_is_significant() {
        assert_eq!(to_chrono("hh:mm"), "%I:%M");
        assert_eq!(to_chrono("HH:mm"), "%H:%M");
    }

    #[test]
    fn test_percent_is_escaped() {
        assert_eq!(to_chrono("HH%"), "%H%%");
    }

    #[test]
    fn test_has_time_fields() {
        assert!(has_time_fields("yyyy-MM-dd HH:mm:ss"));
        assert!(has_time_fields("HHmmss"));
        assert!(!has_time_fields("yyyy-MM-dd"));
        assert!(!has_time_fields("yyyy年MM月dd日"));
    }
}
