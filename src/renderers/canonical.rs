//! Canonical RTTTL reconstruction

use crate::parse::name::truncate_name;
use crate::parse::ParseResult;

/// Rebuild `name:defaults:notes` from a parse result.
///
/// The name is cut to 20 characters. A valid defaults part is kept as
/// written, otherwise it is regenerated from the effective defaults. The
/// notes part is always kept verbatim.
pub fn to_rtttl(result: &ParseResult) -> String {
    let defaults = if result.is_defaults_valid() {
        result.defaults_str().to_string()
    } else {
        result.defaults().to_string()
    };

    format!(
        "{}:{}:{}",
        truncate_name(result.name()),
        defaults,
        result.notes_str()
    )
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;

    #[test]
    fn test_valid_parts_kept_verbatim() {
        let input = "Flntstn:d=4,o=5,b=200:g#,c#,8p,c#6,8a#";
        assert_eq!(parse(input).to_rtttl(), input);
    }

    #[test]
    fn test_empty_defaults_kept_empty() {
        assert_eq!(parse("Tune::c,d").to_rtttl(), "Tune::c,d");
    }

    #[test]
    fn test_invalid_defaults_regenerated() {
        let result = parse("Tune:d=99, b=120:c,x,4c....");
        assert_eq!(result.to_rtttl(), "Tune:d=32,o=6,b=125:c,x,4c....");
    }

    #[test]
    fn test_long_name_truncated() {
        let result = parse("ThisNameIsMuchTooLongForRtttl:d=4:c");
        assert_eq!(result.to_rtttl(), "ThisNameIsMuchTooLon:d=4:c");
    }

    #[test]
    fn test_display_matches_to_rtttl() {
        let result = parse("A:o=7:c");
        assert_eq!(result.to_string(), result.to_rtttl());
    }
}
