use regex::Regex;

/// Matches `POINT`, optional whitespace, `(`, then two signed decimals.
/// Anything after the second number (a Z coordinate, the closing
/// parenthesis, trailing junk) is deliberately ignored; source exports are
/// messy and the permissive match is part of the contract.
const POINT_PATTERN: &str =
    r"(?i)POINT\s*\(\s*([+-]?\d+(?:\.\d+)?)\s+([+-]?\d+(?:\.\d+)?)";

/// Extracts RD New coordinate pairs from WKT-like `POINT(x y)` strings.
pub struct PointParser {
    re: Regex,
}

impl PointParser {
    pub fn new() -> Self {
        Self {
            re: Regex::new(POINT_PATTERN).expect("POINT pattern is a valid regex"),
        }
    }

    /// Parse one geometry field value into `(x_rd, y_rd)`.
    ///
    /// Returns `None` for empty cells and for values that do not contain a
    /// `POINT(x y)` match. No range check is applied; out-of-range numbers
    /// pass through to the reprojection stage.
    pub fn parse(&self, value: &str) -> Option<(f64, f64)> {
        let captures = self.re.captures(value)?;
        let x = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let y = captures.get(2)?.as_str().parse::<f64>().ok()?;
        Some((x, y))
    }
}

impl Default for PointParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_point() {
        let parser = PointParser::new();
        let (x, y) = parser.parse("POINT(123456.78 487654.32)").unwrap();
        assert_eq!(x, 123456.78);
        assert_eq!(y, 487654.32);
    }

    #[test]
    fn test_parses_space_before_parenthesis() {
        let parser = PointParser::new();
        let (x, y) = parser.parse("POINT (123456.78 487654.32)").unwrap();
        assert_eq!(x, 123456.78);
        assert_eq!(y, 487654.32);
    }

    #[test]
    fn test_case_insensitive() {
        let parser = PointParser::new();
        assert_eq!(parser.parse("point(1 2)"), Some((1.0, 2.0)));
        assert_eq!(parser.parse("Point( 1 2 )"), Some((1.0, 2.0)));
    }

    #[test]
    fn test_signed_and_integer_coordinates() {
        let parser = PointParser::new();
        assert_eq!(parser.parse("POINT(-1.5 +2)"), Some((-1.5, 2.0)));
    }

    #[test]
    fn test_ignores_trailing_content() {
        let parser = PointParser::new();
        // Z coordinate and missing parenthesis are both tolerated.
        assert_eq!(
            parser.parse("POINT(155000 463000 3.2)"),
            Some((155000.0, 463000.0))
        );
        assert_eq!(parser.parse("POINT(155000 463000"), Some((155000.0, 463000.0)));
    }

    #[test]
    fn test_rejects_other_geometries_and_junk() {
        let parser = PointParser::new();
        assert_eq!(parser.parse("LINESTRING(1 2, 3 4)"), None);
        assert_eq!(parser.parse(""), None);
        assert_eq!(parser.parse("POINT()"), None);
        assert_eq!(parser.parse("155000 463000"), None);
    }
}
