use crate::error::{WktError, WktErrorKind};
use crate::geom::{MultiPolygon, Polygon, Ring};
use crate::LatLng;

/// Parses a WKT `POLYGON` or `MULTIPOLYGON` document into a [`MultiPolygon`].
///
/// Coordinates are read as degrees (`lng` in `[-180, 180]`, `lat` in
/// `[-90, 90]`) and converted to radians. A ring's closing vertex, if
/// repeated, is dropped: the in-memory [`Ring`] never stores it.
pub(crate) fn parse(input: &str) -> Result<MultiPolygon, WktError> {
    let mut parser = Parser::new(input);

    parser.skip_ws();
    let is_multi = parser.parse_type()?;
    parser.skip_ws();

    let multipolygon = if is_multi {
        MultiPolygon::new(parser.parse_polygon_list()?)
    } else {
        MultiPolygon::new(vec![parser.parse_polygon()?])
    };

    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.error(WktErrorKind::TrailingContent));
    }

    Ok(multipolygon)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn at_end(&self) -> bool {
        self.rest().is_empty()
    }

    const fn error(&self, kind: WktErrorKind) -> WktError {
        WktError::new(kind, self.pos)
    }

    fn expect_char(
        &mut self,
        expected: char,
        kind: WktErrorKind,
    ) -> Result<(), WktError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(_) => Err(self.error(kind)),
            None => Err(self.error(WktErrorKind::UnexpectedEnd)),
        }
    }

    /// Reads the `POLYGON`/`MULTIPOLYGON` keyword, case-insensitively.
    fn parse_type(&mut self) -> Result<bool, WktError> {
        self.skip_ws();
        let start = self.pos;
        let ident_len: usize = self
            .rest()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .map(char::len_utf8)
            .sum();

        if ident_len == 0 {
            return Err(self.error(WktErrorKind::TypeExpected));
        }

        let ident = &self.rest()[..ident_len];
        let is_multi = if ident.eq_ignore_ascii_case("MULTIPOLYGON") {
            true
        } else if ident.eq_ignore_ascii_case("POLYGON") {
            false
        } else {
            return Err(WktError::new(WktErrorKind::InvalidType, start));
        };

        self.pos += ident_len;
        Ok(is_multi)
    }

    /// Reads a single floating point literal (with an optional sign and
    /// exponent), ASCII-only as WKT numbers always are.
    fn parse_number(&mut self) -> Result<f64, WktError> {
        self.skip_ws();
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut i = self.pos;

        if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
            i += 1;
        }
        let mantissa_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        if i == mantissa_start {
            return Err(self.error(WktErrorKind::NumberExpected));
        }
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
                j += 1;
            }
            let exp_start = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > exp_start {
                i = j;
            }
        }

        let text = &self.input[start..i];
        self.pos = i;
        text.parse::<f64>()
            .map_err(|_err| WktError::new(WktErrorKind::InvalidNumber, start))
    }

    fn parse_point(&mut self) -> Result<LatLng, WktError> {
        self.skip_ws();
        let lng_pos = self.pos;
        let lng = self.parse_number()?;
        self.skip_ws();
        let lat_pos = self.pos;
        let lat = self.parse_number()?;

        if !(-180. ..=180.).contains(&lng) {
            return Err(WktError::new(
                WktErrorKind::CoordinateOutOfRange,
                lng_pos,
            ));
        }
        if !(-90. ..=90.).contains(&lat) {
            return Err(WktError::new(
                WktErrorKind::CoordinateOutOfRange,
                lat_pos,
            ));
        }

        Ok(LatLng::from_degrees(lat, lng).expect("range checked above"))
    }

    fn parse_ring(&mut self) -> Result<Ring, WktError> {
        let mut points = self.parse_delimited_list(Self::parse_point)?;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Ok(Ring::new(points))
    }

    fn parse_polygon(&mut self) -> Result<Polygon, WktError> {
        let mut rings = self.parse_delimited_list(Self::parse_ring)?;
        let outer = rings.remove(0);
        Ok(Polygon::new(outer, rings))
    }

    fn parse_polygon_list(&mut self) -> Result<Vec<Polygon>, WktError> {
        self.parse_delimited_list(Self::parse_polygon)
    }

    /// Parses `'(' item { ',' item } ')'`, the shape shared by point lists,
    /// ring lists and polygon lists.
    fn parse_delimited_list<T>(
        &mut self,
        mut parse_item: impl FnMut(&mut Self) -> Result<T, WktError>,
    ) -> Result<Vec<T>, WktError> {
        self.expect_char('(', WktErrorKind::LeftParenExpected)?;
        let mut items = vec![parse_item(self)?];

        loop {
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                    items.push(parse_item(self)?);
                }
                Some(')') => break,
                Some(_) => return Err(self.error(WktErrorKind::CommaExpected)),
                None => return Err(self.error(WktErrorKind::UnexpectedEnd)),
            }
        }

        self.expect_char(')', WktErrorKind::RightParenExpected)?;
        Ok(items)
    }
}

#[cfg(test)]
#[path = "./reader_tests.rs"]
mod tests;
