use super::parse;
use crate::error::WktErrorKind;

#[test]
fn parses_a_simple_polygon() {
    let mp = parse("POLYGON((0 0, 0 10, 10 10, 10 0))")
        .expect("well-formed polygon");

    assert_eq!(mp.polygons().len(), 1);
    assert_eq!(mp.polygons()[0].outer().len(), 4);
    assert!(mp.polygons()[0].holes().is_empty());
}

#[test]
fn is_case_insensitive_on_the_type_keyword() {
    let mp = parse("polygon((0 0, 0 10, 10 10, 10 0))")
        .expect("lowercase keyword accepted");

    assert_eq!(mp.polygons().len(), 1);
}

#[test]
fn drops_the_explicit_closing_vertex() {
    let mp = parse("POLYGON((0 0, 0 10, 10 10, 10 0, 0 0))")
        .expect("closed ring accepted");

    assert_eq!(mp.polygons()[0].outer().len(), 4);
}

#[test]
fn parses_a_polygon_with_a_hole() {
    let mp = parse(
        "POLYGON((0 0, 0 10, 10 10, 10 0), (2 2, 2 4, 4 4, 4 2))",
    )
    .expect("polygon with hole");

    assert_eq!(mp.polygons()[0].holes().len(), 1);
}

#[test]
fn parses_a_multipolygon() {
    let mp = parse(
        "MULTIPOLYGON(((0 0, 0 10, 10 10, 10 0)), ((20 20, 20 30, 30 30)))",
    )
    .expect("well-formed multipolygon");

    assert_eq!(mp.polygons().len(), 2);
}

#[test]
fn rejects_an_unknown_geometry_type() {
    let err = parse("LINESTRING(0 0, 1 1)").expect_err("wrong type");

    assert_eq!(err.kind, WktErrorKind::InvalidType);
    assert_eq!(err.pos, 0);
}

#[test]
fn rejects_a_missing_opening_paren_at_the_reported_offset() {
    let err = parse("POLYGON0 0, 0 10, 10 10, 10 0))").expect_err("no '('");

    assert_eq!(err.kind, WktErrorKind::LeftParenExpected);
    assert_eq!(err.pos, "POLYGON".len());
}

#[test]
fn rejects_a_missing_inner_ring_parens() {
    let err = parse("POLYGON(10 10, 20 20)").expect_err("flat point list");

    assert_eq!(err.kind, WktErrorKind::LeftParenExpected);
}

#[test]
fn rejects_an_out_of_range_longitude() {
    let err = parse("POLYGON((200 0, 0 10, 10 10))")
        .expect_err("longitude out of range");

    assert_eq!(err.kind, WktErrorKind::CoordinateOutOfRange);
}

#[test]
fn rejects_an_out_of_range_latitude() {
    let err = parse("POLYGON((0 95, 0 10, 10 10))")
        .expect_err("latitude out of range");

    assert_eq!(err.kind, WktErrorKind::CoordinateOutOfRange);
}

#[test]
fn rejects_trailing_content() {
    let err = parse("POLYGON((0 0, 0 10, 10 10)) garbage")
        .expect_err("trailing content");

    assert_eq!(err.kind, WktErrorKind::TrailingContent);
}

#[test]
fn rejects_truncated_input() {
    let err = parse("POLYGON((0 0, 0 10").expect_err("unterminated ring");

    assert_eq!(err.kind, WktErrorKind::UnexpectedEnd);
}

#[test]
fn rejects_stray_characters_between_points() {
    let err = parse("POLYGON((0 0, 0 1.2.3, 10 10))")
        .expect_err("stray '.3' after the second point");

    assert_eq!(err.kind, WktErrorKind::CommaExpected);
}
