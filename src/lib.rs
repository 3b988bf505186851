//! `antimeridian-split` rewrites WKT polygons and multipolygons that cross the
//! 180° meridian (the antimeridian) into an equivalent multipolygon whose
//! rings each lie strictly within one longitudinal hemisphere.
//!
//! The rewrite never changes the underlying point set: it only inserts
//! meridian-boundary vertices where an edge crosses ±180° and partitions the
//! result into hemisphere-local polygons, reassigning holes to whichever
//! output polygon contains them.

// Lints {{{

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility,
    future_incompatible,
    rustdoc::all,
    rustdoc::missing_crate_level_docs,
    missing_docs,
    unsafe_code,
    unused,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    warnings,
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    clippy::allow_attributes_without_reason,
    clippy::as_underscore,
    clippy::branches_sharing_code,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::decimal_literal_representation,
    clippy::default_union_representation,
    clippy::derive_partial_eq_without_eq,
    clippy::empty_drop,
    clippy::empty_line_after_outer_attr,
    clippy::empty_structs_with_brackets,
    clippy::equatable_if_let,
    clippy::exhaustive_enums,
    clippy::exit,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::format_push_string,
    clippy::future_not_send,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::iter_on_empty_collections,
    clippy::iter_on_single_items,
    clippy::iter_with_drain,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mem_forget,
    clippy::missing_const_for_fn,
    clippy::mixed_read_write_in_expression,
    clippy::multiple_inherent_impl,
    clippy::mutex_atomic,
    clippy::mutex_integer,
    clippy::needless_collect,
    clippy::non_send_fields_in_send_ty,
    clippy::nonstandard_macro_braces,
    clippy::option_if_let_else,
    clippy::or_fun_call,
    clippy::panic,
    clippy::path_buf_push_overwrite,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::redundant_pub_crate,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::significant_drop_in_scrutinee,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_as_bytes,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trailing_empty_array,
    clippy::trait_duplication_in_bounds,
    clippy::transmute_undefined_repr,
    clippy::trivial_regex,
    clippy::try_err,
    clippy::type_repetition_in_bounds,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unseparated_literal_suffix,
    clippy::unused_peekable,
    clippy::unused_rounding,
    clippy::unwrap_used,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::verbose_file_reads
)]
#![allow(
    // "It requires the user to type the module name twice."
    // => not true here since internal modules are hidden from the users.
    clippy::module_name_repetitions,
    // Usually yes, but not really applicable for most literals in this crate.
    clippy::unreadable_literal,
)]

// }}}

mod coord;
pub mod error;
pub mod geom;
pub mod wkt;

pub use coord::{LatLng, Vec3d};
pub use geom::{MultiPolygon, Polygon, Ring};

// -----------------------------------------------------------------------------

/// Returns `true` if `multipolygon` contains at least one ring whose outer
/// boundary crosses the antimeridian.
///
/// Only the outer ring of each polygon is inspected: an input is assumed to
/// be well-formed, so a hole cannot cross the antimeridian without its outer
/// ring crossing it too.
///
/// # Example
///
/// ```
/// use antimeridian_split::{is_crossed_by_180, LatLng, MultiPolygon, Polygon, Ring};
///
/// let ring = Ring::new(vec![
///     LatLng::from_degrees(-10., 170.)?,
///     LatLng::from_degrees(-10., -170.)?,
///     LatLng::from_degrees(10., -170.)?,
///     LatLng::from_degrees(10., 170.)?,
/// ]);
/// let mp = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);
///
/// assert!(is_crossed_by_180(&mp));
/// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
/// ```
#[must_use]
pub fn is_crossed_by_180(multipolygon: &MultiPolygon) -> bool {
    geom::is_multipolygon_crossed(multipolygon)
}

/// Rewrites `multipolygon` so that no output ring crosses the antimeridian.
///
/// Polygons that do not cross are deep-copied into the result untouched;
/// polygons that do cross are split into one output polygon per hemisphere
/// chunk, with holes reassigned to whichever new polygon contains them.
/// Input order is preserved: the split halves of a crossed polygon take the
/// place of that polygon in the output sequence.
///
/// # Example
///
/// ```
/// use antimeridian_split::{split_by_180, LatLng, MultiPolygon, Polygon, Ring};
///
/// let ring = Ring::new(vec![
///     LatLng::from_degrees(-10., 170.)?,
///     LatLng::from_degrees(-10., -170.)?,
///     LatLng::from_degrees(10., -170.)?,
///     LatLng::from_degrees(10., 170.)?,
/// ]);
/// let mp = MultiPolygon::new(vec![Polygon::new(ring, vec![])]);
///
/// let split = split_by_180(&mp);
/// assert_eq!(split.polygons().len(), 2);
/// # Ok::<(), antimeridian_split::error::InvalidLatLng>(())
/// ```
#[must_use]
pub fn split_by_180(multipolygon: &MultiPolygon) -> MultiPolygon {
    geom::split_multipolygon(multipolygon)
}
