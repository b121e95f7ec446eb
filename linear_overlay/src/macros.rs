/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the geometry macros. Used for extracting macro repetition count
/// for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a linestring with the points given as a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use linear_overlay::linestring;
/// # use linear_overlay::core::math::*;
/// # use linear_overlay::geometry::*;
/// let ls: LineString = linestring![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(ls.len(), 2);
/// assert_eq!(ls[1], vec2(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! linestring {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            #[allow(unused_mut)]
            let mut ls = $crate::geometry::LineString::with_capacity(size);
            $(
                ls.add($x.0, $x.1);
            )*
            ls
        }
    };
}

/// Construct a multi-linestring with each linestring given as a bracketed list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use linear_overlay::multi_linestring;
/// # use linear_overlay::geometry::*;
/// let mls: MultiLineString = multi_linestring![[(0.0, 0.0), (1.0, 1.0)], [(2.0, 2.0), (3.0, 2.0)]];
/// assert_eq!(mls.len(), 2);
/// let empty: MultiLineString = multi_linestring![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! multi_linestring {
    ($( [ $( $x:expr ),* $(,)? ] ),* $(,)?) => {
        {
            #[allow(unused_mut)]
            let mut mls = $crate::geometry::MultiLineString::new();
            $(
                mls.push($crate::linestring![$($x),*]);
            )*
            mls
        }
    };
}
