//! Module docs with ```svgbob diagrams go through `with_diagrams!`. With the `doc`
//! feature the diagrams are rendered to SVG by `svgbobdoc`; without it the doc lines
//! are joined unchanged and the diagrams show as plain text.

#[cfg(feature = "doc")]
macro_rules! with_diagrams {
    ($($lines:tt)*) => {
        svgbobdoc::transform!($($lines)*)
    };
}

#[cfg(not(feature = "doc"))]
macro_rules! with_diagrams {
    ($( #![doc = $line:literal] )*) => {
        core::concat!($( $line, '\n' ),*)
    };
}

pub(crate) use with_diagrams;
