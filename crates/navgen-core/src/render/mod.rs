/// Text backends for generated units
///
/// A backend receives a [`GeneratedUnit`](crate::GeneratedUnit) and owns every
/// syntactic decision: quoting, escaping, identifier rules and layout. The
/// Rust token backend lives in `navgen-macro` next to the attribute host.

pub mod kotlin;
