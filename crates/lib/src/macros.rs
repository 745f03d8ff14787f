/// Read the puzzle input for the current package.
///
/// The path is resolved relative to the `inputs` directory of the package
/// invoking the macro, unless the CLI options name an override with
/// `--input`.
///
/// Evaluates to the parsed input and the path it was read from.
#[macro_export]
macro_rules! input {
    ($opts:expr, $path:literal) => {{
        let path = $opts.input_path(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path));
        ($crate::env::input(&path)?, path)
    }};
}
