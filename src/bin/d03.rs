use lib::cli::{self, Opts};
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let (input, path) = lib::input!(opts, "d03.txt");
    cli::run(&opts, &path, input, Some((4361, 467835)), gears::solve)
}
