use std::fs::File;

use prepare::output;

fn main()
{
    output::write(
        &mut File::create("./../data/width_gcb.rs.txt").unwrap(),
        &mut File::create("./../data/width_gcb.stats.txt").unwrap(),
    );
}
