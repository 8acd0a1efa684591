//! Lists the registered color spaces.

use vibrance_color::ColorSpace;

/// Prints the registry in selector order, one space per line.
pub fn run() {
    for space in ColorSpace::ALL {
        let adapter = space.adapter();
        if adapter.norm_factor == 1.0 {
            println!("{}", adapter.name);
        } else {
            println!("{:10} (normalized by {})", adapter.name, adapter.norm_factor);
        }
    }
}
