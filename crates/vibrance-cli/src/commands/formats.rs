//! Lists the registered save formats.

use vibrance_io::SaveFormat;

/// Prints the format table in registration order as `key - name`.
pub fn run() {
    for format in SaveFormat::ALL {
        println!("{:8} {}", format.key(), format.name());
    }
}
