// Sums the endpoints and the full range of a view over an array.

use ptrdrills::driver::drive;
use ptrdrills::Drill;
use std::process::ExitCode;

fn main() -> ExitCode {
    drive(Drill::SliceView)
}
