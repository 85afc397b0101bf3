// Rotates three integers in place through pointers.

use ptrdrills::driver::drive;
use ptrdrills::Drill;
use std::process::ExitCode;

fn main() -> ExitCode {
    drive(Drill::Rotation)
}
