// Builds a two-node chain by front insertion and prints it.

use ptrdrills::driver::drive;
use ptrdrills::Drill;
use std::process::ExitCode;

fn main() -> ExitCode {
    drive(Drill::LinkedList)
}
