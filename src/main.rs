// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;

fn main() -> ExitCode {
    match iced_mosaic::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("iced_mosaic: {err}");
            ExitCode::FAILURE
        }
    }
}
