use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut html = String::new();
    io::stdin().read_to_string(&mut html).expect("read stdin");
    match fragdown::html_to_markdown(&html) {
        Ok(md) => {
            println!("{md}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
