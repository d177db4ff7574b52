//! Simple command that prints one or '-n count' UUID strings of '-v version' (default 4)

use std::{env, io, io::Write, process::ExitCode};

use uuid4122::generator::{self, Generator};
use uuid4122::Version;

struct Options {
    count: usize,
    version: Version,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-v version]",
                    program.as_deref().unwrap_or("uuidgen")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut g = generator::new_generator(opts.version);
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        match g.generate() {
            Ok(uuid) => writeln!(buf, "{}", uuid)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut version = None;
    while let Some(arg) = args.next() {
        let name = match arg.as_str() {
            "-n" if count.is_none() => "n",
            "-v" if version.is_none() => "v",
            "-n" | "-v" => return Err(format!("option '{}' given more than once", &arg[1..])),
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", name));
        };
        if name == "n" {
            let Ok(c) = value.parse() else {
                return Err(format!("invalid argument to option 'n': '{}'", value));
            };
            count.replace(c);
        } else {
            let Some(v) = value.parse::<u8>().ok().filter(|v| *v < 16) else {
                return Err(format!("invalid argument to option 'v': '{}'", value));
            };
            version.replace(Version::from(v));
        }
    }
    Ok(Options {
        count: count.unwrap_or(1),
        version: version.unwrap_or(Version::RANDOM),
    })
}
