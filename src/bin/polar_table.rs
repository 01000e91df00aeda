/*!
Print a table of complex values in rectangular and polar form.

usage: polar_table <table.toml> [--divide-by <name>]

With `--divide-by`, every value in the table is also divided by the named
entry. Set `RUST_LOG` (e.g. `RUST_LOG=debug`) to see what the library is
doing.
*/

use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use polar_cx::{rw, Cx};

const USAGE: &str = "usage: polar_table <table.toml> [--divide-by <name>]";

struct Args {
    fname: String,
    divisor: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let mut fname: Option<String> = None;
    let mut divisor: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--divide-by" => match args.next() {
                Some(name) => { divisor = Some(name); },
                None => { return Err("--divide-by needs a name".to_owned()); },
            },
            "-h" | "--help" => { return Err(USAGE.to_owned()); },
            _ if fname.is_none() => { fname = Some(arg); },
            _ => { return Err(format!("unexpected argument: {}", &arg)); },
        }
    }

    match fname {
        Some(fname) => Ok(Args { fname, divisor }),
        None => Err(USAGE.to_owned()),
    }
}

fn describe(name: &str, z: Cx) -> String {
    let (r, theta) = z.to_polar();
    if theta.is_nan() {
        warn!(%name, value = %z, "phase is undefined");
    }
    format!("{:>12}  {:<28} |z| = {:<16} arg = {}", name, z.to_string(), r, theta)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", &e);
            return ExitCode::FAILURE;
        },
    };

    let table = match rw::load(&args.fname) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", &e);
            return ExitCode::FAILURE;
        },
    };

    let divisor = match &args.divisor {
        None => None,
        Some(name) => match table.get(name) {
            Some(z) => Some((name.as_str(), z)),
            None => {
                eprintln!("no value named {:?} in {}", name, &args.fname);
                return ExitCode::FAILURE;
            },
        },
    };

    for (name, z) in table.iter() {
        println!("{}", describe(name, z));
        if let Some((dname, d)) = divisor {
            match z / d {
                Ok(q) => println!("{:>12}  {}", format!("/ {}", dname), describe("", q)),
                Err(e) => println!("{:>12}  {}", format!("/ {}", dname), &e),
            }
        }
    }

    ExitCode::SUCCESS
}
