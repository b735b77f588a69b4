use std::process::ExitCode;

use ringfield::{AppError, PixelBuffer, Simulation};

const USAGE: &str = "usage: ringfield [IMAGE_A IMAGE_B] [--seed N]";

/// Parsed command line.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run { paths: Vec<String>, seed: Option<u64> },
}

/// Parse arguments (without the program name).
///
/// A missing or non-numeric `--seed` value is an error rather than a
/// silent fall back to a clock seed.
fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut paths = Vec::new();
    let mut seed = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed needs a value".to_string())?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|e| format!("invalid --seed '{}': {}", value, e))?;
                seed = Some(parsed);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => paths.push(arg),
        }
    }

    if !matches!(paths.len(), 0 | 2) {
        return Err(format!("expected 0 or 2 image paths, got {}", paths.len()));
    }

    Ok(Command::Run { paths, seed })
}

fn run() -> Result<ExitCode, AppError> {
    let (paths, seed) = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Command::Run { paths, seed }) => (paths, seed),
        Err(msg) => {
            eprintln!("ringfield: {}", msg);
            eprintln!("{}", USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let mut sim = Simulation::new();
    match paths.as_slice() {
        [a, b] => {
            sim = sim.with_images(PixelBuffer::from_file(a)?, PixelBuffer::from_file(b)?);
        }
        _ => log::info!("No images given, using generated gradients"),
    }
    if let Some(seed) = seed {
        sim = sim.with_seed(seed);
    }

    sim.run()?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("ringfield: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_images_and_seed() {
        let cmd = parse_args(args(&["a.png", "b.png", "--seed", "42"])).unwrap();
        assert_eq!(
            cmd,
            Command::Run {
                paths: args(&["a.png", "b.png"]),
                seed: Some(42),
            }
        );
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse_args(Vec::new()).unwrap(),
            Command::Run { paths: Vec::new(), seed: None }
        );
    }

    #[test]
    fn test_seed_missing_value_is_error() {
        assert!(parse_args(args(&["a.png", "b.png", "--seed"])).is_err());
    }

    #[test]
    fn test_seed_malformed_is_error() {
        assert!(parse_args(args(&["a.png", "b.png", "--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--seed", "-3"])).is_err());
    }

    #[test]
    fn test_bad_later_seed_does_not_fall_back() {
        assert!(parse_args(args(&["--seed", "7", "--seed", "x"])).is_err());
    }

    #[test]
    fn test_wrong_path_count_is_error() {
        assert!(parse_args(args(&["only.png"])).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(args(&["--help"])).unwrap(), Command::Help);
    }
}
