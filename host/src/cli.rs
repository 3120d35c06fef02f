// Argument parsing for the bounce-params binary

use bounce_core::Preset;
use std::str::FromStr;

/// Options shared by the `show`, `check` and `export` commands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub preset: Preset,
    pub config: Option<String>,
    pub positional: Vec<String>,
}

impl Options {
    /// Fail if more than `max` positional arguments were given.
    pub fn at_most(&self, max: usize) -> Result<(), String> {
        match self.positional.get(max) {
            Some(extra) => Err(format!("Unexpected argument: {}", extra)),
            None => Ok(()),
        }
    }

    /// Config file for `check`: `--config` or one positional, never both.
    pub fn check_target(&self) -> Result<String, String> {
        match (self.config.as_deref(), self.positional.as_slice()) {
            (Some(_), [extra, ..]) => Err(format!(
                "Unexpected argument: {} (config already given with --config)",
                extra
            )),
            (Some(c), []) => Ok(c.to_string()),
            (None, [c]) => Ok(c.clone()),
            (None, [_, extra, ..]) => Err(format!("Unexpected argument: {}", extra)),
            (None, []) => Err("Missing required argument".to_string()),
        }
    }
}

pub fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--preset" | "-p" => {
                let value = args
                    .get(i + 1)
                    .ok_or("--preset requires a value (classic|wide)")?;
                opts.preset = Preset::from_str(value)?;
                i += 2;
            }
            "--config" | "-c" => {
                let value = args.get(i + 1).ok_or("--config requires a file path")?;
                opts.config = Some(value.clone());
                i += 2;
            }
            other => {
                opts.positional.push(other.to_string());
                i += 1;
            }
        }
    }

    Ok(opts)
}

/// Report file for `verify`: exactly one positional argument.
pub fn verify_target(args: &[String]) -> Result<String, String> {
    match args {
        [file] => Ok(file.clone()),
        [] => Err("Missing required argument".to_string()),
        [_, extra, ..] => Err(format!("Unexpected argument: {}", extra)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_preset_and_config() {
        let opts = parse_options(&args(&["--preset", "wide", "-c", "x.json", "out.json"])).unwrap();
        assert_eq!(opts.preset, Preset::Wide);
        assert_eq!(opts.config.as_deref(), Some("x.json"));
        assert_eq!(opts.positional, args(&["out.json"]));
    }

    #[test]
    fn missing_option_values_are_errors() {
        assert!(parse_options(&args(&["--preset"])).is_err());
        assert!(parse_options(&args(&["--config"])).is_err());
        assert!(parse_options(&args(&["--preset", "square"])).is_err());
    }

    #[test]
    fn check_rejects_config_given_twice() {
        let opts = parse_options(&args(&["--config", "a.json", "b.json"])).unwrap();
        let err = opts.check_target().unwrap_err();
        assert!(err.contains("b.json"), "unexpected error: {}", err);

        let opts = parse_options(&args(&["a.json", "b.json"])).unwrap();
        assert!(opts.check_target().is_err());

        let opts = parse_options(&args(&[])).unwrap();
        assert!(opts.check_target().is_err());
    }

    #[test]
    fn check_accepts_either_form() {
        let flag = parse_options(&args(&["--config", "a.json"])).unwrap();
        assert_eq!(flag.check_target().unwrap(), "a.json");

        let positional = parse_options(&args(&["a.json", "-p", "wide"])).unwrap();
        assert_eq!(positional.check_target().unwrap(), "a.json");
    }

    #[test]
    fn at_most_limits_positionals() {
        let opts = parse_options(&args(&["out.json", "extra"])).unwrap();
        assert!(opts.at_most(2).is_ok());
        assert_eq!(
            opts.at_most(1).unwrap_err(),
            "Unexpected argument: extra".to_string()
        );
        assert!(opts.at_most(0).is_err());
    }

    #[test]
    fn verify_takes_exactly_one_file() {
        assert_eq!(verify_target(&args(&["r.json"])).unwrap(), "r.json");
        assert!(verify_target(&args(&[])).is_err());
        assert!(verify_target(&args(&["r.json", "extra"]))
            .unwrap_err()
            .contains("extra"));
    }
}
