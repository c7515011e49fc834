use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    positional: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();
        let mut add = |name: &str, short: &str, long: &str, description: &str, takes_value| {
            flags.insert(
                name.to_string(),
                Flag {
                    short: short.to_string(),
                    long: long.to_string(),
                    description: description.to_string(),
                    takes_value,
                    value: None,
                },
            );
        };

        add("help", "-h", "--help", "Print this help message", false);
        add("version", "-v", "--version", "Show version information", false);
        add("command", "-c", "--command", "Run the given command chain and exit", true);
        add("quiet", "-q", "--quiet", "Suppress prompts and warnings", false);
        add("debug", "-d", "--debug", "Enable debug logging", false);

        Flags {
            flags,
            positional: Vec::new(),
        }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            match self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
            {
                Some(flag) if flag.takes_value => {
                    let value = args.get(i + 1).ok_or_else(|| {
                        ShellError::FlagError(format!("Flag {} requires a value", arg))
                    })?;
                    flag.value = Some(value.clone());
                    i += 1;
                }
                Some(flag) => flag.value = Some("true".to_string()),
                None if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(ShellError::FlagError(format!("unknown flag: {}", arg)));
                }
                None => self.positional.push(arg.clone()),
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn print_help(&self) {
        println!("Usage: pish [OPTIONS] [SCRIPT]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_boolean_flags() {
        let flags = parse(&["-q", "--debug"]).unwrap();
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_command_takes_value() {
        let flags = parse(&["-c", "echo hi; -q"]).unwrap();
        assert_eq!(flags.get_value("command").map(String::as_str), Some("echo hi; -q"));
        assert!(!flags.is_set("quiet"));
        assert!(flags.positional().is_empty());
    }

    #[test]
    fn test_command_missing_value() {
        assert!(matches!(parse(&["--command"]), Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_positional_script() {
        let flags = parse(&["-q", "script.pish"]).unwrap();
        assert_eq!(flags.positional(), &["script.pish".to_string()]);
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(parse(&["--frobnicate"]), Err(ShellError::FlagError(_))));
    }
}
