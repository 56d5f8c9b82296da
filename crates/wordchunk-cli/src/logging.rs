use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The log level number; `default` applies when no `-v` was given.
    fn level(
        &self,
        default: u8,
    ) -> stderrlog::LogLevelNum {
        let level = if self.verbose > 0 {
            default.max(2).saturating_add(self.verbose)
        } else {
            default
        };

        match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level(default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level() {
        let args = LogArgs::default();
        assert!(matches!(args.level(2), stderrlog::LogLevelNum::Warn));

        let args = LogArgs {
            verbose: 1,
            ..Default::default()
        };
        assert!(matches!(args.level(2), stderrlog::LogLevelNum::Info));
        assert!(matches!(args.level(0), stderrlog::LogLevelNum::Info));

        let args = LogArgs {
            verbose: 5,
            ..Default::default()
        };
        assert!(matches!(args.level(2), stderrlog::LogLevelNum::Trace));
    }
}
