use clap::Parser;

pub const MIN_ID_LENGTH_ENV: &str = "LINKLET_MIN_ID_LENGTH";
pub const MAX_ID_LENGTH_ENV: &str = "LINKLET_MAX_ID_LENGTH";
pub const MAX_CREATION_ATTEMPTS_ENV: &str = "LINKLET_MAX_CREATION_ATTEMPTS";

pub const DEFAULT_MIN_ID_LENGTH: usize = 3;
pub const DEFAULT_MAX_ID_LENGTH: usize = 16;
pub const DEFAULT_MAX_CREATION_ATTEMPTS: u32 = 10;

/// Startup options for the console front end.
#[derive(Debug, Parser)]
#[command(name = "linklet")]
pub struct Cli {
    #[arg(long, env = MIN_ID_LENGTH_ENV, default_value_t = DEFAULT_MIN_ID_LENGTH)]
    pub min_id_length: usize,

    #[arg(long, env = MAX_ID_LENGTH_ENV, default_value_t = DEFAULT_MAX_ID_LENGTH)]
    pub max_id_length: usize,

    #[arg(
        long,
        env = MAX_CREATION_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_CREATION_ATTEMPTS
    )]
    pub max_creation_attempts: u32,
}

/// One line of console input, parsed as a command.
#[derive(Debug, Parser)]
#[command(name = "linklet", no_binary_name = true)]
pub enum ReplCommand {
    /// Creates a short url.
    Create {
        /// The target url for the short url being created.
        #[arg(short, long)]
        target_url: String,

        /// A desired identifier for the short url being created.
        #[arg(short = 'i', long)]
        desired_id: Option<String>,
    },
    /// Retrieves a short url and its metrics.
    Get {
        /// The identifier of the short url being retrieved.
        short_id: String,
    },
    /// Deletes a short url.
    Delete {
        /// The identifier of the short url being deleted.
        short_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_desired_id() {
        let command = ReplCommand::try_parse_from([
            "create",
            "--target-url",
            "https://example.com",
            "--desired-id",
            "potato",
        ])
        .unwrap();

        match command {
            ReplCommand::Create {
                target_url,
                desired_id,
            } => {
                assert_eq!(target_url, "https://example.com");
                assert_eq!(desired_id.as_deref(), Some("potato"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_get_and_delete() {
        assert!(matches!(
            ReplCommand::try_parse_from(["get", "potato"]).unwrap(),
            ReplCommand::Get { .. }
        ));
        assert!(matches!(
            ReplCommand::try_parse_from(["delete", "potato"]).unwrap(),
            ReplCommand::Delete { .. }
        ));
    }

    #[test]
    fn unknown_command_is_a_parse_error() {
        assert!(ReplCommand::try_parse_from(["frobnicate"]).is_err());
    }
}
