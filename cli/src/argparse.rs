use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "wb-search",
    about = "Build web archive listing queries",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log debug output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the listing URL for a search
    Query(QueryArgs),
    /// List the filter modifiers and their labels
    Modifiers,
    /// Check that date values are 4 to 14 digit timestamps
    CheckDate(CheckDateArgs),
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Archive collection prefix, e.g. http://localhost:8080/pywb/ [default: $WB_SEARCH_PREFIX]
    #[arg(long)]
    pub prefix: Option<String>,

    /// URL to search for
    pub url: String,

    /// Filter as FIELD MODIFIER EXPRESSION, e.g. --filter mime == text/html
    #[arg(
        long,
        num_args = 3,
        value_names = ["FIELD", "MODIFIER", "EXPRESSION"],
        action = ArgAction::Append,
        allow_hyphen_values = true
    )]
    pub filter: Vec<String>,

    /// Match type, e.g. exact, prefix, host, domain
    #[arg(long)]
    pub match_type: Option<String>,

    /// Earliest timestamp, YYYY[MMDDHHMMSS]
    #[arg(long)]
    pub from: Option<String>,

    /// Latest timestamp, YYYY[MMDDHHMMSS]
    #[arg(long)]
    pub to: Option<String>,
}

impl QueryArgs {
    /// Filters as (field, modifier, expression) in the order given
    pub fn filters(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.filter
            .chunks_exact(3)
            .map(|chunk| (chunk[0].as_str(), chunk[1].as_str(), chunk[2].as_str()))
    }
}

#[derive(Args, Debug)]
pub struct CheckDateArgs {
    /// Date values to check
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_with_filters() {
        let cli = Cli::try_parse_from([
            "wb-search",
            "query",
            "--prefix",
            "/pywb/",
            "example.com/*",
            "--filter",
            "url",
            "=",
            "example.com",
            "--filter",
            "status",
            "=!=",
            "404",
            "--match-type",
            "prefix",
            "--from",
            "2019",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.prefix.as_deref(), Some("/pywb/"));
        assert_eq!(args.url, "example.com/*");
        let filters: Vec<_> = args.filters().collect();
        assert_eq!(
            filters,
            vec![("url", "=", "example.com"), ("status", "=!=", "404")]
        );
        assert_eq!(args.match_type.as_deref(), Some("prefix"));
        assert_eq!(args.from.as_deref(), Some("2019"));
        assert!(args.to.is_none());
    }

    #[test]
    fn test_filter_needs_three_values() {
        let result = Cli::try_parse_from(["wb-search", "query", "a.com", "--filter", "url", "="]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_expression_may_start_with_hyphen() {
        let cli = Cli::try_parse_from([
            "wb-search", "query", "a.com", "--filter", "url", "=!", "-draft",
        ])
        .unwrap();
        let Commands::Query(args) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.filters().collect::<Vec<_>>(), vec![("url", "=!", "-draft")]);
    }

    #[test]
    fn test_check_date_requires_values() {
        assert!(Cli::try_parse_from(["wb-search", "check-date"]).is_err());
        let cli = Cli::try_parse_from(["wb-search", "-v", "check-date", "2020", "202"]).unwrap();
        assert!(cli.verbose);
        let Commands::CheckDate(args) = cli.command else {
            panic!("expected check-date command");
        };
        assert_eq!(args.values, vec!["2020", "202"]);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["wb-search"]).is_err());
    }
}
