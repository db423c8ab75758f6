use crate::argparse::QueryArgs;
use anyhow::{bail, Context};
use archive_search_common::{
    AddFilterOutcome, DateField, NativeValidity, SearchConfig, SearchForm, PREFIX_ENV_VAR,
};
use log::{debug, warn};

pub fn handle_query_command(args: QueryArgs) -> anyhow::Result<()> {
    println!("{}", build_listing_url(&args)?);
    Ok(())
}

fn resolve_config(prefix: Option<&str>) -> anyhow::Result<SearchConfig> {
    let config = match prefix {
        Some(prefix) => SearchConfig::new(prefix),
        None => SearchConfig::from_env(),
    };
    config.with_context(|| {
        format!(
            "Failed to resolve the archive prefix. Use --prefix or set {}",
            PREFIX_ENV_VAR
        )
    })
}

/// Warns about a date that the search page would flag; never fails
fn check_date(flag: &str, field: &mut DateField) {
    field.on_blur(NativeValidity::valid());
    if field.indicator_shown() {
        warn!(
            "{} value {:?} is not a 4 to 14 digit timestamp",
            flag,
            field.value()
        );
    }
}

pub(crate) fn build_listing_url(args: &QueryArgs) -> anyhow::Result<String> {
    let config = resolve_config(args.prefix.as_deref())?;

    let mut form = SearchForm::new();
    for (field, modifier, expression) in args.filters() {
        match form.filters.add_filter(field, modifier, expression) {
            AddFilterOutcome::Applied(id) => debug!("Filter {} added as chip {}", field, id),
            rejected => bail!(
                "Filter '{} {} {}' rejected: {:?}",
                field,
                modifier,
                expression,
                rejected
            ),
        }
    }
    form.match_type = args.match_type.clone().unwrap_or_default();
    if let Some(from) = &args.from {
        form.from.set_value(from.as_str());
        check_date("--from", &mut form.from);
    }
    if let Some(to) = &args.to {
        form.to.set_value(to.as_str());
        check_date("--to", &mut form.to);
    }

    Ok(form.build_target(&config, &args.url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(url: &str) -> QueryArgs {
        QueryArgs {
            prefix: Some("http://localhost:8080/pywb".to_string()),
            url: url.to_string(),
            filter: Vec::new(),
            match_type: None,
            from: None,
            to: None,
        }
    }

    #[test]
    fn test_build_listing_url() {
        let mut args = args("example.com/*");
        args.filter = vec!["url".into(), "=".into(), "example.com".into()];
        args.match_type = Some("prefix".to_string());
        args.from = Some("2019".to_string());
        assert_eq!(
            build_listing_url(&args).unwrap(),
            "http://localhost:8080/pywb/*?url=example.com%2F%2A&filter=url:example.com&matchType=prefix&from=2019"
        );
    }

    #[test]
    fn test_bad_date_is_advisory() {
        let mut args = args("a.com");
        args.to = Some("20x".to_string());
        assert_eq!(
            build_listing_url(&args).unwrap(),
            "http://localhost:8080/pywb/*?url=a.com&to=20x"
        );
    }

    #[test]
    fn test_rejected_filter_is_an_error() {
        let mut args = args("a.com");
        args.filter = vec!["color".into(), "=".into(), "red".into()];
        let err = build_listing_url(&args).unwrap_err();
        assert!(err.to_string().contains("color"));
        assert!(err.to_string().contains("RejectedUnknownField"));
    }

    #[test]
    fn test_empty_prefix_is_an_error() {
        let mut args = args("a.com");
        args.prefix = Some(String::new());
        let err = build_listing_url(&args).unwrap_err();
        assert!(err.to_string().contains("--prefix"));
        assert!(err.to_string().contains(PREFIX_ENV_VAR));
    }
}
