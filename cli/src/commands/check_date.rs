use crate::argparse::CheckDateArgs;
use anyhow::bail;
use archive_search_common::{DateCheck, DateField, NativeValidity};
use tabular::{Row, Table};

fn describe(check: DateCheck) -> &'static str {
    match check {
        DateCheck::Valid => "ok",
        DateCheck::Empty => "empty",
        DateCheck::BadInput => "bad input",
        DateCheck::BadFormat => "bad format",
    }
}

pub(crate) fn check_values(values: &[String]) -> Vec<(String, DateCheck)> {
    values
        .iter()
        .map(|value| {
            let mut field = DateField::new();
            field.set_value(value.as_str());
            (value.clone(), field.on_blur(NativeValidity::valid()))
        })
        .collect()
}

pub fn handle_check_date_command(args: CheckDateArgs) -> anyhow::Result<()> {
    let results = check_values(&args.values);

    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}");
    for (value, check) in &results {
        table.add_row(Row::new().with_cell(value).with_cell(describe(*check)));
    }
    print!("{}", table);

    let bad = results
        .iter()
        .filter(|(_, check)| check.shows_indicator())
        .count();
    if bad > 0 {
        bail!("{} of {} date values are not valid timestamps", bad, results.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_values() {
        let values = vec!["20200101".to_string(), "202".to_string(), String::new()];
        let checks: Vec<DateCheck> = check_values(&values).into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            checks,
            vec![DateCheck::Valid, DateCheck::BadFormat, DateCheck::Empty]
        );
    }

    #[test]
    fn test_handle_check_date_fails_on_bad_value() {
        let ok = CheckDateArgs {
            values: vec!["2020".to_string()],
        };
        assert!(handle_check_date_command(ok).is_ok());

        let bad = CheckDateArgs {
            values: vec!["2020".to_string(), "20-20".to_string()],
        };
        let err = handle_check_date_command(bad).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 date values are not valid timestamps");
    }
}
