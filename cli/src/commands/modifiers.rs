use archive_search_common::FilterModifier;
use strum::IntoEnumIterator;
use tabular::{Row, Table};

pub fn handle_modifiers_command() {
    print!("{}", modifiers_table());
}

fn modifiers_table() -> Table {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table =
        Table::new("{:<}  {:<}").with_row(Row::from_cells(["Modifier", "Label"].iter().cloned()));
    for modifier in FilterModifier::iter() {
        table.add_row(
            Row::new()
                .with_cell(modifier.token())
                .with_cell(modifier.label()),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_table_lists_all() {
        let rendered = modifiers_table().to_string();
        assert_eq!(rendered.lines().count(), 7);
        assert!(rendered.contains("Matches Exactly"));
        assert!(rendered.contains("=!~"));
        assert!(rendered.contains("Does Not Begins With"));
    }
}
