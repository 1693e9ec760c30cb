use super::formatter::FormattedKeyPress;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the key-by-key trace table.
    pub fn trace_table(steps: &[FormattedKeyPress]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "KEY", "DISPLAY", "CALCULATION"]);
        for step in steps {
            table.add_row(row![step.step, step.key, step.display, step.calculation]);
        }

        table
    }

    pub fn trace(steps: &[FormattedKeyPress]) {
        Self::trace_table(steps).printstd();
    }
}
