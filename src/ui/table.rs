use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }
        render(&self.rows)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &[(&str, String)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

/// Render records under a header row taken from the record type.
/// An empty slice still renders the header.
pub fn render<T: Tabled>(records: &[T]) -> String {
    Table::new(records).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, EmployeeView};

    #[test]
    fn test_render_has_header_and_rows() {
        let rows = vec![
            Department { id: 1, name: "Engineering".into() },
            Department { id: 2, name: "Sales".into() },
        ];
        let table = render(&rows);

        let header = table.lines().nth(1).unwrap();
        assert!(header.contains("ID") && header.contains("Department Name"));
        assert!(table.contains("Engineering"));
        assert!(table.contains("Sales"));
    }

    #[test]
    fn test_render_empty_keeps_header() {
        let table = render::<EmployeeView>(&[]);
        for column in ["ID", "First Name", "Last Name", "Role", "Department", "Salary", "Manager"] {
            assert!(table.contains(column), "missing column {}", column);
        }
    }

    #[test]
    fn test_stats_table() {
        assert_eq!(stats_table(&[]), "");

        let table = stats_table(&[("Departments", "3".to_string())]);
        assert!(table.contains("Metric"));
        assert!(table.contains("Departments"));
    }
}
