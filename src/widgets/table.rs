use crate::element::{Element, Renderable, Tag};

/// A `table` with an optional header row of `th` cells followed by rows of
/// `td` cells.
#[derive(Debug)]
pub struct Table {
    table: Element,
    has_header: bool,
    rows: usize,
}

impl Table {
    /// A table of data rows without a header.
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut table = Self {
            table: Element::new(Tag::Table),
            has_header: false,
            rows: 0,
        };
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// A table whose first row holds `headers` as `th` cells.
    pub fn with_header<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut table = Self {
            table: Element::new(Tag::Table),
            has_header: true,
            rows: 0,
        };
        table.table.append_child(row_of(Tag::Th, headers));
        for row in rows {
            table.push_row(row);
        }
        table
    }

    /// Append a row of `td` cells.
    pub fn push_row<C>(&mut self, cells: C)
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        self.table.append_child(row_of(Tag::Td, cells));
        self.rows += 1;
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of data rows, not counting the header.
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

fn row_of<C>(cell_tag: Tag, cells: C) -> Element
where
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let mut tr = Element::new(Tag::Tr);
    for cell in cells {
        tr.append_child(Element::new(cell_tag).with_text(cell.as_ref()));
    }
    tr
}

impl Renderable for Table {
    fn top_level_element(&self) -> &Element {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_without_header() {
        let table = Table::new([["1", "2"], ["3", "4"]]);
        assert!(!table.has_header());
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.render(),
            "<table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></table>"
        );
    }

    #[test]
    fn test_table_with_header() {
        let rows = vec![vec!["Ada".to_string(), "36".to_string()]];
        let mut table = Table::with_header(["Name", "Age"], rows);
        table.push_row(["Bob", "<1"]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.render(),
            "<table><tr><th>Name</th><th>Age</th></tr>\
             <tr><td>Ada</td><td>36</td></tr>\
             <tr><td>Bob</td><td>&lt;1</td></tr></table>"
        );
    }
}
