//! TableRow trait and column/value types for table display.

use std::cmp::Ordering;
use std::fmt;

use griddom::TextAlign;

/// A displayable cell value.
///
/// Same-variant values order naturally; mixed variants fall back to their
/// display-string ordering so a sort never fails on heterogeneous data.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl CellValue {
    /// Total order used by the sort comparator.
    pub fn compare(a: &CellValue, b: &CellValue) -> Ordering {
        match (a, b) {
            (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
            (CellValue::Float(x), CellValue::Float(y)) => {
                x.partial_cmp(y).unwrap_or(Ordering::Equal)
            }
            (CellValue::Int(x), CellValue::Float(y)) => {
                (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal)
            }
            (CellValue::Float(x), CellValue::Int(y)) => {
                x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
            (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
            _ => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Column configuration.
///
/// Columns define the structure of the table: a unique key, the header
/// title, which row field the column reads, its rendered width, alignment,
/// and whether clicking the header sorts by it.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("age", "Age").width(8).sortable(),
///     Column::new("email", "Email").width(28),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique key identifying the column in the rendered output
    pub key: String,
    /// Header title text
    pub title: String,
    /// Which row field this column reads (defaults to the key)
    pub field: String,
    /// Column width in terminal columns
    pub width: u16,
    /// Horizontal alignment of cell content
    pub align: TextAlign,
    /// Whether clicking the header toggles sorting by this column
    pub sortable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            field: key.clone(),
            key,
            title: title.into(),
            width: 16,
            align: TextAlign::Left,
            sortable: false,
        }
    }

    /// Read a different row field than the column key.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Set the rendered width in terminal columns.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the cell content alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show a direction indicator in the header and
    /// respond to header clicks.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Trait for records that can be displayed as table rows.
///
/// Rows are opaque to the table: it only asks for a stable key and for
/// field values by name. A field the row does not have yields `None` and
/// displays as a blank cell.
///
/// # Examples
///
/// ```ignore
/// impl TableRow for User {
///     fn key(&self) -> String {
///         self.email.clone()
///     }
///
///     fn field(&self, name: &str) -> Option<CellValue> {
///         match name {
///             "name" => Some(self.name.as_str().into()),
///             "age" => Some(CellValue::Int(self.age)),
///             "email" => Some(self.email.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Stable identifier for this row.
    ///
    /// Selection is tracked by key, so it survives the row collection
    /// being replaced by equivalent data.
    fn key(&self) -> String;

    /// Look up a displayable field value by name.
    fn field(&self, name: &str) -> Option<CellValue>;
}
