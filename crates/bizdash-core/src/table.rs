//! Generic table contract.
//!
//! A table is described by an ordered slice of rows and an ordered slice of
//! [`ColumnDescriptor`]s. Rendering is a pure function of those plus the fetch
//! flags: any active flag hands the whole view to the presenter, otherwise
//! every row is rendered once, in order, with one cell per column.

use serde::Serialize;
use serde_json::Value;

use bizdash_types::Identified;

use crate::actions::{ActionButton, RowActions};
use crate::presenter::{FetchFlags, RenderState, present_flags};

/// How a column reads its value from a row.
pub enum Accessor<Row> {
    /// Top-level field of the row's serialized form
    Field(String),
    /// Value computed from the row
    Derived(Box<dyn Fn(&Row) -> String>),
}

/// Maps a field or derived accessor of `Row` to a labelled column.
pub struct ColumnDescriptor<Row> {
    pub key: String,
    pub label: String,
    accessor: Accessor<Row>,
    renderer: Option<Box<dyn Fn(&Row, String) -> String>>,
}

impl<Row> ColumnDescriptor<Row> {
    /// Column over a named field. The label defaults to the key.
    pub fn field(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            accessor: Accessor::Field(key.clone()),
            key,
            renderer: None,
        }
    }

    pub fn derived<F>(key: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&Row) -> String + 'static,
    {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            accessor: Accessor::Derived(Box::new(accessor)),
            renderer: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Post-process the raw cell text, e.g. to format money or dates.
    pub fn render_with<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Row, String) -> String + 'static,
    {
        self.renderer = Some(Box::new(renderer));
        self
    }

    fn reads_fields(&self) -> bool {
        matches!(self.accessor, Accessor::Field(_))
    }

    fn cell(&self, row: &Row, serialized: Option<&Value>) -> String {
        let raw = match &self.accessor {
            Accessor::Field(name) => serialized
                .and_then(|value| value.get(name))
                .map(value_text)
                .unwrap_or_default(),
            Accessor::Derived(accessor) => accessor(row),
        };
        match &self.renderer {
            Some(renderer) => renderer(row, raw),
            None => raw,
        }
    }
}

impl<Row> std::fmt::Debug for ColumnDescriptor<Row> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("field", &self.reads_fields())
            .finish()
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Inputs of one table render.
pub struct TableProps<'a, 'b, Row: Identified> {
    pub data: &'a [Row],
    pub columns: &'a [ColumnDescriptor<Row>],
    pub flags: FetchFlags,
    pub actions: Option<&'a RowActions<'b, Row>>,
}

impl<'a, 'b, Row: Identified> TableProps<'a, 'b, Row> {
    pub fn new(data: &'a [Row], columns: &'a [ColumnDescriptor<Row>]) -> Self {
        Self {
            data,
            columns,
            flags: FetchFlags::idle(),
            actions: None,
        }
    }

    pub fn flags(mut self, flags: FetchFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn actions(mut self, actions: &'a RowActions<'b, Row>) -> Self {
        self.actions = Some(actions);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub key: String,
    pub cells: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub rows: Vec<RenderedRow>,
}

/// Either the presenter's state or the rendered rows, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableOutput {
    Status { state: RenderState },
    Table(RenderedTable),
}

impl TableOutput {
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            TableOutput::Status { .. } => &[],
            TableOutput::Table(table) => &table.rows,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows().iter().map(|row| row.cells.len()).sum()
    }

    pub fn status(&self) -> Option<RenderState> {
        match self {
            TableOutput::Status { state } => Some(*state),
            TableOutput::Table(_) => None,
        }
    }
}

/// Render a table, or delegate to the presenter.
///
/// Empty `columns` is not validated: it yields rows with zero cells.
pub fn render_table<Row>(props: &TableProps<'_, '_, Row>) -> TableOutput
where
    Row: Identified + Serialize,
{
    if props.flags.any() || props.data.is_empty() {
        return TableOutput::Status {
            state: present_flags(props.flags),
        };
    }

    let headers = props.columns.iter().map(|c| c.label.clone()).collect();
    let needs_fields = props.columns.iter().any(ColumnDescriptor::reads_fields);
    let buttons = props.actions.map(RowActions::buttons).unwrap_or_default();

    let rows = props
        .data
        .iter()
        .map(|row| {
            let serialized = if needs_fields {
                serde_json::to_value(row)
                    .inspect_err(|err| tracing::debug!(error = %err, "row did not serialize"))
                    .ok()
            } else {
                None
            };
            RenderedRow {
                key: row.id().to_string(),
                cells: props
                    .columns
                    .iter()
                    .map(|column| column.cell(row, serialized.as_ref()))
                    .collect(),
                actions: buttons.clone(),
            }
        })
        .collect();

    TableOutput::Table(RenderedTable { headers, rows })
}
