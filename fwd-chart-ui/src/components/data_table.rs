//! Table view of the filtered records.

use dioxus::prelude::*;
use fwd_data::{TableRow, TABLE_HEADER};

#[derive(Props, Clone, PartialEq)]
pub struct DataTableProps {
    pub rows: Vec<TableRow>,
    #[props(default = true)]
    pub visible: bool,
}

/// Year / Value / Unit table, one row per record in filtered order.
#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let display = if props.visible { "block" } else { "none" };

    rsx! {
        div {
            id: "fwd-table-container",
            style: "display: {display};",
            table {
                id: "fwd-table",
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        for header in TABLE_HEADER {
                            th {
                                style: "text-align: left; padding: 4px 8px; border-bottom: 2px solid #E0E0E0;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for (i, row) in props.rows.iter().enumerate() {
                        tr {
                            key: "{i}",
                            for cell in row.cells() {
                                td {
                                    style: "padding: 4px 8px; border-bottom: 1px solid #F0F0F0;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
