use yew::prelude::*;

use crate::components::shared::{Notice, Spinner};
use crate::config::CONFIG;
use crate::models::EntityId;
use crate::state::ListController;

/// Fila ya renderizada; el id decide a dónde lleva el click
#[derive(Clone, PartialEq)]
pub struct TableRow {
    pub id: EntityId,
    pub cells: Vec<Html>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct DataTableProps {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    pub page: u32,
    pub total_pages: u32,
    #[prop_or_default]
    pub total_items: u64,
    /// Tamaño de página para calcular el rango mostrado
    pub page_size: u32,
    /// Cambio de página en curso: datos anteriores visibles + indicador
    #[prop_or_default]
    pub refreshing: bool,
    pub on_row_click: Callback<EntityId>,
    pub on_change_page: Callback<u32>,
}

/// Tabla con paginación de servidor
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let rows = props.rows.iter().map(|row| {
        let on_click = {
            let cb = props.on_row_click.clone();
            let id = row.id;
            Callback::from(move |_e: MouseEvent| cb.emit(id))
        };
        html! {
            <tr key={row.id.to_string()} class="is-clickable" onclick={on_click}>
                { for row.cells.iter().cloned().map(|cell| html! { <td>{ cell }</td> }) }
            </tr>
        }
    });

    let go_to = |target: u32| {
        let cb = props.on_change_page.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(target))
    };
    let page = props.page.max(1);
    let can_prev = page > 1 && !props.refreshing;
    let can_next = page < props.total_pages && !props.refreshing;

    html! {
        <div class="data-table">
            if props.refreshing {
                <progress class="progress is-small is-link" max="100"></progress>
            }
            <table class="table is-fullwidth is-hoverable">
                <thead>
                    <tr>
                        { for props.columns.iter().map(|name| html! { <th>{ *name }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if props.rows.is_empty() {
                        <tr><td colspan={props.columns.len().to_string()}>{ "There are no records to display" }</td></tr>
                    } else {
                        { for rows }
                    }
                </tbody>
            </table>
            <nav class="pagination is-right" role="navigation" aria-label="pagination">
                <button class="button pagination-previous" disabled={!can_prev} onclick={go_to(page.saturating_sub(1))}>
                    { "Previous" }
                </button>
                <button class="button pagination-next" disabled={!can_next} onclick={go_to(page + 1)}>
                    { "Next" }
                </button>
                <p class="pagination-list">
                    { format!("Page {} of {} · {}", page, props.total_pages.max(1), shown_range(page, props.page_size, props.rows.len(), props.total_items)) }
                </p>
            </nav>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RowEditButtonProps {
    pub on_click: Callback<()>,
}

/// Atajo de edición dentro de una fila (no dispara el click de la fila)
#[function_component(RowEditButton)]
pub fn row_edit_button(props: &RowEditButtonProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    html! {
        <button type="button" class="button is-small is-light" {onclick}>{ "Edit" }</button>
    }
}

/// Estado de un listado → spinner, aviso y tabla
pub fn resource_table<T>(
    list: &ListController<T>,
    columns: Vec<&'static str>,
    to_row: impl Fn(&T) -> TableRow,
    on_row_click: Callback<EntityId>,
    on_change_page: Callback<u32>,
) -> Html {
    if list.state.is_loading() {
        return html! { <Spinner /> };
    }
    let (total_items, page_size) = list
        .state
        .data()
        .map(|page| (page.pagination.total_items, page.pagination.current_page_size))
        .unwrap_or((0, 0));
    // El servidor puede no informar el tamaño de página
    let page_size = if page_size > 0 { page_size } else { CONFIG.page_size };
    let rows: Vec<TableRow> = list.items().iter().map(to_row).collect();

    html! {
        <>
            <Notice message={list.notice().map(str::to_string)} />
            <DataTable
                {columns}
                {rows}
                page={list.page()}
                total_pages={list.total_pages()}
                {total_items}
                {page_size}
                refreshing={list.state.is_fetching()}
                {on_row_click}
                {on_change_page}
            />
        </>
    }
}

/// "Showing 26-50 of 120 items" o "No items"
fn shown_range(page: u32, page_size: u32, shown: usize, total_items: u64) -> String {
    if shown == 0 {
        return "No items".to_string();
    }
    let first = u64::from(page.saturating_sub(1)) * u64::from(page_size) + 1;
    let last = first + shown as u64 - 1;
    format!("Showing {}-{} of {} items", first, last, total_items.max(last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_follows_page_and_size() {
        assert_eq!(shown_range(1, 25, 25, 120), "Showing 1-25 of 120 items");
        assert_eq!(shown_range(5, 25, 20, 120), "Showing 101-120 of 120 items");
        assert_eq!(shown_range(2, 25, 0, 30), "No items");
    }
}
