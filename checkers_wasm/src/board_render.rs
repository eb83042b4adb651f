use checkers_client::{ClientConfig, ClientState, Coord, NUM_COLS};

use crate::web_document::WebDocument;
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;
use crate::web_iterators::IntoHtmlCollectionIterator;


pub const ROW_ATTR: &str = "data-row";
pub const COL_ATTR: &str = "data-col";

pub const RESET_BUTTON_ID: &str = "resetGame";
pub const CHANGE_SIDE_BUTTON_ID: &str = "changeSide";
pub const END_SESSION_BUTTON_ID: &str = "endSession";
const BUTTON_CONTAINER_ID: &str = "buttonContainer";


pub struct ControlButtons {
    pub reset: web_sys::Element,
    pub change_side: web_sys::Element,
    pub end_session: Option<web_sys::Element>,
}

// Rebuilds the whole grid from scratch. Listeners live on the board element itself, so nothing
// needs to be re-attached afterwards.
pub fn render_board(
    document: &WebDocument, config: &ClientConfig, state: &ClientState,
) -> JsResult<()> {
    let board = document.get_existing_element_by_id(&config.board_element_id)?;
    board.remove_all_children();
    board.set_style("transform", state.board().orientation().css_transform())?;

    let tbody = board.append_new_element("tbody")?;
    for row_cells in state.render_cells().chunks(NUM_COLS as usize) {
        let Some(first) = row_cells.first() else {
            continue;
        };
        let tr = tbody.append_new_element("tr")?.with_classes([first.coord.row_class()])?;
        for cell in row_cells {
            let td = tr
                .append_new_element("td")?
                .with_classes(&cell.classes)?
                .with_attribute(ROW_ATTR, &cell.coord.row.to_zero_based().to_string())?
                .with_attribute(COL_ATTR, &cell.coord.col.to_zero_based().to_string())?;
            td.append_new_element("span")?.set_attribute("class", cell.label.as_str())?;
        }
    }
    Ok(())
}

// Brings marker classes of the existing cells in line with the selection state, without touching
// anything else.
pub fn sync_markers(
    document: &WebDocument, config: &ClientConfig, state: &ClientState,
) -> JsResult<()> {
    let board = document.get_existing_element_by_id(&config.board_element_id)?;
    for td in board.get_elements_by_tag_name("td").into_iterator() {
        let Some(coord) = cell_coord(&td) else {
            continue;
        };
        let class_list = td.class_list();
        for (class, on) in state.markers(coord).class_toggles() {
            class_list.toggle_with_force(class, on)?;
        }
    }
    Ok(())
}

pub fn cell_coord(td: &web_sys::Element) -> Option<Coord> {
    let row = td.get_attribute(ROW_ATTR)?.parse().ok()?;
    let col = td.get_attribute(COL_ATTR)?.parse().ok()?;
    Coord::from_zero_based(row, col)
}

// Cell under an event target: the target itself or its closest `td` ancestor within `board`.
pub fn cell_element(
    board: &web_sys::Element, target: Option<web_sys::EventTarget>,
) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;
    let target = target?.dyn_into::<web_sys::Element>().ok()?;
    let td = target.closest("td").ok()??;
    let td_node: &web_sys::Node = &td;
    board.contains(Some(td_node)).then_some(td)
}

// Buttons are created once and survive re-renders. `on_create` is only called for a fresh set,
// so listeners attached there are never duplicated.
pub fn ensure_control_buttons(
    document: &WebDocument, config: &ClientConfig,
    on_create: impl FnOnce(&ControlButtons) -> JsResult<()>,
) -> JsResult<()> {
    if document.get_element_by_id(RESET_BUTTON_ID).is_some() {
        return Ok(());
    }
    let container = document.get_existing_element_by_id(&config.container_element_id)?;
    let button_container = document.ensure_node("div", BUTTON_CONTAINER_ID, &container, |div| {
        div.class_list().add_1(BUTTON_CONTAINER_ID)
    })?;
    let make_button = |id: &str, text: &str| -> JsResult<web_sys::Element> {
        Ok(button_container
            .append_new_element("button")?
            .with_attribute("id", id)?
            .with_text_content(text))
    };
    let buttons = ControlButtons {
        reset: make_button(RESET_BUTTON_ID, "Reset Game")?,
        change_side: make_button(CHANGE_SIDE_BUTTON_ID, "Change Side")?,
        end_session: if config.show_end_session_button {
            Some(make_button(END_SESSION_BUTTON_ID, "End Session")?)
        } else {
            None
        },
    };
    on_create(&buttons)
}

// Full-screen dimmer shown while a request is in flight. Pages without one just get no indicator.
pub fn set_overlay_visible(
    document: &WebDocument, config: &ClientConfig, visible: bool,
) -> JsResult<()> {
    let Some(overlay) = document.get_element_by_id(&config.overlay_element_id) else {
        return Ok(());
    };
    let (z_index, background) =
        if visible { ("3", "rgba(10, 10, 10, 0.4)") } else { ("-1", "rgba(10, 10, 10, 0.0)") };
    overlay.set_style("z-index", z_index)?;
    overlay.set_style("background-color", background)?;
    Ok(())
}
