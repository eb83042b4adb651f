#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate console_error_panic_hook;
extern crate wasm_bindgen;

extern crate checkers_client;

pub mod board_render;
pub mod transport;
pub mod web_document;
pub mod web_element_ext;
pub mod web_error_handling;
pub mod web_iterators;
pub mod web_logger;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;

use checkers_client::{ClientConfig, ClientError, ClientState, ControlRequest};
use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::board_render::{
    ControlButtons, cell_element, cell_coord, ensure_control_buttons, render_board,
    set_overlay_visible, sync_markers,
};
use crate::web_document::{alert, navigate_to, web_document};
use crate::web_element_ext::WebElementExt;
use crate::web_error_handling::JsResult;


pub type SharedClient = Rc<RefCell<WebClient>>;

pub struct WebClient {
    config: ClientConfig,
    state: ClientState,
    requests_rx: mpsc::Receiver<ControlRequest>,
}

impl WebClient {
    pub fn new(config: ClientConfig) -> Self {
        let (requests_tx, requests_rx) = mpsc::channel();
        WebClient {
            config,
            state: ClientState::new(requests_tx),
            requests_rx,
        }
    }

    pub fn state(&self) -> &ClientState { &self.state }
    pub fn state_mut(&mut self) -> &mut ClientState { &mut self.state }

    pub fn next_outgoing_request(&mut self) -> Option<ControlRequest> {
        self.requests_rx.try_recv().ok()
    }

    fn sync_markers(&self) -> JsResult<()> {
        sync_markers(&web_document(), &self.config, &self.state)
    }

    // The overlay is shown exactly while `ClientState` is busy.
    fn sync_overlay(&self) -> JsResult<()> {
        set_overlay_visible(&web_document(), &self.config, self.state.is_busy())
    }
}

// Entry point. `config_json` may be empty to use defaults.
#[wasm_bindgen]
pub fn init_page(config_json: &str) -> JsResult<()> {
    web_error_handling::set_panic_hook();
    let config = ClientConfig::from_json_str(config_json).map_err(|err| rust_error!("{err}"))?;
    let log_level = config.log_level_filter().map_err(|err| rust_error!("{err}"))?;
    web_logger::init_web_logger(log_level);

    let client = Rc::new(RefCell::new(WebClient::new(config)));
    bind_board_events(&client)?;
    {
        let mut c = client.borrow_mut();
        c.state.begin_initial_load();
        c.sync_overlay()?;
    }
    spawn_local(load_initial_state(client));
    Ok(())
}

// Listeners go on elements that outlive every render: the board and the document root.
pub fn bind_board_events(client: &SharedClient) -> JsResult<()> {
    let document = web_document();
    let board = document.get_existing_element_by_id(&client.borrow().config.board_element_id)?;

    document.root_element()?.add_event_listener_and_forget("click", {
        let client = Rc::clone(client);
        move |_: web_sys::MouseEvent| {
            let mut c = client.borrow_mut();
            c.state.click_outside();
            c.sync_markers()
        }
    })?;

    board.add_event_listener_and_forget("click", {
        let client = Rc::clone(client);
        let board = board.clone();
        move |event: web_sys::MouseEvent| {
            let Some(coord) = cell_element(&board, event.target()).and_then(|td| cell_coord(&td))
            else {
                return Ok(());
            };
            // Otherwise the document handler would immediately clear the selection made here.
            event.stop_propagation();
            {
                let mut c = client.borrow_mut();
                c.state.click_cell(coord);
                c.sync_markers()?;
            }
            dispatch_outgoing_requests(&client)
        }
    })?;

    board.add_event_listener_and_forget("mouseover", {
        let client = Rc::clone(client);
        let board = board.clone();
        move |event: web_sys::MouseEvent| {
            let Some(coord) = cell_element(&board, event.target()).and_then(|td| cell_coord(&td))
            else {
                return Ok(());
            };
            let mut c = client.borrow_mut();
            c.state.hover_enter(coord);
            c.sync_markers()
        }
    })?;

    board.add_event_listener_and_forget("mouseout", {
        let client = Rc::clone(client);
        let board = board.clone();
        move |event: web_sys::MouseEvent| {
            let from = cell_element(&board, event.target());
            let to = cell_element(&board, event.related_target());
            // Moving between a cell and its own piece element is not leaving the cell.
            if from.is_none() || from == to {
                return Ok(());
            }
            let mut c = client.borrow_mut();
            c.state.hover_leave();
            c.sync_markers()
        }
    })?;
    Ok(())
}

fn bind_control_buttons(client: &SharedClient, buttons: &ControlButtons) -> JsResult<()> {
    buttons.reset.add_event_listener_and_forget("click", {
        let client = Rc::clone(client);
        move |_: web_sys::MouseEvent| {
            client.borrow_mut().state.reset_game();
            dispatch_outgoing_requests(&client)
        }
    })?;
    buttons.change_side.add_event_listener_and_forget("click", {
        let client = Rc::clone(client);
        move |_: web_sys::MouseEvent| {
            client.borrow_mut().state.change_side();
            dispatch_outgoing_requests(&client)
        }
    })?;
    if let Some(end_session) = &buttons.end_session {
        end_session.add_event_listener_and_forget("click", {
            let client = Rc::clone(client);
            move |_: web_sys::MouseEvent| end_session_now(&client)
        })?;
    }
    Ok(())
}

fn end_session_now(client: &SharedClient) -> JsResult<()> {
    let url = transport::resolve_endpoint(&client.borrow().config.logout_endpoint)?;
    info!("Ending session");
    navigate_to(url.as_str())
}

// Sends everything `ClientState` has queued. Each request gets its own future; they are not
// coordinated with each other.
pub fn dispatch_outgoing_requests(client: &SharedClient) -> JsResult<()> {
    // Requests stay queued if the endpoint cannot be resolved.
    let url = {
        let c = client.borrow();
        c.sync_overlay()?;
        transport::resolve_endpoint(&c.config.control_endpoint)?
    };
    loop {
        let Some(request) = client.borrow_mut().next_outgoing_request() else {
            return Ok(());
        };
        let task_client = Rc::clone(client);
        let url = url.clone();
        spawn_local(async move {
            let response = transport::post_control(url, request).await;
            report_js_error(finish_response(&task_client, response));
        });
    }
}

async fn load_initial_state(client: SharedClient) {
    let url = match transport::resolve_endpoint(&client.borrow().config.state_endpoint) {
        Ok(url) => url,
        Err(err) => {
            report_js_error(Err(err));
            return;
        }
    };
    let response = transport::fetch_state(url).await;
    report_js_error(finish_response(&client, response));
}

// Updates state and page from a server response. On failure the board is left as it was and the
// error is handed back for the caller to report.
pub fn apply_response(
    client: &SharedClient, response: Result<String, ClientError>,
) -> JsResult<Option<ClientError>> {
    let mut c = client.borrow_mut();
    let result = match response {
        Ok(body) => c.state.process_server_response(&body),
        Err(err) => Err(c.state.process_transport_failure(err)),
    };
    if result.is_ok() {
        let document = web_document();
        render_board(&document, &c.config, &c.state)?;
        ensure_control_buttons(&document, &c.config, |buttons| {
            bind_control_buttons(client, buttons)
        })?;
    }
    c.sync_overlay()?;
    Ok(result.err())
}

fn finish_response(client: &SharedClient, response: Result<String, ClientError>) -> JsResult<()> {
    // `apply_response` has released the client by now: `alert` blocks.
    if let Some(err) = apply_response(client, response)? {
        alert(err.user_message())?;
    }
    Ok(())
}

// Futures have nobody to return an error to.
fn report_js_error(result: JsResult<()>) {
    if let Err(err) = result {
        error!("{err:?}");
    }
}
