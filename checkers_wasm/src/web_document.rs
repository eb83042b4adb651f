use wasm_bindgen::JsCast;

use crate::rust_error;
use crate::web_error_handling::JsResult;


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn root_element(&self) -> JsResult<web_sys::Element> {
        self.0.document_element().ok_or_else(|| rust_error!("Cannot find document root element"))
    }

    pub fn get_element_by_id(&self, element_id: &str) -> Option<web_sys::Element> {
        self.0.get_element_by_id(element_id)
    }
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        let element = self
            .0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))?;
        if !element.is_object() {
            return Err(rust_error!("Element \"{}\" is not an object", element_id));
        }
        Ok(element)
    }

    pub fn create_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        self.0.create_element(local_name)
    }

    // Calls `init` only when the element is created, so it is safe to call on every render.
    pub fn ensure_node(
        &self, local_name: &str, id: &str, parent: &web_sys::Element,
        init: impl FnOnce(&web_sys::Element) -> JsResult<()>,
    ) -> JsResult<web_sys::Element> {
        Ok(match self.get_element_by_id(id) {
            Some(v) => v,
            None => {
                let v = self.create_element(local_name)?;
                v.set_attribute("id", id)?;
                init(&v)?;
                parent.append_child(&v)?;
                v
            }
        })
    }
}

pub fn web_window() -> JsResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| rust_error!("Cannot find window"))
}

pub fn web_document() -> WebDocument {
    WebDocument(web_sys::window().unwrap().document().unwrap())
}

// Blocks until the user dismisses the dialog.
pub fn alert(message: &str) -> JsResult<()> { web_window()?.alert_with_message(message) }

pub fn page_url() -> JsResult<String> { web_window()?.location().href() }

pub fn navigate_to(url: &str) -> JsResult<()> { web_window()?.location().set_href(url) }

pub fn as_html_element(element: &web_sys::Element) -> JsResult<&web_sys::HtmlElement> {
    element
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or_else(|| rust_error!("Element \"{}\" is not an HTML element", element.id()))
}
