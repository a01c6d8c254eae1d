use holo_core::{CardRect, Document};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve once the document has been parsed.
pub async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let on_ready = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn html_elements(list: web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// `holo_core::Document` over the live browser DOM.
pub struct WebDocument {
    document: web::Document,
}

impl WebDocument {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Document for WebDocument {
    type Node = web::HtmlElement;

    fn query_all(&self, selector: &str) -> Vec<Self::Node> {
        match self.document.query_selector_all(selector) {
            Ok(list) => html_elements(list),
            Err(e) => {
                log::warn!("[dom] bad selector {}: {:?}", selector, e);
                Vec::new()
            }
        }
    }

    fn by_id(&self, id: &str) -> Option<Self::Node> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }

    fn query_in(&self, scope: &Self::Node, selector: &str) -> Option<Self::Node> {
        scope
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }

    fn body(&self) -> Option<Self::Node> {
        self.document.body()
    }

    #[inline]
    fn has_class(&self, node: &Self::Node, class: &str) -> bool {
        node.class_list().contains(class)
    }

    #[inline]
    fn add_class(&self, node: &Self::Node, class: &str) {
        _ = node.class_list().add_1(class);
    }

    #[inline]
    fn remove_class(&self, node: &Self::Node, class: &str) {
        _ = node.class_list().remove_1(class);
    }

    fn set_style(&self, node: &Self::Node, property: &str, value: &str) {
        let style = node.style();
        if value.is_empty() {
            _ = style.remove_property(property);
        } else {
            _ = style.set_property(property, value);
        }
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) {
        _ = node.set_attribute(name, value);
    }

    fn bounds(&self, node: &Self::Node) -> CardRect {
        let rect = node.get_bounding_client_rect();
        CardRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn append_style_sheet(&self, css: &str) {
        let Ok(style) = self.document.create_element("style") else {
            log::warn!("[dom] could not create <style>");
            return;
        };
        style.set_text_content(Some(css));
        match self.document.head() {
            Some(head) => {
                _ = head.append_child(&style);
            }
            None => log::warn!("[dom] no <head> for keyframes"),
        }
    }
}
