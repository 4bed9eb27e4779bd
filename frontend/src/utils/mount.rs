use web_sys::Element;

use crate::error::MountError;

/// Container that overlays (the usage tracker) are portalled into. Resolved
/// once when the app starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalHost(Element);

impl ModalHost {
    pub fn resolve(id: &str) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| MountError::NoDocument(id.to_string()))?;
        document
            .get_element_by_id(id)
            .map(ModalHost)
            .ok_or_else(|| MountError::MissingHost(id.to_string()))
    }

    pub fn element(&self) -> Element {
        self.0.clone()
    }
}
