use super::compose::{compose_document, PreviewInputs, SANDBOX_POLICY};
use super::device::DevicePreset;

/// What the host hands to its sandboxed frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFrame {
    pub document: String,
    pub device: DevicePreset,
    pub sandbox: &'static str,
}

#[derive(Debug, Clone)]
pub struct PreviewState {
    device: DevicePreset,
    visible: bool,
    inputs: Option<PreviewInputs>,
    document: Option<String>,
    pending: bool,
    renders: u64,
}

impl PreviewState {
    pub fn new(device: DevicePreset) -> Self {
        Self {
            device,
            visible: true,
            inputs: None,
            document: None,
            pending: false,
            renders: 0,
        }
    }

    pub fn device(&self) -> DevicePreset {
        self.device
    }

    pub fn set_device(&mut self, device: DevicePreset) -> bool {
        if self.device == device {
            return false;
        }
        self.device = device;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Records the latest entry inputs. Returns true when they differ from the
    /// previous ones, i.e. a render should be scheduled.
    pub fn observe(&mut self, inputs: PreviewInputs) -> bool {
        if self.inputs.as_ref() == Some(&inputs) {
            return false;
        }
        self.inputs = Some(inputs);
        self.pending = true;
        true
    }

    /// Forces a render of the current inputs even if nothing changed.
    pub fn request_refresh(&mut self) {
        self.pending = true;
    }

    /// Composes the pending render, if any.
    pub fn render(&mut self) -> Option<PreviewFrame> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        let inputs = self.inputs.get_or_insert_with(PreviewInputs::default);
        let document = compose_document(inputs);
        self.document = Some(document);
        self.renders += 1;
        self.frame()
    }

    /// The last composed document framed for the current device.
    pub fn frame(&self) -> Option<PreviewFrame> {
        self.document.as_ref().map(|document| PreviewFrame {
            document: document.clone(),
            device: self.device,
            sandbox: SANDBOX_POLICY,
        })
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(DevicePreset::default())
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/preview/state.rs"]
mod tests;
