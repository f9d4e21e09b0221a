// Drag-over feedback for the drop zone.
//
// dragenter/dragleave fire for every child the pointer crosses, so the
// highlight is driven by a depth counter rather than the raw events.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct DropTarget {
    depth: u32,
    // Highlight left on by a drop that installed nothing.
    lingering: bool,
}

impl DropTarget {
    pub fn highlighted(&self) -> bool {
        self.depth > 0 || self.lingering
    }

    pub fn enter(&mut self) -> bool {
        self.lingering = false;
        self.depth = self.depth.saturating_add(1);
        self.highlighted()
    }

    pub fn leave(&mut self) -> bool {
        self.lingering = false;
        self.depth = self.depth.saturating_sub(1);
        self.highlighted()
    }

    /// A drop landed but nothing was installed. The drag is over (no
    /// dragleave follows a drop) so the nesting count restarts, while the
    /// highlight stays on until the next enter/leave.
    pub fn settle(&mut self) {
        self.lingering = self.highlighted();
        self.depth = 0;
    }

    /// Called once a preview is installed.
    pub fn reset(&mut self) {
        self.depth = 0;
        self.lingering = false;
    }
}

pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Keep only entries whose declared MIME type is an image, preserving order.
pub fn image_entries<T>(entries: impl IntoIterator<Item = T>, mime_of: impl Fn(&T) -> String) -> Vec<T> {
    entries
        .into_iter()
        .filter(|e| is_image_type(&mime_of(e)))
        .collect()
}
