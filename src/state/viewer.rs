use std::rc::Rc;
use yew::Reducible;

use super::DropTarget;

/// Widget-level state: drag-over feedback plus the single live preview.
///
/// Generic over the preview payload so the transitions can be exercised
/// without a browser; the app uses [`crate::dom::Preview`].
#[derive(Debug)]
pub struct ViewerState<P> {
    pub drop_target: DropTarget,
    pub preview: Option<Rc<P>>,
    /// Bumped on every install; keys the preview session.
    pub generation: u32,
}

impl<P> Default for ViewerState<P> {
    fn default() -> Self {
        Self {
            drop_target: DropTarget::default(),
            preview: None,
            generation: 0,
        }
    }
}

impl<P> Clone for ViewerState<P> {
    fn clone(&self) -> Self {
        Self {
            drop_target: self.drop_target.clone(),
            preview: self.preview.clone(),
            generation: self.generation,
        }
    }
}

pub enum ViewerAction<P> {
    DragEnter,
    DragLeave,
    /// A drop that carried no image files.
    DropIgnored,
    /// Replace whatever preview is showing.
    Install(Rc<P>),
}

impl<P> ViewerState<P> {
    pub fn highlighted(&self) -> bool {
        self.drop_target.highlighted()
    }

    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// The full-area drop zone stops taking pointer events once something is
    /// displayed, so gestures reach the image.
    pub fn drop_zone_interactive(&self) -> bool {
        !self.has_preview()
    }

    pub fn instructions_visible(&self) -> bool {
        self.has_preview()
    }
}

impl<P> Reducible for ViewerState<P> {
    type Action = ViewerAction<P>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewerAction::*;
        let mut new = (*self).clone();
        match action {
            DragEnter => {
                new.drop_target.enter();
            }
            DragLeave => {
                new.drop_target.leave();
            }
            DropIgnored => {
                new.drop_target.settle();
            }
            Install(preview) => {
                new.drop_target.reset();
                new.preview = Some(preview);
                new.generation = new.generation.wrapping_add(1);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = ViewerState<&'static str>;

    fn run(actions: Vec<ViewerAction<&'static str>>) -> Rc<State> {
        actions
            .into_iter()
            .fold(Rc::new(State::default()), |s, a| s.reduce(a))
    }

    #[test]
    fn initial_state() {
        let s = State::default();
        assert!(!s.highlighted());
        assert!(s.drop_zone_interactive());
        assert!(!s.instructions_visible());
    }

    #[test]
    fn enter_then_leave_toggles_highlight() {
        let s = run(vec![ViewerAction::DragEnter]);
        assert!(s.highlighted());
        let s = s.reduce(ViewerAction::DragLeave);
        assert!(!s.highlighted());
    }

    #[test]
    fn leave_after_ignored_drop_hides_highlight() {
        let s = run(vec![ViewerAction::DragEnter, ViewerAction::DragEnter, ViewerAction::DropIgnored]);
        assert!(s.highlighted());
        assert!(!s.instructions_visible());
        let s = s.reduce(ViewerAction::DragEnter).reduce(ViewerAction::DragLeave);
        assert!(!s.highlighted());
    }

    #[test]
    fn install_hides_highlight_and_reveals_instructions() {
        let s = run(vec![ViewerAction::DragEnter, ViewerAction::Install(Rc::new("a.png"))]);
        assert!(!s.highlighted());
        assert!(s.instructions_visible());
        assert!(!s.drop_zone_interactive());
        assert_eq!(s.generation, 1);
    }

    #[test]
    fn second_install_replaces_first() {
        let first = Rc::new("a.png");
        let s = run(vec![
            ViewerAction::Install(first.clone()),
            ViewerAction::DragEnter,
            ViewerAction::Install(Rc::new("b.png")),
        ]);
        assert_eq!(s.preview.as_deref(), Some(&"b.png"));
        assert_eq!(s.generation, 2);
        // the old state handle is gone, only our local clone remains
        assert_eq!(Rc::strong_count(&first), 1);
    }
}
