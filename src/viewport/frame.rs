use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// Runs `step` once per rendered frame until it returns
/// [`FrameControl::Stop`]. Dropping the loop cancels the pending frame, so a
/// loop owned by a component dies with it.
pub struct FrameLoop {
    slot: FrameSlot,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut(f64) -> FrameControl + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&slot), Rc::new(RefCell::new(step)));
        Self { slot }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

fn schedule<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> FrameControl + 'static,
{
    let Some(owner) = slot.upgrade() else {
        return;
    };

    let next = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let control = (&mut *step.borrow_mut())(timestamp);
        match control {
            FrameControl::Continue => schedule(next, step),
            FrameControl::Stop => {
                if let Some(owner) = next.upgrade() {
                    owner.borrow_mut().take();
                }
            }
        }
    });
    *owner.borrow_mut() = Some(frame);
}
