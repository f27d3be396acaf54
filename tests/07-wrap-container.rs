// Wrap attaches a marker to a container type that cannot grow one of
// its own; the macros apply to the wrapper directly.

use tcon::{tcon, tcon_cast, tcon_check, Wrap};

pub struct RawStack {
    slots: Vec<*mut ()>,
}

impl RawStack {
    fn push(&mut self, p: *mut ()) {
        self.slots.push(p);
    }

    fn pop(&mut self) -> Option<*mut ()> {
        self.slots.pop()
    }
}

#[tcon]
pub struct IntStackCon {
    pub canary: *mut i32,
}

type IntStack = Wrap<RawStack, IntStackCon>;

fn push(stack: &mut IntStack, elem: *mut i32) {
    tcon_check!(&mut *stack, canary, elem)
        .raw_mut()
        .push(elem as *mut ());
}

fn pop(stack: &mut IntStack) -> Option<*mut i32> {
    let raw = stack.raw_mut().pop()?;
    Some(tcon_cast!(&*stack, canary, raw))
}

fn main() {
    let mut stack = IntStack::new(RawStack { slots: Vec::new() });

    push(&mut stack, Box::into_raw(Box::new(7)));
    let back = pop(&mut stack).expect("one element");
    assert_eq!(unsafe { *Box::from_raw(back) }, 7);
    assert!(pop(&mut stack).is_none());

    assert!(stack.into_raw().slots.is_empty());
}
