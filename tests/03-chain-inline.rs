// The intended consumer shape: a typed facade over an untyped raw
// container, where every insert chains through the check and every
// extract goes through the cast.

use tcon::{tcon, tcon_cast, tcon_check};

pub struct RawList {
    slots: Vec<*mut ()>,
}

impl RawList {
    fn push(&mut self, p: *mut ()) {
        self.slots.push(p);
    }

    fn pop(&mut self) -> Option<*mut ()> {
        self.slots.pop()
    }
}

#[tcon]
pub struct StringListCon {
    pub canary: *mut String,
}

pub struct StringList {
    raw: RawList,
    pub tcon: StringListCon,
}

fn push(list: &mut StringList, elem: *mut String) {
    // The check chains: RawList::push runs on the original list.
    tcon_check!(&mut *list, canary, elem)
        .raw
        .push(elem as *mut ());
}

fn pop(list: &mut StringList) -> Option<*mut String> {
    let raw = list.raw.pop()?;
    Some(tcon_cast!(&*list, canary, raw))
}

fn main() {
    let mut list = StringList {
        raw: RawList { slots: Vec::new() },
        tcon: StringListCon::new(),
    };

    push(&mut list, Box::into_raw(Box::new(String::from("hello"))));
    let back = pop(&mut list).expect("one element");
    assert_eq!(*unsafe { Box::from_raw(back) }, "hello");
    assert!(pop(&mut list).is_none());
}
