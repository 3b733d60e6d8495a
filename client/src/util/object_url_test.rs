use std::cell::RefCell;
use std::rc::Rc;

use super::*;

struct FakeHandle {
    url: String,
    released: Rc<RefCell<Vec<String>>>,
}

impl DisplayHandle for FakeHandle {
    fn url(&self) -> &str {
        &self.url
    }

    fn release(self) {
        self.released.borrow_mut().push(self.url);
    }
}

fn handle(url: &str, released: &Rc<RefCell<Vec<String>>>) -> FakeHandle {
    FakeHandle { url: url.to_owned(), released: released.clone() }
}

#[test]
fn replace_releases_previous_handle_only() {
    let released = Rc::new(RefCell::new(Vec::new()));
    let mut slot = HandleSlot::default();

    assert_eq!(slot.replace(handle("blob:1", &released)), "blob:1");
    assert!(released.borrow().is_empty());

    assert_eq!(slot.replace(handle("blob:2", &released)), "blob:2");
    assert_eq!(*released.borrow(), vec!["blob:1".to_owned()]);
    assert_eq!(slot.current_url(), Some("blob:2"));
}

#[test]
fn clear_releases_current_and_empties_slot() {
    let released = Rc::new(RefCell::new(Vec::new()));
    let mut slot = HandleSlot::default();
    slot.replace(handle("blob:1", &released));
    slot.clear();
    assert_eq!(*released.borrow(), vec!["blob:1".to_owned()]);
    assert_eq!(slot.current_url(), None);

    slot.clear();
    assert_eq!(released.borrow().len(), 1);
}

#[test]
fn drop_releases_current_handle() {
    let released = Rc::new(RefCell::new(Vec::new()));
    {
        let mut slot = HandleSlot::default();
        slot.replace(handle("blob:a", &released));
        slot.replace(handle("blob:b", &released));
    }
    assert_eq!(*released.borrow(), vec!["blob:a".to_owned(), "blob:b".to_owned()]);
}
