use std::collections::HashMap;

use recycler::{BindData, Item, ItemType, ListController, ListOptions, PillView, Position, Size};
use recycler_adapter::{PageIndicator, ScrollDriver};

#[derive(Debug, Default)]
struct Message {
    id: u64,
}

impl PillView for Message {
    fn compute_size(&self) -> Size {
        Size::new(360.0, 64.0)
    }

    fn set_position(&mut self, _position: Position) {}

    fn set_active(&mut self, _active: bool) {}
}

impl BindData<u64> for Message {
    fn init_with_data(&mut self, data: &u64) {
        self.id = *data;
    }
}

fn main() {
    // Example: a chat timeline driven by raw input, keeping its position when older messages are
    // prepended.
    //
    // The host flow is typically:
    // 1) forward drag/wheel/frame events to the driver and apply the returned offsets
    // 2) capture an anchor (key + offset_in_viewport) before data changes
    // 3) re-run setup with the new items
    // 4) apply the anchor so the same message stays in the same place
    let message = ItemType::new("message", Message::default);
    let pages = PageIndicator::new(10).with_on_change(|page| println!("page -> {page}"));
    let mut list = ListController::with_hooks(ListOptions::default(), Size::new(360.0, 640.0), pages);
    let items: Vec<Item<u64>> = (1000..1200).map(|id| Item::new(0, id)).collect();
    if let Err(err) = list.setup(vec![message.clone()], items) {
        eprintln!("setup failed: {err}");
        return;
    }
    let mut driver = ScrollDriver::new(list);

    for _ in 0..20 {
        driver.on_drag(-48.0);
    }
    driver.on_drag_end();
    driver.on_wheel(300.0);
    println!("offset after input: {}", driver.list().scroll_offset());

    let Some(anchor) = driver.capture_first_visible_anchor(|id| *id) else {
        return;
    };
    println!("before prepend: {anchor:?}");

    let items: Vec<Item<u64>> = (900..1200).map(|id| Item::new(0, id)).collect();
    let index_of: HashMap<u64, usize> = items
        .iter()
        .enumerate()
        .map(|(i, it)| (it.data, i))
        .collect();
    if let Err(err) = driver.list_mut().setup(vec![message], items) {
        eprintln!("setup failed: {err}");
        return;
    }
    let ok = driver.apply_anchor(&anchor, |id| index_of.get(id).copied());
    println!(
        "after prepend: ok={ok} offset={} first={:?}",
        driver.list().scroll_offset(),
        driver.list().first_visible()
    );

    driver.focus_on(0, true);
    let mut now_ms = 0u64;
    while let Some(offset) = driver.tick(now_ms) {
        now_ms += 16;
        if now_ms % 160 == 0 {
            println!("t={now_ms} offset={offset:.1}");
        }
    }
    println!("page={}", driver.list().hooks().current_page());
    driver.list_mut().clear();
}
