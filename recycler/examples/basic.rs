// Example: minimal setup, scrolling and a snapped focus.
use recycler::{
    BindData, Item, ItemType, ListController, ListOptions, PillView, Position, Size,
};

#[derive(Debug, Default)]
struct Label {
    text: String,
    position: Position,
    visible: bool,
}

impl PillView for Label {
    fn compute_size(&self) -> Size {
        Size::new(320.0, 48.0)
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_active(&mut self, active: bool) {
        self.visible = active;
    }
}

impl BindData<String> for Label {
    fn init_with_data(&mut self, data: &String) {
        self.text.clone_from(data);
    }
}

fn main() {
    let mut list = ListController::new(
        ListOptions::default().with_padding(8.0, 8.0).with_spacing(4.0),
        Size::new(320.0, 400.0),
    );
    let items = (0..100_000)
        .map(|i| Item::new(0, format!("row #{i}")))
        .collect();
    if let Err(err) = list.setup(vec![ItemType::new("label", Label::default)], items) {
        eprintln!("setup failed: {err}");
        return;
    }

    println!("content_extent={}", list.content_extent());
    println!("window={:?}", list.visible_window());
    println!("pool={:?}", list.pool_stats(0));

    list.on_scroll_offset_changed(123_456.0);
    let window = list.visible_window();
    println!("after scroll: window={window:?}");
    if let Some(first) = list.first_visible().and_then(|i| list.view(i)) {
        println!("first visible: {:?} at {:?}", first.text, first.position);
    }

    list.focus_on(99_999, false);
    println!(
        "after focus: offset={} window={:?} pool={:?}",
        list.scroll_offset(),
        list.visible_window(),
        list.pool_stats(0)
    );
    list.clear();
}
