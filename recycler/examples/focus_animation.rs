// Example: animated focus with hooks, driven by a fixed-rate frame loop.
use recycler::{
    Align, Axis, BindData, Item, ItemType, ListController, ListHooks, ListOptions, PillView,
    Position, Size,
};

#[derive(Debug, Default)]
struct Card {
    id: u32,
    animated_at: Option<usize>,
}

impl PillView for Card {
    fn compute_size(&self) -> Size {
        Size::new(160.0, 240.0)
    }

    fn set_position(&mut self, _position: Position) {}

    fn set_active(&mut self, _active: bool) {}

    fn animate(&mut self, stagger_index: usize) {
        self.animated_at = Some(stagger_index);
    }
}

impl BindData<u32> for Card {
    fn init_with_data(&mut self, data: &u32) {
        self.id = *data;
    }
}

#[derive(Default)]
struct Log {
    created: usize,
}

impl ListHooks<Card> for Log {
    fn on_view_created(&mut self, _type_index: usize, _view: &mut Card) {
        self.created += 1;
    }

    fn on_focus_finished(&mut self, index: usize, view: Option<&mut Card>) {
        println!("focus finished on {index}: {:?}", view.map(|c| c.id));
    }

    fn on_focus_canceled(&mut self) {
        println!("focus canceled");
    }
}

fn main() {
    let options = ListOptions::new(Axis::Horizontal)
        .with_spacing(12.0)
        .with_focus_align(Align::Center);
    let mut list: ListController<u32, Card, Log> =
        ListController::with_hooks(options, Size::new(800.0, 240.0), Log::default());
    let items = (0..500).map(|i| Item::new(0, i)).collect();
    if let Err(err) = list.setup(vec![ItemType::new("card", Card::default)], items) {
        eprintln!("setup failed: {err}");
        return;
    }
    list.animate_visible_pills();

    let target = list.focus_on(250, true);
    println!("target_offset={target:?}");

    let dt = 1.0 / 60.0;
    let mut frame = 0u32;
    while let Some(offset) = list.tick(dt) {
        frame += 1;
        if frame % 10 == 0 {
            println!("frame={frame} offset={offset:.1} window={:?}", list.visible_window());
        }
    }
    println!(
        "settled after {frame} frames, created {} views",
        list.hooks().created
    );
    list.clear();
}
