use druid::Selector;

// Generator

pub const GENERATE: Selector = Selector::new("app.generate");
pub const APPRECIATE: Selector = Selector::new("app.appreciate");
