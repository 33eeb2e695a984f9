pub mod map_picker;

pub use map_picker::MapPicker;
