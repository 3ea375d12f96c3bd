use nova_common::{Color, Point, Rect, TypeTag};

use crate::field::{CStr, ColorAt, FieldSpec, PointAt, RectAt};
use crate::ids::ColrId;

record_type! {
    /// Game-wide interface colors and main menu placement.
    ///
    /// Only record 128 is used by the game; see
    /// [`ResourceLibrary::interface_colors`](crate::ResourceLibrary::interface_colors).
    pub struct Colr(TypeTag::COLR, ColrId) {
        pub button_up: Color = ColorAt(0),
        pub button_down: Color = ColorAt(4),
        pub button_grey: Color = ColorAt(8),
        pub menu_font: String = CStr::new(12, 64),
        pub menu_font_size: i16 = FieldSpec::i16(76),
        pub menu_color_bright: Color = ColorAt(78),
        pub menu_color_dim: Color = ColorAt(82),
        pub grid_bright: Color = ColorAt(86),
        pub grid_dim: Color = ColorAt(90),
        /// Loading progress bar, relative to the window centre.
        pub progress_bar: Rect = RectAt(94),
        pub progress_bright: Color = ColorAt(102),
        pub progress_dim: Color = ColorAt(106),
        pub progress_outline: Color = ColorAt(110),
        pub button1: Point = PointAt(114),
        pub button2: Point = PointAt(118),
        pub button3: Point = PointAt(122),
        pub button4: Point = PointAt(126),
        pub button5: Point = PointAt(130),
        pub button6: Point = PointAt(134),
        pub floating_map: Color = ColorAt(138),
        pub list_text: Color = ColorAt(142),
        pub list_background: Color = ColorAt(146),
        pub list_highlight: Color = ColorAt(150),
        pub escort_highlight: Color = ColorAt(154),
        pub button_font: String = CStr::new(158, 64),
        pub button_font_size: i16 = FieldSpec::i16(222),
        pub logo: Point = PointAt(224),
        pub rollover: Point = PointAt(228),
        pub slide1: Point = PointAt(232),
        pub slide2: Point = PointAt(236),
        pub slide3: Point = PointAt(240),
    }
}
