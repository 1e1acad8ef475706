use plotters::style::RGBColor;

/// Qualitative color sequences for category series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Palette {
    /// Saturated default sequence.
    #[default]
    Plotly,
    /// Soft sequence used for the reference mixture chart.
    Pastel,
}

const PLOTLY: [RGBColor; 10] = [
    RGBColor(0x63, 0x6E, 0xFA),
    RGBColor(0xEF, 0x55, 0x3B),
    RGBColor(0x00, 0xCC, 0x96),
    RGBColor(0xAB, 0x63, 0xFA),
    RGBColor(0xFF, 0xA1, 0x5A),
    RGBColor(0x19, 0xD3, 0xF3),
    RGBColor(0xFF, 0x66, 0x92),
    RGBColor(0xB6, 0xE8, 0x80),
    RGBColor(0xFF, 0x97, 0xFF),
    RGBColor(0xFE, 0xCB, 0x52),
];

const PASTEL: [RGBColor; 11] = [
    RGBColor(102, 197, 204),
    RGBColor(246, 207, 113),
    RGBColor(248, 156, 116),
    RGBColor(220, 176, 242),
    RGBColor(135, 197, 95),
    RGBColor(158, 185, 243),
    RGBColor(254, 136, 177),
    RGBColor(201, 219, 116),
    RGBColor(139, 224, 164),
    RGBColor(180, 151, 231),
    RGBColor(179, 179, 179),
];

impl Palette {
    /// Color for the `idx`-th series; the sequence repeats.
    pub fn color(self, idx: usize) -> RGBColor {
        let colors: &[RGBColor] = match self {
            Self::Plotly => &PLOTLY,
            Self::Pastel => &PASTEL,
        };
        colors[idx % colors.len()]
    }
}
