use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableRow, TableStyle},
    units::Pt,
    ChartError,
};
use std::borrow::Cow;

/// Approximate equivalent hardness numbers for non-austenitic steels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardnessRow {
    /// Rockwell C
    pub hrc: u8,
    /// Vickers
    pub hv: u16,
    /// Brinell, 10 mm tungsten carbide ball at 3000 kgf; undefined at the top of
    /// the scale
    pub hb: Option<u16>,
    /// Rockwell A
    pub hra: f32,
}

impl TableRow for HardnessRow {
    fn cells(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Owned(self.hrc.to_string()),
            Cow::Owned(self.hv.to_string()),
            self.hb
                .map(|hb| Cow::Owned(hb.to_string()))
                .unwrap_or(Cow::Borrowed("—")),
            Cow::Owned(format!("{:.1}", self.hra)),
        ]
    }
}

pub const HARDNESS_COLUMNS: [Column; 4] = [
    Column::new("Rockwell C (HRC)", 100.0, Align::Centre),
    Column::new("Vickers (HV)", 100.0, Align::Centre),
    Column::new("Brinell (HBW)", 100.0, Align::Centre),
    Column::new("Rockwell A (HRA)", 100.0, Align::Centre),
];

const fn hardness(hrc: u8, hv: u16, hb: Option<u16>, hra: f32) -> HardnessRow {
    HardnessRow { hrc, hv, hb, hra }
}

#[rustfmt::skip]
pub const HARDNESS_ROWS: [HardnessRow; 50] = [
    hardness(69, 1004, None, 86.1),
    hardness(68, 940, None, 85.6),
    hardness(67, 900, None, 85.0),
    hardness(66, 865, None, 84.5),
    hardness(65, 832, Some(739), 83.9),
    hardness(64, 800, Some(722), 83.4),
    hardness(63, 772, Some(705), 82.8),
    hardness(62, 746, Some(688), 82.3),
    hardness(61, 720, Some(670), 81.8),
    hardness(60, 697, Some(654), 81.2),
    hardness(59, 674, Some(634), 80.7),
    hardness(58, 653, Some(615), 80.1),
    hardness(57, 633, Some(595), 79.6),
    hardness(56, 613, Some(577), 79.0),
    hardness(55, 595, Some(560), 78.5),
    hardness(54, 577, Some(543), 78.0),
    hardness(53, 560, Some(525), 77.4),
    hardness(52, 544, Some(512), 76.8),
    hardness(51, 528, Some(496), 76.3),
    hardness(50, 513, Some(481), 75.9),
    hardness(49, 498, Some(469), 75.2),
    hardness(48, 484, Some(455), 74.7),
    hardness(47, 471, Some(443), 74.1),
    hardness(46, 458, Some(432), 73.6),
    hardness(45, 446, Some(421), 73.1),
    hardness(44, 434, Some(409), 72.5),
    hardness(43, 423, Some(400), 72.0),
    hardness(42, 412, Some(390), 71.5),
    hardness(41, 402, Some(381), 70.9),
    hardness(40, 392, Some(371), 70.4),
    hardness(39, 382, Some(362), 69.9),
    hardness(38, 372, Some(353), 69.4),
    hardness(37, 363, Some(344), 68.9),
    hardness(36, 354, Some(336), 68.4),
    hardness(35, 345, Some(327), 67.9),
    hardness(34, 336, Some(319), 67.4),
    hardness(33, 327, Some(311), 66.8),
    hardness(32, 318, Some(301), 66.3),
    hardness(31, 310, Some(294), 65.8),
    hardness(30, 302, Some(286), 65.3),
    hardness(29, 294, Some(279), 64.6),
    hardness(28, 286, Some(271), 64.3),
    hardness(27, 279, Some(264), 63.8),
    hardness(26, 272, Some(258), 63.3),
    hardness(25, 266, Some(253), 62.8),
    hardness(24, 260, Some(247), 62.4),
    hardness(23, 254, Some(243), 62.0),
    hardness(22, 248, Some(237), 61.5),
    hardness(21, 243, Some(231), 61.0),
    hardness(20, 238, Some(226), 60.5),
];

/// Rockwell C, Vickers, Brinell and Rockwell A equivalents
pub struct HardnessChart;

impl HardnessChart {
    /// Rows are denser than the default so the table stays on as few pages as
    /// possible
    pub const ROW_HEIGHT: Pt = Pt(13.5);
}

impl Chart for HardnessChart {
    fn file_name(&self) -> &'static str {
        "hardness-conversion-chart.pdf"
    }

    fn title(&self) -> &'static str {
        "Hardness Conversion Chart"
    }

    fn subject(&self) -> &'static str {
        "Approximate equivalents for non-austenitic steels"
    }

    fn keywords(&self) -> &'static str {
        "hardness, Rockwell, Vickers, Brinell, HRC, HV, HBW, conversion, steel"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "Conversions between hardness scales are empirical and material dependent. Values \
             below apply to carbon and alloy steels in the heat-treated or annealed condition.",
        )?;

        let style = TableStyle::from_config(builder.config()).with_row_height(Self::ROW_HEIGHT);
        TableRenderer::new(style).render(
            builder,
            &ReferenceTable::new(&HARDNESS_COLUMNS, &HARDNESS_ROWS),
        )?;

        builder.note(
            "Caution",
            "Converted values are approximate. Where a specification calls for a given scale, \
             test on that scale rather than converting.",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_run_from_hardest_to_softest() {
        assert!(HARDNESS_ROWS.windows(2).all(|w| w[0].hrc == w[1].hrc + 1));
        assert!(HARDNESS_ROWS.windows(2).all(|w| w[0].hv > w[1].hv));
    }

    #[test]
    fn formats_cells() {
        let cells = HARDNESS_ROWS[0].cells();
        assert_eq!(cells, vec!["69", "1004", "—", "86.1"]);
        let cells = HARDNESS_ROWS[49].cells();
        assert_eq!(cells, vec!["20", "238", "226", "60.5"]);
    }
}
