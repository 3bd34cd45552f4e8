use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableRow, TableStyle},
    ChartError,
};
use std::borrow::Cow;

/// One abrasive grade with its equivalents in the other grading systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GritRow {
    pub fepa: &'static str,
    pub ansi: &'static str,
    pub jis: &'static str,
    pub micron: &'static str,
    pub mesh: &'static str,
    pub category: &'static str,
}

impl TableRow for GritRow {
    fn cells(&self) -> Vec<Cow<'_, str>> {
        [
            self.fepa,
            self.ansi,
            self.jis,
            self.micron,
            self.mesh,
            self.category,
        ]
        .into_iter()
        .map(Cow::Borrowed)
        .collect()
    }
}

pub const GRIT_COLUMNS: [Column; 6] = [
    Column::new("FEPA (P)", 78.0, Align::Left),
    Column::new("ANSI / CAMI", 66.0, Align::Centre),
    Column::new("JIS", 56.0, Align::Centre),
    Column::new("Avg. size (µm)", 74.0, Align::Right),
    Column::new("Mesh", 50.0, Align::Centre),
    Column::new("Stage", 136.0, Align::Left),
];

const fn grit(
    fepa: &'static str,
    ansi: &'static str,
    jis: &'static str,
    micron: &'static str,
    mesh: &'static str,
    category: &'static str,
) -> GritRow {
    GritRow {
        fepa,
        ansi,
        jis,
        micron,
        mesh,
        category,
    }
}

#[rustfmt::skip]
pub const GRIT_ROWS: [GritRow; 28] = [
    grit("P60", "60", "#60", "269", "60", "Coarse grinding"),
    grit("P80", "80", "#80", "201", "80", "Coarse grinding"),
    grit("P100", "100", "#100", "162", "100", "Coarse grinding"),
    grit("P120", "120", "#120", "125", "120", "Planar grinding"),
    grit("P150", "150", "#150", "100", "140", "Planar grinding"),
    grit("P180", "180", "#180", "82", "170", "Planar grinding"),
    grit("P220", "220", "#220", "68", "200", "Planar grinding"),
    grit("P240", "240", "#240", "58.5", "230", "Fine grinding"),
    grit("P280", "—", "#280", "52.2", "270", "Fine grinding"),
    grit("P320", "280", "#320", "46.2", "325", "Fine grinding"),
    grit("P360", "—", "#360", "40.5", "400", "Fine grinding"),
    grit("P400", "320", "#400", "35.0", "—", "Fine grinding"),
    grit("P500", "360", "#500", "30.2", "—", "Fine grinding"),
    grit("P600", "—", "#600", "25.8", "—", "Fine grinding"),
    grit("P800", "400", "#700", "21.8", "—", "Fine grinding"),
    grit("P1000", "500", "#800", "18.3", "—", "Fine grinding"),
    grit("P1200", "600", "#1000", "15.3", "—", "Fine grinding"),
    grit("P1500", "800", "#1200", "12.6", "—", "Final grinding"),
    grit("P2000", "1000", "#1500", "10.3", "—", "Final grinding"),
    grit("P2500", "—", "#2000", "8.4", "—", "Final grinding"),
    grit("P3000", "1200", "#2500", "6.5", "—", "Final grinding"),
    grit("P4000", "—", "#3000", "5.0", "—", "Final grinding"),
    grit("Diamond 15 µm", "—", "—", "15", "—", "Rough polishing"),
    grit("Diamond 9 µm", "—", "—", "9", "—", "Rough polishing"),
    grit("Diamond 6 µm", "—", "—", "6", "—", "Intermediate polishing"),
    grit("Diamond 3 µm", "—", "—", "3", "—", "Intermediate polishing"),
    grit("Diamond 1 µm", "—", "—", "1", "—", "Fine polishing"),
    grit("Colloidal silica", "—", "—", "0.05", "—", "Final polishing"),
];

/// FEPA, ANSI/CAMI and JIS abrasive grades side by side
pub struct GritChart;

impl Chart for GritChart {
    fn file_name(&self) -> &'static str {
        "grit-size-conversion-chart.pdf"
    }

    fn title(&self) -> &'static str {
        "Grit Size Conversion Chart"
    }

    fn subject(&self) -> &'static str {
        "FEPA, ANSI/CAMI and JIS abrasive grades compared"
    }

    fn keywords(&self) -> &'static str {
        "grit, FEPA, ANSI, CAMI, JIS, abrasive, grinding, polishing, metallography"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "Grades are ordered from coarsest to finest. Equivalents are matched on average \
             particle size; a dash means the system has no grade close to that size.",
        )?;

        let style = TableStyle::from_config(builder.config());
        TableRenderer::new(style).render(builder, &ReferenceTable::new(&GRIT_COLUMNS, &GRIT_ROWS))?;

        builder.note(
            "Tip",
            "Each step should remove the damage left by the previous one. Skipping more than \
             one grade usually costs more time than it saves.",
        )?;
        Ok(())
    }
}
