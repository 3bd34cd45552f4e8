use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableStyle},
    ChartError,
};

pub const CLOTH_COLUMNS: [Column; 5] = [
    Column::new("Cloth", 104.0, Align::Left),
    Column::new("Nap", 58.0, Align::Centre),
    Column::new("Abrasive", 96.0, Align::Left),
    Column::new("Stage", 90.0, Align::Left),
    Column::new("Best for", 172.0, Align::Left),
];

#[rustfmt::skip]
pub const POLISHING_CLOTHS: [[&str; 5]; 10] = [
    ["Hard woven silk", "None", "Diamond 15–6 µm", "Rough polishing", "Hard steels, cast irons, edge retention"],
    ["Woven nylon", "None", "Diamond 9–3 µm", "Rough polishing", "Ferrous alloys, thermal spray coatings"],
    ["Hard synthetic pad", "None", "Diamond 9–6 µm", "Rough polishing", "Ceramics, carbides, composites"],
    ["Woven wool", "Low", "Diamond 6–3 µm", "Intermediate", "Non-ferrous metals, general purpose"],
    ["Polyester", "Low", "Diamond 3–1 µm", "Intermediate", "Steels, titanium, nickel alloys"],
    ["Acetate", "Low", "Diamond 3–1 µm", "Intermediate", "Hard materials where flatness matters"],
    ["Synthetic suede", "Medium", "Diamond 1 µm, alumina", "Final polishing", "Most metals before etching"],
    ["Short nap rayon", "Medium", "Alumina 0.3 µm", "Final polishing", "Aluminium, copper, soft alloys"],
    ["Chemically resistant pad", "Medium", "Colloidal silica", "Final polishing", "Titanium, refractory metals, EBSD"],
    ["Long nap velvet", "High", "Alumina 0.05 µm", "Final polishing", "Soft metals, lead, tin, precious metals"],
];

/// Polishing cloths matched to abrasives and materials
pub struct ClothGuide;

impl Chart for ClothGuide {
    fn file_name(&self) -> &'static str {
        "polishing-cloth-selection-guide.pdf"
    }

    fn title(&self) -> &'static str {
        "Polishing Cloth Selection Guide"
    }

    fn subject(&self) -> &'static str {
        "Matching cloth nap and abrasive to the material"
    }

    fn keywords(&self) -> &'static str {
        "polishing cloth, nap, diamond, alumina, colloidal silica, metallography"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "Harder, lower nap cloths keep specimens flat and preserve edges and inclusions. \
             Higher nap cloths give a better final finish on soft materials at the cost of \
             relief.",
        )?;

        let style = TableStyle::from_config(builder.config());
        TableRenderer::new(style)
            .render(builder, &ReferenceTable::new(&CLOTH_COLUMNS, &POLISHING_CLOTHS))?;

        builder.heading("Care and storage")?;
        builder.bullets(&[
            "Keep one cloth per abrasive size and label it; never move a cloth to a finer step.",
            "Rinse the cloth after each session and store it covered to keep out grit and dust.",
            "Replace a cloth once it glazes, tears or stops producing a uniform scratch pattern.",
        ])?;
        Ok(())
    }
}
