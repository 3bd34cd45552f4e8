use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableStyle},
    ChartError,
};

pub const PPE_COLUMNS: [Column; 2] = [
    Column::new("Task", 150.0, Align::Left),
    Column::new("Minimum protection", 370.0, Align::Left),
];

#[rustfmt::skip]
pub const PPE: [[&str; 2]; 5] = [
    ["Sectioning and grinding", "Safety glasses, closed guards, hearing protection on abrasive cut-off saws"],
    ["Mounting", "Safety glasses, heat resistant gloves for hot mounting, nitrile gloves for resins"],
    ["Polishing", "Safety glasses, nitrile gloves when handling suspensions and lubricants"],
    ["Etching", "Splash goggles or face shield, chemical resistant gloves, lab coat, fume hood"],
    ["Electrolytic work", "Face shield, insulated tools, fume hood; never work alone"],
];

pub const ETCHANT_COLUMNS: [Column; 3] = [
    Column::new("Etchant", 110.0, Align::Left),
    Column::new("Main hazards", 180.0, Align::Left),
    Column::new("Handling", 230.0, Align::Left),
];

#[rustfmt::skip]
pub const ETCHANTS: [[&str; 3]; 6] = [
    ["Nital", "Flammable; nitric acid is corrosive and oxidising", "Mix small batches, add acid to alcohol slowly and never store in a sealed container"],
    ["Picral", "Dry picric acid is explosive; toxic", "Keep picric acid wetted, store small amounts and dispose of residues promptly"],
    ["Kroll's reagent", "Hydrofluoric acid: severe burns, systemic toxicity", "Use HF resistant gloves, keep calcium gluconate gel at hand, plastic labware only"],
    ["Keller's reagent", "Contains HF, HCl and nitric acid", "Fume hood, HF precautions, mix fresh and discard after use"],
    ["Aqua regia", "Strong oxidiser; releases toxic gases", "Prepare fresh in the hood, never cap while reacting, neutralise before disposal"],
    ["Perchloric electrolytes", "Explosive with organics when warm or concentrated", "Keep cold, use a dedicated perchloric hood and avoid contact with organic materials"],
];

/// Laboratory safety for preparation and etching
pub struct SafetySheet;

impl Chart for SafetySheet {
    fn file_name(&self) -> &'static str {
        "metallography-lab-safety.pdf"
    }

    fn title(&self) -> &'static str {
        "Metallography Lab Safety"
    }

    fn subject(&self) -> &'static str {
        "Protective equipment, chemical handling and emergencies"
    }

    fn keywords(&self) -> &'static str {
        "safety, PPE, etchant, hydrofluoric acid, picric acid, perchloric, fume hood"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "This sheet summarises common hazards in the preparation lab. It does not replace \
             the safety data sheet for each chemical or your site's own procedures.",
        )?;

        let style = TableStyle::from_config(builder.config());
        let renderer = TableRenderer::new(style);

        renderer.render_with_heading(
            builder,
            "Personal protective equipment",
            &ReferenceTable::new(&PPE_COLUMNS, &PPE),
        )?;

        builder.heading("Chemical handling")?;
        builder.bullets(&[
            "Read the safety data sheet before mixing any etchant for the first time.",
            "Always add acid to water or alcohol, slowly and with stirring.",
            "Label every container with contents, concentration, date and your name.",
            "Work in a fume hood with the sash lowered; keep only the quantities you need.",
            "Store acids, oxidisers and solvents apart in ventilated cabinets.",
        ])?;

        renderer.render_with_heading(
            builder,
            "Etchant hazards",
            &ReferenceTable::new(&ETCHANT_COLUMNS, &ETCHANTS),
        )?;

        builder.heading("Equipment")?;
        builder.bullets(&[
            "Keep guards closed on cut-off saws and let the wheel stop before opening.",
            "Secure specimens in the vice; never hold small parts by hand against a wheel.",
            "Allow hot mounting presses to cool before opening the mould.",
            "Unplug electrolytic polishing units before touching the cell or electrodes.",
        ])?;

        builder.heading("Emergencies")?;
        builder.paragraph(
            "For skin or eye contact, flush with water for at least 15 minutes and get medical \
             help. Know the location of the nearest eyewash station, safety shower, spill kit \
             and fire extinguisher before you start work.",
        )?;
        builder.note(
            "Warning",
            "Any exposure to hydrofluoric acid needs medical attention even when no pain is \
             felt. Apply calcium gluconate gel and call emergency services immediately.",
        )?;

        builder.heading("Waste disposal")?;
        builder.bullets(&[
            "Never pour etchants or spent electrolytes down the drain.",
            "Collect acids, solvents and heavy metal waste in separate labelled containers.",
            "Neutralise only where your procedures allow it, and record what was done.",
        ])?;
        Ok(())
    }
}
