use super::Chart;
use crate::{
    builder::DocumentBuilder,
    table::{Align, Column, ReferenceTable, TableRenderer, TableStyle},
    ChartError,
};

pub const TROUBLESHOOTING_COLUMNS: [Column; 3] = [
    Column::new("Problem", 110.0, Align::Left),
    Column::new("Likely cause", 190.0, Align::Left),
    Column::new("Remedy", 220.0, Align::Left),
];

#[rustfmt::skip]
pub const PREPARATION_PROBLEMS: [[&str; 3]; 14] = [
    ["Deep scratches remain", "Previous grinding step too short or a grade skipped", "Go back one grade and grind until all scratches from the earlier step are gone"],
    ["Random coarse scratches", "Contamination carried over between steps", "Clean the specimen, holder and hands between steps; use separate cloths per abrasive"],
    ["Comet tails", "Hard inclusions or pores dragged across the surface", "Reduce pressure, use lower nap cloths and rotate the specimen during polishing"],
    ["Edge rounding", "High nap cloth, excessive time or unsupported edges", "Mount with a hard resin or edge-retention filler; use harder cloths and shorter times"],
    ["Relief between phases", "Final polish too long or on too soft a cloth", "Shorten the final step and use a lower nap cloth with colloidal silica"],
    ["Pull-outs", "Brittle phases or inclusions torn out during grinding", "Lower the load, use finer starting grit and fresh diamond on a hard cloth"],
    ["Smeared surface", "Soft metal deformed by worn or clogged abrasive", "Use fresh paper, more lubricant and a lighter load; add an attack polish step"],
    ["Embedded abrasive", "Loose abrasive pressed into soft metals", "Use fixed abrasive discs, more lubricant and finish with colloidal silica"],
    ["Staining after etching", "Etchant or water left in pores or the mount gap", "Rinse with alcohol, dry with warm air at once and use a vacuum impregnated mount"],
    ["Over-etching", "Etch time too long or etchant too strong", "Repolish lightly and etch in shorter steps, checking under the microscope between each"],
    ["Under-etching", "Weak or exhausted etchant, passive surface", "Mix fresh etchant, swab rather than immerse, or reactivate the surface by repolishing"],
    ["Uneven etch", "Residual deformation or grease on the surface", "Degrease thoroughly and remove the deformed layer with a final polishing step"],
    ["Gaps at the mount edge", "Resin shrinkage during curing", "Use a low shrinkage epoxy, clean the specimen before mounting and cure slowly"],
    ["Specimen not flat", "Uneven pressure or rocking in the holder", "Use a specimen holder, central force and keep the platen speed moderate"],
];

/// Preparation defects with their causes and fixes
pub struct TroubleshootingGuide;

impl Chart for TroubleshootingGuide {
    fn file_name(&self) -> &'static str {
        "sample-preparation-troubleshooting.pdf"
    }

    fn title(&self) -> &'static str {
        "Sample Preparation Troubleshooting"
    }

    fn subject(&self) -> &'static str {
        "Common preparation defects, causes and remedies"
    }

    fn keywords(&self) -> &'static str {
        "troubleshooting, scratches, relief, edge rounding, pull-outs, etching, metallography"
    }

    fn build(&self, builder: &mut DocumentBuilder) -> Result<(), ChartError> {
        builder.paragraph(
            "Most preparation defects come from the grinding stages rather than the final \
             polish. When a defect persists, go back a step before changing the final \
             procedure.",
        )?;

        let style = TableStyle::from_config(builder.config());
        TableRenderer::new(style).render(
            builder,
            &ReferenceTable::new(&TROUBLESHOOTING_COLUMNS, &PREPARATION_PROBLEMS),
        )?;

        builder.note(
            "Tip",
            "Check the specimen under the microscope after every step. A defect caught early \
             costs one step to fix; one found after etching costs the whole sequence.",
        )?;
        Ok(())
    }
}
